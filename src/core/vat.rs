//! Jurisdiction tax parameters.

use crate::quantity::{energy::KilowattHours, power::KiloVoltAmperes, vat::VatRate};

/// VAT rates and bracket thresholds of one jurisdiction.
///
/// The social-tariff adjustment is treated as VAT-exempt everywhere in the
/// calculation. That treatment is a configuration decision pending
/// domain-expert review, not a rule derived from cited tax law.
#[derive(Clone, Copy, Debug)]
pub struct VatConfig {
    pub low_rate: VatRate,

    pub standard_rate: VatRate,

    /// Contracted-power bracket boundary: at or below it the reduced rates
    /// apply to power and to the first energy tier.
    pub low_power_threshold: KiloVoltAmperes,

    /// Consumption band taxed at the low rate under the low-power bracket.
    pub tier1_energy: KilowattHours,
}

impl VatConfig {
    pub const LOW_RATE: VatRate = VatRate(0.06);
    pub const STANDARD_RATE: VatRate = VatRate(0.23);

    /// Mainland Portugal rules.
    pub const PORTUGAL: Self = Self {
        low_rate: Self::LOW_RATE,
        standard_rate: Self::STANDARD_RATE,
        low_power_threshold: KiloVoltAmperes(6.9),
        tier1_energy: KilowattHours(100.0),
    };

    pub fn is_low_power(&self, contracted_power: KiloVoltAmperes) -> bool {
        contracted_power <= self.low_power_threshold
    }

    /// Rate applied to the power availability cost.
    pub fn power_rate(&self, contracted_power: KiloVoltAmperes) -> VatRate {
        if self.is_low_power(contracted_power) { self.low_rate } else { self.standard_rate }
    }
}

impl Default for VatConfig {
    fn default() -> Self {
        Self::PORTUGAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_bracket() {
        let vat = VatConfig::PORTUGAL;
        assert_eq!(vat.power_rate(KiloVoltAmperes(3.45)), VatConfig::LOW_RATE);
        assert_eq!(vat.power_rate(KiloVoltAmperes(6.9)), VatConfig::LOW_RATE);
        assert_eq!(vat.power_rate(KiloVoltAmperes(10.35)), VatConfig::STANDARD_RATE);
    }
}
