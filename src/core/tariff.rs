//! The tariff cost calculator: one billing period, one set of unit prices.

use std::ops::Add;

use crate::{
    core::vat::VatConfig,
    model::bill::Taxes,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::KiloVoltAmperes,
        rate::{DailyRate, KilowattHourRate},
    },
};

/// Unit prices of one tariff, current or offered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TariffPrices {
    pub power_per_day: DailyRate,
    pub energy_per_kwh: KilowattHourRate,
}

/// Pre-VAT amount and the VAT due on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostComponent {
    pub base: Cost,
    pub vat: Cost,
}

impl CostComponent {
    pub const fn new(base: Cost, vat: Cost) -> Self {
        Self { base, vat }
    }

    pub fn total(self) -> Cost {
        self.base + self.vat
    }
}

impl Add for CostComponent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.base + rhs.base, self.vat + rhs.vat)
    }
}

/// Tax-inclusive cost of one tariff over one billing period, split into the
/// three cost categories. Never persisted, recomputed from inputs on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub energy: CostComponent,
    pub power: CostComponent,
    pub levies: CostComponent,
}

impl CostBreakdown {
    pub fn base(&self) -> Cost {
        self.energy.base + self.power.base + self.levies.base
    }

    pub fn vat(&self) -> Cost {
        self.energy.vat + self.power.vat + self.levies.vat
    }

    pub fn total(&self) -> Cost {
        self.base() + self.vat()
    }
}

/// Computes the tax-inclusive cost breakdown of one tariff.
///
/// Pure: identical inputs always produce the identical breakdown, and
/// `total == base + vat` holds exactly for the breakdown and for each of its
/// three components. Nothing is rounded mid-computation.
///
/// VAT rules encoded here:
/// - power availability is taxed at the low rate at or below the low-power
///   threshold, at the standard rate above it;
/// - under the low-power bracket, the first [`VatConfig::tier1_energy`] of
///   consumption is taxed at the low rate and the remainder at the standard
///   rate, both tiers at the same unit price;
/// - CAV at the low rate, DGEG and IEC at the standard rate, the
///   social-tariff adjustment VAT-exempt.
pub fn compute_cost(
    consumption: KilowattHours,
    contracted_power: KiloVoltAmperes,
    billing_days: u32,
    prices: TariffPrices,
    taxes: &Taxes,
    vat: &VatConfig,
) -> CostBreakdown {
    let power_base = prices.power_per_day.over(billing_days);
    let power = CostComponent::new(power_base, power_base.vat_at(vat.power_rate(contracted_power)));

    let energy_base = consumption * prices.energy_per_kwh;
    let energy_vat = if vat.is_low_power(contracted_power) {
        let tier1 = consumption.min(vat.tier1_energy);
        let tier2 = consumption - tier1;
        (tier1 * prices.energy_per_kwh).vat_at(vat.low_rate)
            + (tier2 * prices.energy_per_kwh).vat_at(vat.standard_rate)
    } else {
        energy_base.vat_at(vat.standard_rate)
    };
    let energy = CostComponent::new(energy_base, energy_vat);

    // The social-tariff credit contributes to the base only.
    let levies = CostComponent::new(
        taxes.base_total(),
        taxes.cav.vat_at(vat.low_rate)
            + taxes.dgeg.vat_at(vat.standard_rate)
            + taxes.iec.vat_at(vat.standard_rate),
    );

    CostBreakdown { energy, power, levies }
}
