use serde::{Deserialize, Serialize};

use crate::quantity::{
    cost::Cost,
    energy::KilowattHours,
    power::KiloVoltAmperes,
    rate::{DailyRate, KilowattHourRate},
};

/// Billing-period length assumed when the bill does not state one.
pub const DEFAULT_BILLING_DAYS: u32 = 30;

/// The four levies itemised on a Portuguese electricity bill.
///
/// All amounts are for the whole billing period. `social` is the social-tariff
/// adjustment and is conventionally zero or negative (a credit).
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Taxes {
    #[serde(default)]
    pub cav: Cost,

    #[serde(default)]
    pub dgeg: Cost,

    #[serde(default)]
    pub iec: Cost,

    #[serde(default, rename = "socialTariff")]
    pub social: Cost,
}

impl Taxes {
    /// Pre-VAT sum of all four components, the credit included.
    pub fn base_total(&self) -> Cost {
        self.cav + self.dgeg + self.iec + self.social
    }
}

/// One billing period as stated on the current bill.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillData {
    pub consumption: KilowattHours,

    pub contracted_power: KiloVoltAmperes,

    #[serde(flatten)]
    pub taxes: Taxes,

    /// Grand total as printed on the bill. Informational only, it never
    /// enters the calculation.
    #[serde(default)]
    pub stated_total: Cost,

    #[serde(default = "default_billing_days")]
    pub billing_days: u32,

    /// Effective unit price for contracted power, when the bill states one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_price: Option<DailyRate>,

    /// Effective unit price for consumed energy, when the bill states one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_price: Option<KilowattHourRate>,
}

const fn default_billing_days() -> u32 {
    DEFAULT_BILLING_DAYS
}

impl Default for BillData {
    /// Fresh zero-valued bill. Constructed anew on every reset so that no
    /// shared default instance can ever be mutated in place.
    fn default() -> Self {
        Self {
            consumption: KilowattHours::ZERO,
            contracted_power: KiloVoltAmperes::default(),
            taxes: Taxes::default(),
            stated_total: Cost::ZERO,
            billing_days: DEFAULT_BILLING_DAYS,
            power_price: None,
            energy_price: None,
        }
    }
}
