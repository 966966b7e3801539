use serde::{Deserialize, Serialize};

use crate::quantity::rate::{DailyRate, KilowattHourRate};

/// A candidate supplier's offer: two unit prices and an optional name.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    pub power_price: DailyRate,

    pub energy_price: KilowattHourRate,
}

impl OfferData {
    pub fn label(&self) -> &str {
        self.supplier.as_deref().unwrap_or("unnamed offer")
    }
}
