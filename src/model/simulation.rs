//! The portable simulation document: a snapshot of a bill plus one offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{bill::BillData, offer::OfferData};

/// Document format version written into every new snapshot. Readers are
/// forward-tolerant: any version loads as long as the required fields parse.
pub const DOCUMENT_VERSION: &str = "1.0";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SavedSimulation {
    pub version: String,

    pub timestamp: DateTime<Utc>,

    #[serde(rename = "billData")]
    pub bill_data: BillData,

    #[serde(rename = "newOffer")]
    pub new_offer: OfferData,
}

impl SavedSimulation {
    pub fn new(bill_data: BillData, new_offer: OfferData) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            timestamp: Utc::now(),
            bill_data,
            new_offer,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::bill::Taxes,
        prelude::*,
        quantity::{
            cost::Cost,
            energy::KilowattHours,
            power::KiloVoltAmperes,
            rate::{DailyRate, KilowattHourRate},
        },
    };

    use super::*;

    fn sample() -> SavedSimulation {
        SavedSimulation::new(
            BillData {
                consumption: KilowattHours(200.0),
                contracted_power: KiloVoltAmperes(4.6),
                taxes: Taxes {
                    cav: Cost::from(1.5),
                    dgeg: Cost::from(0.1),
                    iec: Cost::from(6.0),
                    social: Cost::from(-1.2),
                },
                stated_total: Cost::from(54.54),
                billing_days: 30,
                power_price: Some(DailyRate(0.15)),
                energy_price: Some(KilowattHourRate(0.18)),
            },
            OfferData {
                supplier: Some("Luzboa".to_owned()),
                power_price: DailyRate(0.14),
                energy_price: KilowattHourRate(0.16),
            },
        )
    }

    #[test]
    fn test_round_trip() -> Result {
        let simulation = sample();
        let json = serde_json::to_string(&simulation)?;
        let parsed: SavedSimulation = serde_json::from_str(&json)?;
        assert_eq!(parsed, simulation);
        Ok(())
    }

    #[test]
    fn test_document_field_names() -> Result {
        let value = serde_json::to_value(sample())?;
        assert_eq!(value["version"], DOCUMENT_VERSION);
        assert!(value["timestamp"].is_string());
        assert!(value["billData"]["contractedPower"].is_number());
        assert!(value["billData"]["socialTariff"].is_number());
        assert_eq!(value["newOffer"]["supplier"], "Luzboa");
        Ok(())
    }

    #[test]
    fn test_defaults_applied_on_load() -> Result {
        let json = r#"{
            "version": "1.0",
            "timestamp": "2026-01-02T03:04:05Z",
            "billData": {"consumption": 150.0, "contractedPower": 3.45},
            "newOffer": {"powerPrice": 0.14, "energyPrice": 0.16}
        }"#;
        let parsed: SavedSimulation = serde_json::from_str(json)?;
        assert_eq!(parsed.bill_data.billing_days, 30);
        assert_eq!(parsed.bill_data.taxes, Taxes::default());
        assert!(parsed.new_offer.supplier.is_none());
        Ok(())
    }
}
