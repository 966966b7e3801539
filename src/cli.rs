use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::{
    api::extraction,
    model::{
        bill::{BillData, Taxes},
        offer::OfferData,
    },
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::KiloVoltAmperes,
        rate::{DailyRate, KilowattHourRate},
    },
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the current bill against one supplier offer.
    Compare(Box<CompareArgs>),

    /// Rank saved simulations against the current bill, cheapest first.
    Rank(Box<RankArgs>),

    /// Pretty-print a saved simulation document.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub bill: BillSourceArgs,

    #[clap(flatten)]
    pub offer: OfferArgs,

    /// Write the plain-text report to this path.
    #[clap(long = "report-out")]
    pub report_out: Option<PathBuf>,

    /// Save the bill and the offer as a simulation document.
    #[clap(long = "save")]
    pub save: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RankArgs {
    #[clap(flatten)]
    pub bill: BillSourceArgs,

    /// Saved simulation documents to rank.
    #[clap(required = true)]
    pub simulations: Vec<PathBuf>,

    /// Exclude a saved offer by its original index; may be repeated.
    #[clap(long = "remove")]
    pub remove: Vec<usize>,
}

#[derive(Parser)]
pub struct ShowArgs {
    pub path: PathBuf,
}

/// Where the current bill comes from: a file, or the manual numeric fields.
#[derive(Parser)]
pub struct BillSourceArgs {
    /// Bill file. A PDF or an image goes through the extraction service,
    /// a JSON file is read as a saved simulation document.
    #[clap(long = "bill")]
    pub bill: Option<PathBuf>,

    #[clap(flatten)]
    pub manual: ManualBillArgs,

    #[clap(flatten)]
    pub extraction: ExtractionApiArgs,
}

#[derive(Parser)]
pub struct ManualBillArgs {
    /// Energy consumed over the billing period, in kWh.
    #[clap(long = "consumption-kwh", default_value = "0")]
    pub consumption: KilowattHours,

    /// Contracted power, in kVA.
    #[clap(long = "power-kva", default_value = "0")]
    pub contracted_power: KiloVoltAmperes,

    #[clap(long = "billing-days", default_value = "30")]
    pub billing_days: u32,

    /// Audiovisual contribution (CAV), in euros.
    #[clap(long, default_value = "0")]
    pub cav: Cost,

    /// DGEG exploration tax, in euros.
    #[clap(long, default_value = "0")]
    pub dgeg: Cost,

    /// Special consumption tax (IEC), in euros.
    #[clap(long, default_value = "0")]
    pub iec: Cost,

    /// Social-tariff adjustment, in euros; zero or negative.
    #[clap(long = "social-tariff", default_value = "0", allow_negative_numbers = true)]
    pub social: Cost,

    /// Grand total as printed on the bill.
    #[clap(long = "stated-total", default_value = "0")]
    pub stated_total: Cost,

    /// Current tariff's power price, in euro per day.
    #[clap(long = "current-power-price")]
    pub power_price: Option<DailyRate>,

    /// Current tariff's energy price, in euro per kWh.
    #[clap(long = "current-energy-price")]
    pub energy_price: Option<KilowattHourRate>,
}

impl ManualBillArgs {
    pub fn to_bill(&self) -> BillData {
        BillData {
            consumption: self.consumption,
            contracted_power: self.contracted_power,
            taxes: Taxes { cav: self.cav, dgeg: self.dgeg, iec: self.iec, social: self.social },
            stated_total: self.stated_total,
            billing_days: self.billing_days,
            power_price: self.power_price,
            energy_price: self.energy_price,
        }
    }
}

#[derive(Parser)]
pub struct OfferArgs {
    /// Supplier name for the report and the saved document.
    #[clap(long, env = "OFFER_SUPPLIER")]
    pub supplier: Option<String>,

    /// Offered power price, in euro per day.
    #[clap(id = "offer_power_price", long = "offer-power-price")]
    pub power_price: DailyRate,

    /// Offered energy price, in euro per kWh.
    #[clap(id = "offer_energy_price", long = "offer-energy-price")]
    pub energy_price: KilowattHourRate,
}

impl OfferArgs {
    pub fn to_offer(&self) -> OfferData {
        OfferData {
            supplier: self.supplier.clone(),
            power_price: self.power_price,
            energy_price: self.energy_price,
        }
    }
}

#[derive(Parser)]
pub struct ExtractionApiArgs {
    /// Bill-extraction service endpoint.
    #[clap(long = "extraction-url", env = "EXTRACTION_URL")]
    pub endpoint: Option<Url>,

    /// Bill-extraction service API key.
    #[clap(long = "extraction-api-key", env = "EXTRACTION_API_KEY")]
    pub api_key: Option<String>,
}

impl ExtractionApiArgs {
    pub fn try_new_client(&self) -> Result<extraction::Api> {
        let endpoint = self
            .endpoint
            .clone()
            .context("an extraction service endpoint is required to parse this bill")?;
        let api_key = self
            .api_key
            .clone()
            .context("an extraction service API key is required to parse this bill")?;
        extraction::Api::try_new(endpoint, api_key)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_manual_bill_round_trip() {
        let args = Args::parse_from([
            "tarifa",
            "compare",
            "--consumption-kwh",
            "200",
            "--power-kva",
            "4.6",
            "--social-tariff=-1.2",
            "--offer-power-price",
            "0.14",
            "--offer-energy-price",
            "0.16",
        ]);
        let Command::Compare(args) = args.command else {
            panic!("expected the compare subcommand");
        };
        let bill = args.bill.manual.to_bill();
        assert_abs_diff_eq!(bill.consumption.0, 200.0);
        assert_abs_diff_eq!(bill.taxes.social.value(), -1.2);
        assert_eq!(bill.billing_days, 30);
    }
}
