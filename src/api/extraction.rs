//! Client for the external bill-extraction service.
//!
//! The service is an opaque collaborator: it receives the raw document bytes
//! and answers with the structured bill fields. One shot, no retries; a
//! failure leaves the caller's bill state untouched.

use std::{path::Path, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde::Deserialize;

use crate::{
    model::bill::{BillData, DEFAULT_BILLING_DAYS, Taxes},
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::KiloVoltAmperes,
        rate::{DailyRate, KilowattHourRate},
    },
};

/// Uploads above this size are rejected before any processing.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Upload rejected before it reaches the extraction service.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported file type `{0}`, expected a PDF, a JSON document, or an image")]
    UnsupportedType(String),

    #[error("the file is too large: {0} bytes, the limit is {MAX_UPLOAD_BYTES} bytes")]
    TooLarge(usize),
}

/// The extraction service answered, but not with a usable bill.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("the extraction service returned no bill data")]
    Empty,

    #[error("the extraction service response is missing the required `{0}` field")]
    MissingField(&'static str),
}

/// Guesses the MIME type from the file extension.
pub fn mime_from_path(path: &Path) -> Result<&'static str, UploadError> {
    let extension =
        path.extension().and_then(|extension| extension.to_str()).unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => Ok("application/pdf"),
        "json" => Ok("application/json"),
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        _ => Err(UploadError::UnsupportedType(path.display().to_string())),
    }
}

/// Validates an upload before any processing happens.
pub fn validate_upload(content: &[u8], mime: &str) -> Result<(), UploadError> {
    if content.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(content.len()));
    }
    match mime {
        "application/pdf" | "application/json" => Ok(()),
        _ if mime.starts_with("image/") => Ok(()),
        other => Err(UploadError::UnsupportedType(other.to_owned())),
    }
}

/// Seam for the bill-extraction call, so the engine never depends on the
/// concrete service.
#[async_trait]
pub trait BillExtractor: Sync {
    async fn extract(&self, content: &[u8], mime: &str) -> Result<BillData>;
}

pub struct Api {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl Api {
    pub fn try_new(endpoint: Url, api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self { client, endpoint, api_key })
    }
}

#[async_trait]
impl BillExtractor for Api {
    #[instrument(skip_all, fields(mime = mime, n_bytes = content.len()))]
    async fn extract(&self, content: &[u8], mime: &str) -> Result<BillData> {
        validate_upload(content, mime)?;
        self.client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, mime)
            .body(content.to_vec())
            .send()
            .await
            .context("failed to call the extraction service")?
            .error_for_status()
            .context("the extraction request failed")?
            .json::<ExtractionResponse>()
            .await
            .context("failed to deserialize the extraction response")?
            .try_into_bill()
    }
}

/// Bill fields as the service reports them. Everything is optional on the
/// wire; the required-field contract is enforced in [`Self::try_into_bill`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionResponse {
    consumption: Option<f64>,
    contracted_power: Option<f64>,
    total: Option<f64>,
    cav: Option<f64>,
    dgeg: Option<f64>,
    iec: Option<f64>,
    social_tariff: Option<f64>,
    billing_days: Option<u32>,
    power_price: Option<f64>,
    energy_price: Option<f64>,
}

impl ExtractionResponse {
    /// Required fields must be present; absent levies default to zero and an
    /// absent period length defaults to [`DEFAULT_BILLING_DAYS`].
    fn try_into_bill(self) -> Result<BillData> {
        if self.consumption.is_none() && self.contracted_power.is_none() && self.total.is_none() {
            return Err(ExtractionError::Empty.into());
        }
        let consumption = self.consumption.ok_or(ExtractionError::MissingField("consumption"))?;
        let contracted_power =
            self.contracted_power.ok_or(ExtractionError::MissingField("contractedPower"))?;
        let stated_total = self.total.ok_or(ExtractionError::MissingField("total"))?;
        Ok(BillData {
            consumption: KilowattHours(consumption),
            contracted_power: KiloVoltAmperes(contracted_power),
            taxes: Taxes {
                cav: Cost::from(self.cav.unwrap_or_default()),
                dgeg: Cost::from(self.dgeg.unwrap_or_default()),
                iec: Cost::from(self.iec.unwrap_or_default()),
                social: Cost::from(self.social_tariff.unwrap_or_default()),
            },
            stated_total: Cost::from(stated_total),
            billing_days: self.billing_days.unwrap_or(DEFAULT_BILLING_DAYS),
            power_price: self.power_price.map(DailyRate),
            energy_price: self.energy_price.map(KilowattHourRate),
        })
    }
}
