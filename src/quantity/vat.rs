use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fractional VAT rate, for example `0.23` for the standard 23 % rate.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct VatRate(pub f64);

impl Display for VatRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} %", self.0 * 100.0)
    }
}
