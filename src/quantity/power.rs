use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Contracted power capacity.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
)]
pub struct KiloVoltAmperes(pub f64);

impl Display for KiloVoltAmperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kVA", self.0)
    }
}
