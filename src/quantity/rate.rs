use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::cost::Cost;

/// Euro per kilowatt-hour of consumed energy.
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
pub struct KilowattHourRate(pub f64);

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} €/kWh", self.0)
    }
}

/// Euro per day of contracted power availability.
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
pub struct DailyRate(pub f64);

impl DailyRate {
    /// Power availability cost over a billing period of the given length.
    pub fn over(self, days: u32) -> Cost {
        Cost::from(self.0 * f64::from(days))
    }
}

impl Display for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} €/day", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_power_cost_over_period() {
        assert_abs_diff_eq!(DailyRate(0.15).over(30).value(), 4.5, epsilon = 1e-12);
    }
}
