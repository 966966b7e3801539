use std::fmt::{Display, Formatter};
use std::ops::Mul;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::quantity::vat::VatRate;

/// Euro amount. Backed by [`OrderedFloat`] so that totals are [`Ord`] and rankable.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Cost(pub OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn value(self) -> f64 {
        self.0.0
    }

    /// VAT amount due on this base amount.
    pub fn vat_at(self, rate: VatRate) -> Self {
        Self::from(self.0.0 * rate.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Self(OrderedFloat(value))
    }
}

impl Mul<f64> for Cost {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €", self.0)
    }
}

/// Always-signed rendering for differences and savings.
pub struct SignedCost(pub Cost);

impl Display for SignedCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2} €", (self.0).0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_vat_at() {
        assert_abs_diff_eq!(Cost::from(100.0).vat_at(VatRate(0.23)).value(), 23.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ordering() {
        assert!(Cost::from(1.5) < Cost::from(2.0));
        assert_eq!(Cost::from(1.0) + Cost::from(0.5), Cost::from(1.5));
    }
}
