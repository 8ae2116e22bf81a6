use crate::enums::RangeRegime;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Lower and upper price bounds of a position, in USD per BTC.
///
/// # Invariants
///
/// `0 < lower < upper`, both finite. Checked before any square root is taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct PriceRange {
    lower: f64,
    upper: f64,
}

#[derive(Deserialize)]
struct RangeBounds {
    lower: f64,
    upper: f64,
}

impl PriceRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if either bound is non-positive or
    /// non-finite, or if `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let valid = lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper;
        if !valid {
            return Err(DomainError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound `p_a`.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound `p_b`.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `√p_a`.
    #[must_use]
    pub fn sqrt_lower(&self) -> f64 {
        self.lower.sqrt()
    }

    /// `√p_b`.
    #[must_use]
    pub fn sqrt_upper(&self) -> f64 {
        self.upper.sqrt()
    }

    /// Whether `price` lies within the bounds, inclusive.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.lower && price <= self.upper
    }

    /// Classifies `price` against the range.
    #[must_use]
    pub fn regime(&self, price: f64) -> RangeRegime {
        if price <= self.lower {
            RangeRegime::Below
        } else if price >= self.upper {
            RangeRegime::Above
        } else {
            RangeRegime::Inside
        }
    }
}

impl TryFrom<RangeBounds> for PriceRange {
    type Error = DomainError;

    fn try_from(bounds: RangeBounds) -> Result<Self> {
        Self::new(bounds.lower, bounds.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_bounds_rejected() {
        assert_eq!(
            PriceRange::new(1.0, 1.0),
            Err(DomainError::InvalidRange {
                lower: 1.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(PriceRange::new(0.0, 10.0).is_err());
        assert!(PriceRange::new(-5.0, 10.0).is_err());
        assert!(PriceRange::new(20.0, 10.0).is_err());
        assert!(PriceRange::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_regime_boundaries_are_outside() {
        let range = PriceRange::new(20_000.0, 40_000.0).unwrap();
        assert_eq!(range.regime(20_000.0), RangeRegime::Below);
        assert_eq!(range.regime(20_000.1), RangeRegime::Inside);
        assert_eq!(range.regime(40_000.0), RangeRegime::Above);
        assert!(range.contains(20_000.0));
        assert!(range.contains(40_000.0));
        assert!(!range.contains(40_000.1));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PriceRange = serde_json::from_str(r#"{"lower":1.0,"upper":2.0}"#).unwrap();
        assert_eq!(ok.upper(), 2.0);
        let inverted = serde_json::from_str::<PriceRange>(r#"{"lower":2.0,"upper":1.0}"#);
        assert!(inverted.is_err());
    }
}
