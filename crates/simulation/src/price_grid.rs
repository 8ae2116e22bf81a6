use clmm_hedge_domain::error::{DomainError, Result};
use clmm_hedge_domain::value_objects::{Price, PriceRange};
use serde::{Deserialize, Serialize};

/// An ordered set of prices to evaluate a position at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGrid {
    prices: Vec<f64>,
}

impl PriceGrid {
    /// Default sample count for holdings scans.
    pub const HOLDINGS_POINTS: usize = 300;
    /// Default sample count for performance scans.
    pub const PERFORMANCE_POINTS: usize = 500;

    /// `points` evenly spaced prices from `min` to `max`, both included.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidGrid`] unless `0 < min < max` and `points >= 2`.
    pub fn linear(min: f64, max: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(DomainError::InvalidGrid("at least two points are required"));
        }
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(DomainError::InvalidGrid("bounds must satisfy 0 < min < max"));
        }

        let step = (max - min) / (points - 1) as f64;
        let mut prices: Vec<f64> = (0..points).map(|i| min + i as f64 * step).collect();
        // Pin the endpoint so the upper bound is hit exactly.
        prices[points - 1] = max;
        Ok(Self { prices })
    }

    /// Grid spanning `[0.5·p_a, 1.5·p_b]`, enough to show both flat regions.
    pub fn around_range(range: &PriceRange, points: usize) -> Result<Self> {
        Self::linear(0.5 * range.lower(), 1.5 * range.upper(), points)
    }

    /// Grid spanning `[0.2·p, 1.4·p]` around an entry price.
    pub fn around_price(price: f64, points: usize) -> Result<Self> {
        let price = Price::new(price)?;
        Self::linear(0.2 * price.value(), 1.4 * price.value(), points)
    }

    /// Caller-supplied prices, kept in the given order.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidPrice`] for the first non-positive entry.
    pub fn from_prices(prices: Vec<f64>) -> Result<Self> {
        for &p in &prices {
            Price::new(p)?;
        }
        Ok(Self { prices })
    }

    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl AsRef<[f64]> for PriceGrid {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

impl<'a> IntoIterator for &'a PriceGrid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.prices.iter()
    }
}
