//! Position vs. hold vs. delta-neutral comparison.
//!
//! Every curve is expressed as a percentage return on the deposit's value at
//! entry, so positions of different size compare directly.
//!
//! The delta-neutral curve shorts the deposit's own BTC amount at the entry
//! price. That is a different sizing from [`clmm_hedge_domain::hedge`], which
//! sizes against an assumed price distribution.

use clmm_hedge_domain::error::{DomainError, Result};
use clmm_hedge_domain::math::concentrated_liquidity::value;
use clmm_hedge_domain::math::liquidity::liquidity_from_deposit;
use clmm_hedge_domain::value_objects::{Deposit, Price, PriceRange};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Returns at one sampled price, all in percent of the initial deposit value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Sampled price.
    pub price: f64,
    /// `(p − p_0)/p_0·100`.
    pub price_change_pct: f64,
    /// Liquidity position.
    pub position_pct: f64,
    /// Holding the deposited tokens untouched.
    pub hodl_pct: f64,
    /// Liquidity position plus a static short of the deposited BTC.
    pub delta_neutral_pct: f64,
}

/// Performance curves for a deposit over a price grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    /// Entry price `p_0`.
    pub entry_price: f64,
    /// USD value of the deposit at entry.
    pub initial_value: f64,
    /// Liquidity recovered from the deposit.
    pub liquidity: f64,
    /// Lower range bound as a change from entry, in percent.
    pub lower_change_pct: f64,
    /// Upper range bound as a change from entry, in percent.
    pub upper_change_pct: f64,
    /// One point per sampled price, in input order.
    pub points: Vec<PerformancePoint>,
}

impl PerformanceSeries {
    /// `(price, pct)` pairs of the liquidity position.
    pub fn position(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.price, p.position_pct))
    }

    /// `(price, pct)` pairs of holding the deposit.
    pub fn hodl(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.price, p.hodl_pct))
    }

    /// `(price, pct)` pairs of the hedged position.
    pub fn delta_neutral(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.price, p.delta_neutral_pct))
    }
}

/// Per-deposit constants shared by every sampled price.
struct Comparator<'a> {
    deposit: &'a Deposit,
    range: &'a PriceRange,
    liquidity: f64,
    initial_value: f64,
}

impl<'a> Comparator<'a> {
    fn new(deposit: &'a Deposit, range: &'a PriceRange, prices: &[f64]) -> Result<Self> {
        for &p in prices {
            Price::new(p)?;
        }
        let liquidity = liquidity_from_deposit(deposit, range)?;
        let initial_value = deposit.initial_value();
        if initial_value <= 0.0 {
            return Err(DomainError::InvalidAmount {
                token: "deposit",
                value: initial_value,
            });
        }
        Ok(Self {
            deposit,
            range,
            liquidity,
            initial_value,
        })
    }

    fn pct(&self, v: f64) -> f64 {
        (v / self.initial_value - 1.0) * 100.0
    }

    fn point(&self, price: f64) -> Result<PerformancePoint> {
        let entry = self.deposit.price();
        let btc = self.deposit.btc_amount();

        let position_value = value(price, self.range, self.liquidity)?;
        let hodl_value = self.deposit.amounts().value_at(price);
        let short_pnl = btc * (entry - price);
        let delta_neutral_value = position_value + short_pnl;

        Ok(PerformancePoint {
            price,
            price_change_pct: change_pct(price, entry),
            position_pct: self.pct(position_value),
            hodl_pct: self.pct(hodl_value),
            delta_neutral_pct: self.pct(delta_neutral_value),
        })
    }

    fn finish(&self, points: Vec<PerformancePoint>) -> PerformanceSeries {
        let entry = self.deposit.price();
        PerformanceSeries {
            entry_price: entry,
            initial_value: self.initial_value,
            liquidity: self.liquidity,
            lower_change_pct: change_pct(self.range.lower(), entry),
            upper_change_pct: change_pct(self.range.upper(), entry),
            points,
        }
    }
}

fn change_pct(price: f64, entry: f64) -> f64 {
    (price - entry) / entry * 100.0
}

/// Builds performance curves for `deposit` over the caller's price grid.
///
/// # Errors
///
/// - Any [`DomainError`] from recovering liquidity from the deposit
/// - [`DomainError::InvalidPrice`] for a non-positive sampled price
/// - [`DomainError::InvalidAmount`] if the deposit is worth nothing
pub fn performance_series(
    deposit: &Deposit,
    range: &PriceRange,
    prices: &[f64],
) -> Result<PerformanceSeries> {
    let comparator = Comparator::new(deposit, range, prices)?;
    let points = prices
        .iter()
        .map(|&p| comparator.point(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(comparator.finish(points))
}

/// Same as [`performance_series`], evaluating the grid in parallel.
///
/// Output order matches `prices`.
pub fn performance_series_par(
    deposit: &Deposit,
    range: &PriceRange,
    prices: &[f64],
) -> Result<PerformanceSeries> {
    let comparator = Comparator::new(deposit, range, prices)?;
    let points = prices
        .par_iter()
        .map(|&p| comparator.point(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(comparator.finish(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_grid::PriceGrid;
    use clmm_hedge_domain::entities::Position;

    fn setup() -> (Deposit, PriceRange) {
        let range = PriceRange::new(45_000.0, 55_000.0).unwrap();
        let position = Position::new(range, 100_000.0).unwrap();
        (position.deposit_at(50_000.0).unwrap(), range)
    }

    #[test]
    fn test_flat_at_entry() {
        let (deposit, range) = setup();
        let series = performance_series(&deposit, &range, &[50_000.0]).unwrap();
        let point = series.points[0];
        assert!(point.position_pct.abs() < 1e-9);
        assert!(point.hodl_pct.abs() < 1e-9);
        assert!(point.delta_neutral_pct.abs() < 1e-9);
        assert_eq!(point.price_change_pct, 0.0);
    }

    #[test]
    fn test_range_markers() {
        let (deposit, range) = setup();
        let series = performance_series(&deposit, &range, &[50_000.0]).unwrap();
        assert!((series.lower_change_pct + 10.0).abs() < 1e-12);
        assert!((series.upper_change_pct - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_position_underperforms_hodl_away_from_entry() {
        let (deposit, range) = setup();
        let series = performance_series(&deposit, &range, &[40_000.0, 47_000.0, 53_000.0, 60_000.0])
            .unwrap();
        for point in &series.points {
            assert!(point.position_pct < point.hodl_pct, "at {}", point.price);
        }
    }

    #[test]
    fn test_delta_neutral_formula() {
        let (deposit, range) = setup();
        let p = 52_500.0;
        let series = performance_series(&deposit, &range, &[p]).unwrap();
        let position_value = value(p, &range, series.liquidity).unwrap();
        let hedged = position_value + deposit.btc_amount() * (deposit.price() - p);
        let expected = (hedged / deposit.initial_value() - 1.0) * 100.0;
        assert!((series.points[0].delta_neutral_pct - expected).abs() < 1e-12);
    }

    #[test]
    fn test_hedge_removes_first_order_exposure_at_entry() {
        let (deposit, range) = setup();
        let entry = deposit.price();
        let series = performance_series(&deposit, &range, &[entry * 0.999, entry * 1.001])
            .unwrap();
        let down = series.points[0];
        let up = series.points[1];
        // Hedged returns are second order in the move; unhedged are first order.
        assert!(down.delta_neutral_pct.abs() < 0.01 * down.position_pct.abs());
        assert!(up.delta_neutral_pct.abs() < 0.01 * up.position_pct.abs());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (deposit, range) = setup();
        let grid = PriceGrid::around_price(deposit.price(), PriceGrid::PERFORMANCE_POINTS)
            .unwrap();
        let seq = performance_series(&deposit, &range, grid.prices()).unwrap();
        let par = performance_series_par(&deposit, &range, grid.prices()).unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq.position().count(), 500);
        assert_eq!(seq.hodl().next().unwrap().0, grid.prices()[0]);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let (deposit, range) = setup();
        assert_eq!(
            performance_series(&deposit, &range, &[50_000.0, -1.0]),
            Err(DomainError::InvalidPrice(-1.0))
        );

        let empty = Deposit::new(0.0, 0.0, 50_000.0).unwrap();
        assert!(matches!(
            performance_series(&empty, &range, &[50_000.0]),
            Err(DomainError::InvalidAmount { .. })
        ));

        let inconsistent = Deposit::new(1.0, 500.0, 40_000.0).unwrap();
        assert!(matches!(
            performance_series(&inconsistent, &range, &[50_000.0]),
            Err(DomainError::InconsistentDeposit(_))
        ));
    }

    #[test]
    fn test_series_serializes() {
        let (deposit, range) = setup();
        let series = performance_series(&deposit, &range, &[48_000.0]).unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["points"].as_array().unwrap().len(), 1);
        assert!(json["points"][0]["delta_neutral_pct"].is_number());
    }
}
