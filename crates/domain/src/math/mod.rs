/// Token holdings and value of a position at a given price.
pub mod concentrated_liquidity;
/// Liquidity recovery from historical deposits.
pub mod liquidity;

/// `√upper − √lower`, evaluated as `(upper − lower) / (√upper + √lower)`.
///
/// The subtraction of the raw prices is exact for nearby values, so narrow
/// ranges keep full precision instead of cancelling in the square roots.
#[must_use]
pub fn sqrt_spread(lower: f64, upper: f64) -> f64 {
    (upper - lower) / (upper.sqrt() + lower.sqrt())
}
