//! Static short sizing.
//!
//! A position's BTC exposure falls from `L·(1/√p_a − 1/√p_b)` to zero as price
//! crosses the range. A single, never-rebalanced short sized at the expected
//! BTC holdings over an assumed price density offsets that exposure on
//! average. Both densities below have closed-form expectations of
//! `amount0(p)/L = 1/√p − 1/√p_b`.

use crate::entities::Position;
use crate::enums::DistributionAssumption;
use crate::math::sqrt_spread;
use crate::value_objects::PriceRange;

/// Expected BTC held per unit of liquidity when price is distributed over the range.
///
/// - `LogUniform`: `(2 / ln(p_b/p_a))·(1/√p_a − 1/√p_b) − 1/√p_b`
/// - `LinearUniform`: `2·(√p_b − √p_a)/(p_b − p_a) − 1/√p_b`
#[must_use]
pub fn expected_btc_holdings(range: &PriceRange, distribution: DistributionAssumption) -> f64 {
    let (lower, upper) = (range.lower(), range.upper());
    let (sqrt_lower, sqrt_upper) = (range.sqrt_lower(), range.sqrt_upper());

    let term1 = match distribution {
        DistributionAssumption::LogUniform => {
            // ln(p_b/p_a) as ln_1p of the relative width, exact for narrow ranges.
            let ln_ratio = ((upper - lower) / lower).ln_1p();
            let inv_sqrt_diff = sqrt_spread(lower, upper) / (sqrt_lower * sqrt_upper);
            2.0 * inv_sqrt_diff / ln_ratio
        }
        // (√p_b − √p_a)/(p_b − p_a) = 1/(√p_b + √p_a)
        DistributionAssumption::LinearUniform => 2.0 / (sqrt_upper + sqrt_lower),
    };
    let term2 = 1.0 / sqrt_upper;

    term1 - term2
}

/// BTC to sell short against `position` so that, on average over
/// `distribution`, the combined exposure is flat.
///
/// A positive result means "open a short of this many BTC".
#[must_use]
pub fn static_short(position: &Position, distribution: DistributionAssumption) -> f64 {
    position.liquidity() * expected_btc_holdings(position.range(), distribution)
}
