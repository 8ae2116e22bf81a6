use crate::enums::RangeRegime;
use crate::error::{DomainError, Result};
use crate::math::sqrt_spread;
use crate::value_objects::{Price, PriceRange, TokenAmounts};

/// BTC (token0) held by a position with liquidity `L` at `price`.
///
/// - `p <= p_a`: `L·(√p_b − √p_a)/(√p_b·√p_a)`
/// - `p_a < p < p_b`: `L·(√p_b − √p)/(√p_b·√p)`
/// - `p >= p_b`: `0`
///
/// # Errors
///
/// [`DomainError::InvalidPrice`] if `price <= 0`, [`DomainError::InvalidLiquidity`]
/// if `liquidity < 0`.
pub fn amount0(price: f64, range: &PriceRange, liquidity: f64) -> Result<f64> {
    let price = Price::new(price)?;
    check_liquidity(liquidity)?;
    Ok(match range.regime(price.value()) {
        RangeRegime::Below => token0_between(liquidity, range.lower(), range.upper()),
        RangeRegime::Inside => token0_between(liquidity, price.value(), range.upper()),
        RangeRegime::Above => 0.0,
    })
}

/// Quote token (token1, USD) held by a position with liquidity `L` at `price`.
///
/// - `p <= p_a`: `0`
/// - `p_a < p < p_b`: `L·(√p − √p_a)`
/// - `p >= p_b`: `L·(√p_b − √p_a)`
///
/// # Errors
///
/// Same as [`amount0`].
pub fn amount1(price: f64, range: &PriceRange, liquidity: f64) -> Result<f64> {
    let price = Price::new(price)?;
    check_liquidity(liquidity)?;
    Ok(match range.regime(price.value()) {
        RangeRegime::Below => 0.0,
        RangeRegime::Inside => token1_between(liquidity, range.lower(), price.value()),
        RangeRegime::Above => token1_between(liquidity, range.lower(), range.upper()),
    })
}

/// Both token holdings at `price`.
pub fn amounts(price: f64, range: &PriceRange, liquidity: f64) -> Result<TokenAmounts> {
    Ok(TokenAmounts::new(
        amount0(price, range, liquidity)?,
        amount1(price, range, liquidity)?,
    ))
}

/// USD value of the position at `price`: `amount0·p + amount1`.
pub fn value(price: f64, range: &PriceRange, liquidity: f64) -> Result<f64> {
    Ok(amounts(price, range, liquidity)?.value_at(price))
}

/// Token0 needed to cover `[price, upper]`.
///
/// The boundary branches call this with `price = p_a`, which is what makes
/// them agree exactly with the interior limit.
fn token0_between(liquidity: f64, price: f64, upper: f64) -> f64 {
    liquidity * (sqrt_spread(price, upper) / (upper.sqrt() * price.sqrt()))
}

/// Token1 needed to cover `[lower, price]`.
fn token1_between(liquidity: f64, lower: f64, price: f64) -> f64 {
    liquidity * sqrt_spread(lower, price)
}

pub(crate) fn check_liquidity(liquidity: f64) -> Result<()> {
    if liquidity.is_finite() && liquidity >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidLiquidity(liquidity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> PriceRange {
        PriceRange::new(20_000.0, 40_000.0).unwrap()
    }

    #[test]
    fn test_amount0_below_range() {
        // L·(√40000 − √20000)/(√40000·√20000) ≈ 0.2071
        let expected = 100.0 * (200.0 - 20_000f64.sqrt()) / (200.0 * 20_000f64.sqrt());
        let got = amount0(10_000.0, &range(), 100.0).unwrap();
        assert!((got - expected).abs() < 1e-12);
        assert!((got - 0.207_107).abs() < 1e-6);
        assert_eq!(amount1(10_000.0, &range(), 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_above_range_is_all_quote() {
        assert_eq!(amount0(50_000.0, &range(), 100.0).unwrap(), 0.0);
        let expected = 100.0 * (200.0 - 20_000f64.sqrt());
        let got = amount1(50_000.0, &range(), 100.0).unwrap();
        assert!((got - expected).abs() < 1e-9);
    }

    #[test]
    fn test_continuity_at_bounds_is_exact() {
        let r = range();
        let l = 1234.5678;

        // At p_a: boundary branch equals the interior formula evaluated at p_a.
        assert_eq!(
            amount0(r.lower(), &r, l).unwrap(),
            token0_between(l, r.lower(), r.upper())
        );
        assert_eq!(
            amount1(r.lower(), &r, l).unwrap(),
            token1_between(l, r.lower(), r.lower())
        );

        // At p_b: interior limit of amount0 is exactly zero.
        assert_eq!(
            amount0(r.upper(), &r, l).unwrap(),
            token0_between(l, r.upper(), r.upper())
        );
        assert_eq!(
            amount1(r.upper(), &r, l).unwrap(),
            token1_between(l, r.lower(), r.upper())
        );
    }

    #[test]
    fn test_continuity_approaching_bounds() {
        let r = range();
        let l = 500.0;
        let eps = 1e-6;
        let inside_low = amount0(r.lower() + eps, &r, l).unwrap();
        let at_low = amount0(r.lower(), &r, l).unwrap();
        assert!((inside_low - at_low).abs() < 1e-9);

        let inside_high = amount1(r.upper() - eps, &r, l).unwrap();
        let at_high = amount1(r.upper(), &r, l).unwrap();
        assert!((inside_high - at_high).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic_across_range() {
        let r = range();
        let l = 100.0;
        let mut prev = amounts(15_000.0, &r, l).unwrap();
        let mut p = 15_000.0;
        while p < 45_000.0 {
            p += 250.0;
            let next = amounts(p, &r, l).unwrap();
            assert!(next.btc <= prev.btc, "amount0 increased at {p}");
            assert!(next.usd >= prev.usd, "amount1 decreased at {p}");
            prev = next;
        }
    }

    #[test]
    fn test_value_is_exact_sum() {
        let r = range();
        for p in [1_000.0, 20_000.0, 27_345.6, 40_000.0, 90_000.0] {
            let a0 = amount0(p, &r, 42.0).unwrap();
            let a1 = amount1(p, &r, 42.0).unwrap();
            assert_eq!(value(p, &r, 42.0).unwrap(), a0 * p + a1);
        }
    }

    #[test]
    fn test_zero_liquidity_is_empty_position() {
        let held = amounts(30_000.0, &range(), 0.0).unwrap();
        assert_eq!(held, TokenAmounts::default());
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            amount0(0.0, &range(), 1.0),
            Err(DomainError::InvalidPrice(0.0))
        );
        assert_eq!(
            amount1(-5.0, &range(), 1.0),
            Err(DomainError::InvalidPrice(-5.0))
        );
        assert_eq!(
            value(30_000.0, &range(), -1.0),
            Err(DomainError::InvalidLiquidity(-1.0))
        );
    }

    #[test]
    fn test_narrow_range_does_not_cancel() {
        let lower: f64 = 30_000.0;
        let upper = lower * (1.0 + 1e-10);
        let r = PriceRange::new(lower, upper).unwrap();
        let l = 1e9;
        let usd = amount1(upper, &r, l).unwrap();
        let expected = l * (upper - lower) / (2.0 * lower.sqrt());
        assert!(usd > 0.0);
        assert!(((usd - expected) / expected).abs() < 1e-6);
    }
}
