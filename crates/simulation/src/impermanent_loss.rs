use clmm_hedge_domain::entities::Position;
use clmm_hedge_domain::error::Result;
use clmm_hedge_domain::math::concentrated_liquidity::value;
use clmm_hedge_domain::math::liquidity::liquidity_from_deposit;
use clmm_hedge_domain::value_objects::{Deposit, PriceRange};

/// Impermanent loss of the position funded by `deposit`, at `price`.
///
/// Compares the position's value with the value of simply holding the
/// deposited tokens, both at `price`:
///
/// `value_lp / value_held − 1`
///
/// # Returns
///
/// A fraction; negative values are losses (e.g. `-0.05` for 5%).
/// Zero when the held bundle is worth nothing.
pub fn impermanent_loss(deposit: &Deposit, range: &PriceRange, price: f64) -> Result<f64> {
    let liquidity = liquidity_from_deposit(deposit, range)?;
    let value_lp = value(price, range, liquidity)?;
    let value_held = deposit.amounts().value_at(price);

    if value_held == 0.0 {
        return Ok(0.0);
    }
    Ok(value_lp / value_held - 1.0)
}

/// Impermanent loss of any position on `range` opened at `entry_price`.
///
/// Liquidity cancels out of the ratio, so a unit position is used.
pub fn impermanent_loss_between(range: &PriceRange, entry_price: f64, price: f64) -> Result<f64> {
    let deposit = Position::new(*range, 1.0)?.deposit_at(entry_price)?;
    impermanent_loss(&deposit, range, price)
}
