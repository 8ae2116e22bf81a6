use anyhow::{Result, ensure};
use clmm_hedge_domain::value_objects::Price;

/// Price ratio between adjacent ticks.
pub const TICK_BASE: f64 = 1.0001;
/// Smallest tick a pool accepts.
pub const MIN_TICK: i32 = -887_272;
/// Largest tick a pool accepts.
pub const MAX_TICK: i32 = 887_272;

/// Returns the price corresponding to a given tick.
/// P = 1.0001 ^ tick
pub fn tick_to_price(tick: i32) -> Result<f64> {
    ensure!(
        (MIN_TICK..=MAX_TICK).contains(&tick),
        "tick {tick} outside [{MIN_TICK}, {MAX_TICK}]"
    );
    Ok(TICK_BASE.powi(tick))
}

/// Returns the tick nearest to a given price.
/// tick = log_1.0001(P)
pub fn price_to_tick(price: f64) -> Result<i32> {
    let price = Price::new(price)?;
    let tick = price.value().log(TICK_BASE).round();
    ensure!(
        tick >= f64::from(MIN_TICK) && tick <= f64::from(MAX_TICK),
        "price {} maps outside the tick range",
        price.value()
    );
    Ok(tick as i32)
}
