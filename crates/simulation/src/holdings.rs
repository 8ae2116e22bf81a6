use clmm_hedge_domain::entities::Position;
use clmm_hedge_domain::error::Result;
use serde::{Deserialize, Serialize};

/// Holdings of a position at one sampled price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldingsPoint {
    pub price: f64,
    /// BTC held.
    pub btc: f64,
    /// Quote token held.
    pub usd: f64,
    /// USD value of both legs.
    pub value: f64,
}

/// Evaluates `position` at every price, in order.
pub fn holdings_curve(position: &Position, prices: &[f64]) -> Result<Vec<HoldingsPoint>> {
    prices
        .iter()
        .map(|&price| {
            let held = position.amounts(price)?;
            Ok(HoldingsPoint {
                price,
                btc: held.btc,
                usd: held.usd,
                value: held.value_at(price),
            })
        })
        .collect()
}
