use serde::{Deserialize, Serialize};

/// Token holdings of a position: BTC (token0) and USD (token1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenAmounts {
    /// BTC held.
    pub btc: f64,
    /// Quote token held, in USD.
    pub usd: f64,
}

impl TokenAmounts {
    /// Creates a new pair of holdings.
    #[must_use]
    pub fn new(btc: f64, usd: f64) -> Self {
        Self { btc, usd }
    }

    /// USD value of the holdings at `price`.
    #[must_use]
    pub fn value_at(&self, price: f64) -> f64 {
        self.btc * price + self.usd
    }
}
