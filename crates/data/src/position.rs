use crate::price_tick::tick_to_price;
use anyhow::{Context, Result, ensure};
use clmm_hedge_domain::entities::Position;
use clmm_hedge_domain::value_objects::PriceRange;
use serde::{Deserialize, Serialize};

/// Decimals of the two pool tokens, used to convert raw on-chain units.
///
/// With both set to zero, prices and liquidity pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenDecimals {
    /// Decimals of token0 (BTC).
    pub token0: u8,
    /// Decimals of token1 (USD stablecoin).
    pub token1: u8,
}

impl TokenDecimals {
    #[must_use]
    pub fn new(token0: u8, token1: u8) -> Self {
        Self { token0, token1 }
    }

    /// Factor from raw price (token1 units per token0 unit) to USD per BTC: `10^(d0 − d1)`.
    #[must_use]
    pub fn price_scale(&self) -> f64 {
        10f64.powi(i32::from(self.token0) - i32::from(self.token1))
    }

    /// Factor from raw liquidity to human units: `10^(−(d0 + d1)/2)`.
    #[must_use]
    pub fn liquidity_scale(&self) -> f64 {
        10f64.powf(-(f64::from(self.token0) + f64::from(self.token1)) / 2.0)
    }
}

/// A position record as read from chain.
///
/// Field aliases accept the camelCase names used by position-manager
/// contract dumps; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainPosition {
    #[serde(alias = "tokenId")]
    pub token_id: u64,
    #[serde(alias = "tickLower")]
    pub tick_lower: i32,
    #[serde(alias = "tickUpper")]
    pub tick_upper: i32,
    pub liquidity: u128,
    #[serde(default)]
    pub token0_symbol: Option<String>,
    #[serde(default)]
    pub token1_symbol: Option<String>,
}

impl OnChainPosition {
    /// Price bounds in USD per BTC.
    pub fn price_range(&self, decimals: TokenDecimals) -> Result<PriceRange> {
        ensure!(
            self.tick_lower < self.tick_upper,
            "position {}: tick_lower {} must be below tick_upper {}",
            self.token_id,
            self.tick_lower,
            self.tick_upper
        );
        let scale = decimals.price_scale();
        let lower = tick_to_price(self.tick_lower)? * scale;
        let upper = tick_to_price(self.tick_upper)? * scale;
        PriceRange::new(lower, upper)
            .with_context(|| format!("position {}: invalid price range", self.token_id))
    }

    /// Liquidity in human units.
    #[must_use]
    pub fn liquidity(&self, decimals: TokenDecimals) -> f64 {
        self.liquidity as f64 * decimals.liquidity_scale()
    }

    /// Converts the record into a core [`Position`].
    pub fn to_position(&self, decimals: TokenDecimals) -> Result<Position> {
        let range = self.price_range(decimals)?;
        Position::new(range, self.liquidity(decimals))
            .with_context(|| format!("position {}: invalid liquidity", self.token_id))
    }

    /// `SYM0/SYM1` when symbols are known.
    #[must_use]
    pub fn pair_label(&self) -> String {
        format!(
            "{}/{}",
            self.token0_symbol.as_deref().unwrap_or("token0"),
            self.token1_symbol.as_deref().unwrap_or("token1")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_tick::price_to_tick;

    fn record(tick_lower: i32, tick_upper: i32, liquidity: u128) -> OnChainPosition {
        OnChainPosition {
            token_id: 7,
            tick_lower,
            tick_upper,
            liquidity,
            token0_symbol: Some("WBTC".to_string()),
            token1_symbol: Some("USDC".to_string()),
        }
    }

    #[test]
    fn test_decimal_scales() {
        let d = TokenDecimals::new(8, 6);
        assert_eq!(d.price_scale(), 100.0);
        assert!((d.liquidity_scale() - 1e-7).abs() < 1e-20);
        assert_eq!(TokenDecimals::default().price_scale(), 1.0);
        assert_eq!(TokenDecimals::default().liquidity_scale(), 1.0);
    }

    #[test]
    fn test_wbtc_usdc_range() {
        // 60 000 USD/BTC is a raw price of 600 for 8/6 decimals.
        let decimals = TokenDecimals::new(8, 6);
        let lower = price_to_tick(50_000.0 / 100.0).unwrap();
        let upper = price_to_tick(70_000.0 / 100.0).unwrap();
        let range = record(lower, upper, 1).price_range(decimals).unwrap();
        assert!((range.lower() / 50_000.0 - 1.0).abs() < 1e-4);
        assert!((range.upper() / 70_000.0 - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_to_position_scales_liquidity() {
        let decimals = TokenDecimals::new(8, 6);
        let position = record(60_000, 70_000, 30_000_000_000)
            .to_position(decimals)
            .unwrap();
        assert!((position.liquidity() - 3_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_ticks_rejected() {
        let err = record(100, 100, 1).price_range(TokenDecimals::default()).unwrap_err();
        assert!(err.to_string().contains("tick_lower"));
    }

    #[test]
    fn test_parses_contract_dump() {
        let json = r#"{
            "token_id": 12345,
            "nonce": 0,
            "token0_symbol": "WBTC",
            "token1_symbol": "USDC",
            "fee": 500,
            "tickLower": 60000,
            "tickUpper": 70000,
            "liquidity": 340282366920938463463374607431768211455
        }"#;
        let parsed: OnChainPosition = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token_id, 12345);
        assert_eq!(parsed.tick_upper, 70_000);
        assert_eq!(parsed.liquidity, u128::MAX);
        assert_eq!(parsed.pair_label(), "WBTC/USDC");
    }
}
