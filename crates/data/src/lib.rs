//! Position sources for the hedge calculator.
//!
//! The math core never sees raw on-chain data. This crate reads position
//! records (tick bounds and raw liquidity), converts ticks to prices and
//! scales liquidity to human units, and hands the core a validated
//! [`clmm_hedge_domain::entities::Position`].

/// On-chain position records.
pub mod position;
/// Tick ↔ price conversion.
pub mod price_tick;
/// Position source implementations.
pub mod providers;

pub use position::{OnChainPosition, TokenDecimals};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// A capability that can look up concentrated liquidity positions by id.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Returns every position the source knows about.
    async fn list_positions(&self) -> Result<Vec<OnChainPosition>>;

    /// Returns the position with `token_id`.
    async fn fetch_position(&self, token_id: u64) -> Result<OnChainPosition> {
        self.list_positions()
            .await?
            .into_iter()
            .find(|p| p.token_id == token_id)
            .ok_or_else(|| anyhow!("position {token_id} not found"))
    }
}
