//! Core valuation and hedging math for concentrated liquidity positions.
//!
//! This crate provides:
//! - Validated value objects (prices, ranges, deposits)
//! - Token holdings and USD value of a position at any price
//! - Recovery of the liquidity constant from a historical deposit
//! - Static short sizing under an assumed price distribution
//!
//! Every function here is pure. Nothing in this crate performs I/O or logs.

/// Position entities.
pub mod entities;
/// Enumerations shared across the domain.
pub mod enums;
/// Domain error type.
pub mod error;
/// Static hedge sizing.
pub mod hedge;
/// Concentrated liquidity formulas.
pub mod math;
/// Validated value objects.
pub mod value_objects;

pub use error::{DomainError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::entities::Position;
    pub use crate::enums::{DistributionAssumption, RangeRegime};
    pub use crate::error::DomainError;
    pub use crate::hedge::{expected_btc_holdings, static_short};
    pub use crate::math::concentrated_liquidity::{amount0, amount1, amounts, value};
    pub use crate::math::liquidity::{
        LiquidityEstimate, Reconciliation, ReconciliationPolicy, estimate_liquidity,
        liquidity_from_deposit,
    };
    pub use crate::value_objects::{Deposit, Price, PriceRange, TokenAmounts};
}
