//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use clmm_hedge_simulation::prelude::*;
//! ```

// Holdings
pub use crate::holdings::{HoldingsPoint, holdings_curve};

// Impermanent loss
pub use crate::impermanent_loss::{impermanent_loss, impermanent_loss_between};

// Monte Carlo
pub use crate::monte_carlo::{HedgeCheckResult, MonteCarloHedgeCheck};

// Performance
pub use crate::performance::{
    PerformancePoint, PerformanceSeries, performance_series, performance_series_par,
};

// Price grids
pub use crate::price_grid::PriceGrid;
