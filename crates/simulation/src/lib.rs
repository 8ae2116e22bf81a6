//! Scans of position math over price grids.
//!
//! This crate turns the point-in-time formulas of `clmm-hedge-domain` into
//! curves a charting layer can draw:
//! - Price grids for scanning
//! - BTC holdings curves
//! - Position vs. hold vs. delta-neutral performance series
//! - Impermanent loss against holding the deposit
//! - Monte Carlo verification of the static hedge integrals

/// Prelude module for convenient imports.
pub mod prelude;

/// BTC holdings scans.
pub mod holdings;
/// Impermanent loss metric.
pub mod impermanent_loss;
/// Monte Carlo check of static hedge sizing.
pub mod monte_carlo;
/// Performance comparison against hold and delta-neutral baselines.
pub mod performance;
/// Price grids.
pub mod price_grid;
