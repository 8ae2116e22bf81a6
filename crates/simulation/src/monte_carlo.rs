//! Monte Carlo check of the static hedge integrals.
//!
//! Draws prices from the assumed density on `[p_a, p_b]`, averages the BTC
//! the position holds at each draw, and compares the mean with the
//! closed-form static short.

use clmm_hedge_domain::entities::Position;
use clmm_hedge_domain::enums::DistributionAssumption;
use clmm_hedge_domain::error::{DomainError, Result};
use clmm_hedge_domain::value_objects::PriceRange;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// Configuration for a seeded Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloHedgeCheck {
    pub range: PriceRange,
    pub distribution: DistributionAssumption,
    pub samples: usize,
    pub seed: u64,
}

/// Closed-form vs. sampled static short.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeCheckResult {
    /// Closed-form static short, in BTC.
    pub analytic: f64,
    /// Sample mean of BTC holdings, in BTC.
    pub empirical: f64,
    /// `|empirical − analytic| / analytic`, or the absolute gap when `analytic` is zero.
    pub relative_error: f64,
    pub samples: usize,
}

impl MonteCarloHedgeCheck {
    /// Creates a check with 100 000 samples and a fixed seed.
    #[must_use]
    pub fn new(range: PriceRange, distribution: DistributionAssumption) -> Self {
        Self {
            range,
            distribution,
            samples: 100_000,
            seed: 42,
        }
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Runs the check for a position with `liquidity`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidLiquidity`] for negative liquidity,
    /// [`DomainError::InvalidGrid`] when `samples` is zero, and
    /// [`DomainError::InvalidRange`] when the range is too narrow to sample.
    pub fn run(&self, liquidity: f64) -> Result<HedgeCheckResult> {
        let position = Position::new(self.range, liquidity)?;
        if self.samples == 0 {
            return Err(DomainError::InvalidGrid("sample count must be positive"));
        }

        let (lower, upper) = (self.range.lower(), self.range.upper());
        let invalid_range = |_| DomainError::InvalidRange { lower, upper };
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut total = 0.0;
        match self.distribution {
            DistributionAssumption::LogUniform => {
                let log_price = Uniform::new(lower.ln(), upper.ln()).map_err(invalid_range)?;
                for _ in 0..self.samples {
                    total += position.amount0(log_price.sample(&mut rng).exp())?;
                }
            }
            DistributionAssumption::LinearUniform => {
                let price = Uniform::new(lower, upper).map_err(invalid_range)?;
                for _ in 0..self.samples {
                    total += position.amount0(price.sample(&mut rng))?;
                }
            }
        }

        let empirical = total / self.samples as f64;
        let analytic = position.static_short(self.distribution);
        let gap = (empirical - analytic).abs();
        let relative_error = if analytic == 0.0 { gap } else { gap / analytic };

        Ok(HedgeCheckResult {
            analytic,
            empirical,
            relative_error,
            samples: self.samples,
        })
    }
}
