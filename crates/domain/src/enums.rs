use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assumed density of the future price over `[p_a, p_b]`.
///
/// Only used to pick the closed-form expectation in [`crate::hedge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionAssumption {
    /// Density proportional to `1/p`: every multiplicative move is equally likely.
    #[default]
    LogUniform,
    /// Density uniform in price.
    LinearUniform,
}

impl DistributionAssumption {
    /// Canonical name, as accepted on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogUniform => "log-uniform",
            Self::LinearUniform => "linear-uniform",
        }
    }
}

impl fmt::Display for DistributionAssumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionAssumption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log-uniform" | "log_uniform" | "log" => Ok(Self::LogUniform),
            "linear-uniform" | "linear_uniform" | "linear" => Ok(Self::LinearUniform),
            _ => Err(DomainError::UnknownDistribution(s.to_string())),
        }
    }
}

/// Where a price sits relative to a position's range.
///
/// Bounds are inclusive on the outside: a price equal to `p_a` is `Below`
/// and a price equal to `p_b` is `Above`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeRegime {
    /// `p <= p_a`, position is entirely BTC.
    Below,
    /// `p_a < p < p_b`, position holds both tokens.
    Inside,
    /// `p >= p_b`, position is entirely the quote token.
    Above,
}
