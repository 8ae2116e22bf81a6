use thiserror::Error;

/// Errors raised while validating inputs to the position math.
///
/// All variants are produced before any numeric work starts, so a failed
/// call never leaves a partially computed result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Range bounds are non-positive, non-finite, or not strictly increasing.
    #[error("invalid price range [{lower}, {upper}]: bounds must be positive and lower < upper")]
    InvalidRange {
        /// Lower bound as supplied.
        lower: f64,
        /// Upper bound as supplied.
        upper: f64,
    },

    /// A price was zero, negative, or not finite.
    #[error("price must be positive and finite, got {0}")]
    InvalidPrice(f64),

    /// Liquidity was negative or not finite.
    #[error("liquidity must be non-negative and finite, got {0}")]
    InvalidLiquidity(f64),

    /// A token amount was negative or not finite.
    #[error("{token} amount must be non-negative and finite, got {value}")]
    InvalidAmount {
        /// Which side of the pair the amount belongs to.
        token: &'static str,
        /// Amount as supplied.
        value: f64,
    },

    /// The deposit holds a token that its entry price says it cannot hold.
    #[error("inconsistent deposit: {0}")]
    InconsistentDeposit(String),

    /// Distribution name could not be parsed.
    #[error("unknown distribution `{0}`, expected `log-uniform` or `linear-uniform`")]
    UnknownDistribution(String),

    /// A price grid could not be built from the given bounds.
    #[error("invalid price grid: {0}")]
    InvalidGrid(&'static str),
}

/// Result alias used throughout the domain crate.
pub type Result<T> = std::result::Result<T, DomainError>;
