use crate::enums::DistributionAssumption;
use crate::error::{DomainError, Result};
use crate::hedge;
use crate::math::concentrated_liquidity::{self, check_liquidity};
use crate::math::liquidity::liquidity_from_deposit;
use crate::value_objects::{Deposit, PriceRange, TokenAmounts};
use serde::{Deserialize, Serialize};

/// A funded concentrated liquidity position on BTC/USD.
///
/// # Examples
///
/// ```
/// use clmm_hedge_domain::entities::Position;
/// use clmm_hedge_domain::value_objects::PriceRange;
///
/// let range = PriceRange::new(20_000.0, 40_000.0).unwrap();
/// let position = Position::new(range, 100.0).unwrap();
/// assert_eq!(position.amount0(50_000.0).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionParams")]
pub struct Position {
    range: PriceRange,
    liquidity: f64,
}

#[derive(Deserialize)]
struct PositionParams {
    range: PriceRange,
    liquidity: f64,
}

impl TryFrom<PositionParams> for Position {
    type Error = DomainError;

    fn try_from(params: PositionParams) -> Result<Self> {
        Self::new(params.range, params.liquidity)
    }
}

impl Position {
    /// Creates a position. Zero liquidity is allowed and yields an empty position.
    ///
    /// # Errors
    ///
    /// [`crate::DomainError::InvalidLiquidity`] if `liquidity` is negative or not finite.
    pub fn new(range: PriceRange, liquidity: f64) -> Result<Self> {
        check_liquidity(liquidity)?;
        Ok(Self { range, liquidity })
    }

    /// Builds the position implied by a historical deposit.
    pub fn from_deposit(deposit: &Deposit, range: PriceRange) -> Result<Self> {
        Self::new(range, liquidity_from_deposit(deposit, &range)?)
    }

    /// The price range.
    #[must_use]
    pub fn range(&self) -> &PriceRange {
        &self.range
    }

    /// The liquidity constant `L`.
    #[must_use]
    pub fn liquidity(&self) -> f64 {
        self.liquidity
    }

    pub fn amount0(&self, price: f64) -> Result<f64> {
        concentrated_liquidity::amount0(price, &self.range, self.liquidity)
    }

    pub fn amount1(&self, price: f64) -> Result<f64> {
        concentrated_liquidity::amount1(price, &self.range, self.liquidity)
    }

    pub fn amounts(&self, price: f64) -> Result<TokenAmounts> {
        concentrated_liquidity::amounts(price, &self.range, self.liquidity)
    }

    pub fn value(&self, price: f64) -> Result<f64> {
        concentrated_liquidity::value(price, &self.range, self.liquidity)
    }

    /// The deposit a fresh mint of this position at `price` would require.
    pub fn deposit_at(&self, price: f64) -> Result<Deposit> {
        let held = self.amounts(price)?;
        Deposit::new(held.btc, held.usd, price)
    }

    /// Static BTC short for this position; see [`hedge::static_short`].
    #[must_use]
    pub fn static_short(&self, distribution: DistributionAssumption) -> f64 {
        hedge::static_short(self, distribution)
    }
}
