use crate::error::{DomainError, Result};
use crate::value_objects::Price;
use crate::value_objects::amount::TokenAmounts;
use serde::{Deserialize, Serialize};

/// Token amounts contributed at mint time and the market price at that moment.
///
/// The price need not lie inside the position's range, but the amounts must
/// agree with it; that check belongs to [`crate::math::liquidity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DepositParams")]
pub struct Deposit {
    btc_amount: f64,
    usd_amount: f64,
    price: Price,
}

#[derive(Deserialize)]
struct DepositParams {
    btc_amount: f64,
    usd_amount: f64,
    price: f64,
}

impl Deposit {
    /// Creates a validated deposit.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidAmount`] for negative or non-finite amounts,
    /// [`DomainError::InvalidPrice`] for a non-positive entry price.
    pub fn new(btc_amount: f64, usd_amount: f64, price: f64) -> Result<Self> {
        check_amount("BTC", btc_amount)?;
        check_amount("USD", usd_amount)?;
        Ok(Self {
            btc_amount,
            usd_amount,
            price: Price::new(price)?,
        })
    }

    /// BTC contributed.
    #[must_use]
    pub fn btc_amount(&self) -> f64 {
        self.btc_amount
    }

    /// Quote token contributed.
    #[must_use]
    pub fn usd_amount(&self) -> f64 {
        self.usd_amount
    }

    /// Entry price `p_0`.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price.value()
    }

    /// Both amounts as a [`TokenAmounts`] pair.
    #[must_use]
    pub fn amounts(&self) -> TokenAmounts {
        TokenAmounts::new(self.btc_amount, self.usd_amount)
    }

    /// USD value of the deposit at its entry price.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.amounts().value_at(self.price())
    }
}

impl TryFrom<DepositParams> for Deposit {
    type Error = DomainError;

    fn try_from(params: DepositParams) -> Result<Self> {
        Self::new(params.btc_amount, params.usd_amount, params.price)
    }
}

fn check_amount(token: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidAmount { token, value })
    }
}
