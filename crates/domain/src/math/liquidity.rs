use crate::enums::RangeRegime;
use crate::error::{DomainError, Result};
use crate::math::sqrt_spread;
use crate::value_objects::{Deposit, PriceRange};
use serde::{Deserialize, Serialize};

/// Amounts at or below this are treated as zero.
pub const AMOUNT_EPSILON: f64 = 1e-12;

/// Relative tolerance for the two mixed-deposit estimates to count as equal.
pub const LIQUIDITY_TOLERANCE: f64 = 1e-6;

/// What to do when the BTC-side and USD-side estimates of a mixed deposit disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReconciliationPolicy {
    /// Return the mean of both estimates.
    #[default]
    Average,
    /// Fail with [`DomainError::InconsistentDeposit`].
    Strict,
}

/// How the returned liquidity was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reconciliation {
    /// Entry price outside the range; only one token was deposited.
    SingleSided,
    /// Both estimates agreed within tolerance.
    Agreed,
    /// Estimates disagreed and were averaged.
    Averaged,
}

/// Liquidity recovered from a deposit, with the estimates it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityEstimate {
    /// The liquidity constant `L`.
    pub liquidity: f64,
    /// Estimate derived from the BTC amount, when that side applies.
    pub from_btc: Option<f64>,
    /// Estimate derived from the USD amount, when that side applies.
    pub from_usd: Option<f64>,
    /// How `liquidity` was chosen.
    pub reconciliation: Reconciliation,
}

/// Recovers the liquidity constant implied by a historical deposit.
///
/// Mixed deposits whose two estimates disagree are averaged; see
/// [`estimate_liquidity`] for a stricter alternative.
///
/// # Errors
///
/// [`DomainError::InconsistentDeposit`] when the entry price is outside the
/// range but the deposit holds the token that side cannot hold.
pub fn liquidity_from_deposit(deposit: &Deposit, range: &PriceRange) -> Result<f64> {
    estimate_liquidity(deposit, range, ReconciliationPolicy::Average).map(|e| e.liquidity)
}

/// Recovers the liquidity constant and reports how it was reconciled.
pub fn estimate_liquidity(
    deposit: &Deposit,
    range: &PriceRange,
    policy: ReconciliationPolicy,
) -> Result<LiquidityEstimate> {
    let entry = deposit.price();
    let btc = deposit.btc_amount();
    let usd = deposit.usd_amount();

    match range.regime(entry) {
        RangeRegime::Below => {
            if usd > AMOUNT_EPSILON {
                return Err(DomainError::InconsistentDeposit(format!(
                    "entry price {entry} is at or below the range lower bound {} but {usd} USD was deposited",
                    range.lower()
                )));
            }
            let liquidity = liquidity_for_amount0(btc, range.lower(), range.upper());
            Ok(single_sided(liquidity, Some(liquidity), None))
        }
        RangeRegime::Above => {
            if btc > AMOUNT_EPSILON {
                return Err(DomainError::InconsistentDeposit(format!(
                    "entry price {entry} is at or above the range upper bound {} but {btc} BTC was deposited",
                    range.upper()
                )));
            }
            let liquidity = liquidity_for_amount1(usd, range.lower(), range.upper());
            Ok(single_sided(liquidity, None, Some(liquidity)))
        }
        RangeRegime::Inside => {
            let from_btc = liquidity_for_amount0(btc, entry, range.upper());
            let spread = sqrt_spread(range.lower(), entry);
            let from_usd = if spread < AMOUNT_EPSILON {
                if usd > AMOUNT_EPSILON { f64::INFINITY } else { 0.0 }
            } else {
                usd / spread
            };

            let scale = 1f64.max(from_btc).max(from_usd);
            let (liquidity, reconciliation) =
                if (from_btc - from_usd).abs() > LIQUIDITY_TOLERANCE * scale {
                    match policy {
                        ReconciliationPolicy::Average => {
                            (0.5 * (from_btc + from_usd), Reconciliation::Averaged)
                        }
                        ReconciliationPolicy::Strict => {
                            return Err(DomainError::InconsistentDeposit(format!(
                                "liquidity from BTC side ({from_btc}) and USD side ({from_usd}) disagree"
                            )));
                        }
                    }
                } else {
                    (from_btc, Reconciliation::Agreed)
                };

            Ok(LiquidityEstimate {
                liquidity,
                from_btc: Some(from_btc),
                from_usd: Some(from_usd),
                reconciliation,
            })
        }
    }
}

/// Liquidity needed for `amount0` BTC to cover `[lower, upper]`.
/// `L = amount0·√p_a·√p_b / (√p_b − √p_a)`
#[must_use]
pub fn liquidity_for_amount0(amount0: f64, lower: f64, upper: f64) -> f64 {
    amount0 * (upper.sqrt() * lower.sqrt()) / sqrt_spread(lower, upper)
}

/// Liquidity needed for `amount1` USD to cover `[lower, upper]`.
/// `L = amount1 / (√p_b − √p_a)`
#[must_use]
pub fn liquidity_for_amount1(amount1: f64, lower: f64, upper: f64) -> f64 {
    amount1 / sqrt_spread(lower, upper)
}

fn single_sided(liquidity: f64, from_btc: Option<f64>, from_usd: Option<f64>) -> LiquidityEstimate {
    LiquidityEstimate {
        liquidity,
        from_btc,
        from_usd,
        reconciliation: Reconciliation::SingleSided,
    }
}
