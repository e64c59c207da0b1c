//! Core types for payoff metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum profit, which long calls leave open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitBound {
    /// Profit is capped at this amount.
    Finite(Decimal),
    /// Profit grows without bound as the underlying rises.
    Unbounded,
}

impl ProfitBound {
    /// The capped amount, if any.
    #[must_use]
    pub const fn finite(self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unbounded => None,
        }
    }
}

impl Default for ProfitBound {
    fn default() -> Self {
        Self::Finite(Decimal::ZERO)
    }
}

impl fmt::Display for ProfitBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "${:.2}", value),
            Self::Unbounded => write!(f, "Unlimited"),
        }
    }
}

/// Summary statistics of a payoff at expiration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffMetrics {
    /// Best outcome.
    pub max_profit: ProfitBound,
    /// Worst outcome (negative = loss).
    ///
    /// When `is_max_loss_unlimited` is set this is the value at the
    /// extrapolated point, not a true bound.
    pub max_loss: Decimal,
    /// Loss grows without bound as the underlying rises.
    pub is_max_loss_unlimited: bool,
    /// Underlying prices where the payoff crosses zero, ascending.
    pub break_even_prices: Vec<Decimal>,
}

impl PayoffMetrics {
    /// Max profit over the magnitude of max loss.
    ///
    /// `None` when either side is open-ended or there is no loss.
    #[must_use]
    pub fn reward_to_risk(&self) -> Option<Decimal> {
        if self.is_max_loss_unlimited || self.max_loss >= Decimal::ZERO {
            return None;
        }
        let profit = self.max_profit.finite()?;
        Some(profit / self.max_loss.abs())
    }
}
