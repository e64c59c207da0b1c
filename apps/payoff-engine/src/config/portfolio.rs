//! Portfolio accounting configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::MarginRates;

/// Portfolio accounting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Estimated margin for naked calls without a recorded margin cost,
    /// as a fraction of strike × quantity.
    #[serde(default = "default_naked_call_margin_rate")]
    pub naked_call_margin_rate: Decimal,
    /// Estimated margin for naked puts without a recorded margin cost.
    #[serde(default = "default_naked_put_margin_rate")]
    pub naked_put_margin_rate: Decimal,
}

impl PortfolioConfig {
    /// Margin rates for capital requirement estimates.
    #[must_use]
    pub const fn margin_rates(&self) -> MarginRates {
        MarginRates {
            naked_call: self.naked_call_margin_rate,
            naked_put: self.naked_put_margin_rate,
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            naked_call_margin_rate: default_naked_call_margin_rate(),
            naked_put_margin_rate: default_naked_put_margin_rate(),
        }
    }
}

fn default_naked_call_margin_rate() -> Decimal {
    MarginRates::default().naked_call
}

fn default_naked_put_margin_rate() -> Decimal {
    MarginRates::default().naked_put
}
