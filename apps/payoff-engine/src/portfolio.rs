//! Portfolio accounting across positions.
//!
//! Premium, capital, realized and unrealized P/L totals, with a per-symbol
//! breakdown carrying each symbol's payoff metrics. Symbols are analysed in
//! parallel and collected into a `BTreeMap`, so output order is stable.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PortfolioConfig;
use crate::domain::{ExerciseStatus, MarginRates, Position, Symbol};
use crate::metrics::{PayoffMetrics, compute_metrics};
use crate::payoff::payoff;

/// Days per year for annualizing returns.
pub const DAYS_PER_YEAR: i64 = 365;

/// Where a position's P/L currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitLoss {
    /// Closed out at expiration.
    Realized(Decimal),
    /// Still open, marked at the current underlying price.
    Unrealized(Decimal),
    /// No price available for the position's state.
    Unpriced,
}

/// P/L of one position from its exercise status and recorded prices.
///
/// - Exercised: payoff at the exercise price
/// - Not exercised: the premium cash flow (expired worthless)
/// - Unknown: payoff at the current price, treated as still open
#[must_use]
pub fn position_profit_loss(position: &Position) -> ProfitLoss {
    match position.exercise_status() {
        ExerciseStatus::Exercised => position
            .exercise_market_price()
            .map_or(ProfitLoss::Unpriced, |price| {
                ProfitLoss::Realized(payoff(position, price))
            }),
        ExerciseStatus::NotExercised => ProfitLoss::Realized(position.net_premium()),
        ExerciseStatus::Unknown => position
            .current_market_price()
            .map_or(ProfitLoss::Unpriced, |price| {
                ProfitLoss::Unrealized(payoff(position, price))
            }),
    }
}

/// Totals shared by the portfolio and each symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Number of positions.
    pub position_count: usize,
    /// Premium received minus premium paid.
    pub net_premium: Decimal,
    /// Capital tied up across positions.
    pub capital_requirement: Decimal,
    /// P/L of expired or exercised positions.
    pub realized_profit_loss: Decimal,
    /// Mark-to-market P/L of open positions.
    pub unrealized_profit_loss: Decimal,
    /// Positions left out of P/L for lack of a price.
    pub unpriced_positions: usize,
    /// Net premium over capital requirement.
    pub return_on_capital: Option<Decimal>,
    /// Return on capital scaled to a 365-day year.
    pub annualized_return: Option<Decimal>,
}

impl AccountTotals {
    /// Tally a group of positions.
    #[must_use]
    pub fn tally<'a>(
        positions: impl IntoIterator<Item = &'a Position>,
        rates: &MarginRates,
    ) -> Self {
        let mut totals = Self::default();
        let mut weighted_days = Decimal::ZERO;
        let mut dated_capital = Decimal::ZERO;

        for position in positions {
            let capital = position.capital_requirement(rates);

            totals.position_count += 1;
            totals.net_premium += position.net_premium();
            totals.capital_requirement += capital;

            match position_profit_loss(position) {
                ProfitLoss::Realized(value) => totals.realized_profit_loss += value,
                ProfitLoss::Unrealized(value) => totals.unrealized_profit_loss += value,
                ProfitLoss::Unpriced => totals.unpriced_positions += 1,
            }

            if let Some(days) = position.holding_days().filter(|&d| d > 0) {
                weighted_days += Decimal::from(days) * capital;
                dated_capital += capital;
            }
        }

        totals.return_on_capital = ratio(totals.net_premium, totals.capital_requirement);
        totals.annualized_return = totals.return_on_capital.and_then(|roc| {
            let days = ratio(weighted_days, dated_capital)?;
            annualize(roc, days)
        });
        totals
    }
}

/// Scale a holding-period return to a 365-day year.
///
/// `None` for a non-positive holding period.
#[must_use]
pub fn annualize(period_return: Decimal, holding_days: Decimal) -> Option<Decimal> {
    if holding_days <= Decimal::ZERO {
        return None;
    }
    Some(period_return * Decimal::from(DAYS_PER_YEAR) / holding_days)
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Accounting and payoff metrics for one underlying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    /// Underlying symbol.
    pub symbol: Symbol,
    /// Totals for this symbol's positions.
    #[serde(flatten)]
    pub totals: AccountTotals,
    /// Payoff metrics of this symbol's positions combined.
    pub metrics: PayoffMetrics,
}

/// Portfolio-wide totals with a per-symbol breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Totals across every position.
    #[serde(flatten)]
    pub totals: AccountTotals,
    /// Breakdown by symbol, in symbol order.
    pub by_symbol: BTreeMap<Symbol, SymbolSummary>,
}

/// Summarize positions for portfolio display.
#[must_use]
pub fn summarize(positions: &[Position], config: &PortfolioConfig) -> PortfolioSummary {
    let rates = config.margin_rates();

    let mut groups: BTreeMap<Symbol, Vec<Position>> = BTreeMap::new();
    for position in positions {
        groups
            .entry(position.symbol().clone())
            .or_default()
            .push(position.clone());
    }

    let by_symbol: BTreeMap<Symbol, SymbolSummary> = groups
        .into_par_iter()
        .map(|(symbol, legs)| {
            let summary = SymbolSummary {
                symbol: symbol.clone(),
                totals: AccountTotals::tally(&legs, &rates),
                metrics: compute_metrics(&legs),
            };
            (symbol, summary)
        })
        .collect();

    let totals = AccountTotals::tally(positions, &rates);

    tracing::debug!(
        positions = totals.position_count,
        symbols = by_symbol.len(),
        unpriced = totals.unpriced_positions,
        net_premium = %totals.net_premium,
        "Summarized portfolio"
    );

    PortfolioSummary { totals, by_symbol }
}
