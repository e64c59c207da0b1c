//! Sampled extremes for combined positions.

use rust_decimal::Decimal;

use super::break_even::find_break_evens;
use super::constants::UNBOUNDED_PRICE_MULTIPLE;
use super::types::{PayoffMetrics, ProfitBound};
use crate::domain::Position;
use crate::payoff::{PayoffCurve, aggregate_payoff, compute_payoff_curve};

/// Metrics for several positions by scanning their aggregated curve.
///
/// Any naked call makes the loss open-ended; otherwise the zero-price
/// endpoint is folded into both extremes.
#[must_use]
pub fn scan_metrics(positions: &[Position], steps: usize) -> PayoffMetrics {
    let profile = compute_payoff_curve(positions, steps);
    let unlimited_loss = positions
        .iter()
        .any(|p| p.position_type().has_unlimited_loss());

    scan_with_boundaries(&profile.total, unlimited_loss, |price| {
        aggregate_payoff(positions, price)
    })
}

/// Scan `curve` for extremes and break-evens, probing `profit_at` outside
/// the sampled domain.
///
/// With `unlimited_loss` the payoff at ten times the highest sampled price
/// joins the minimum and the flag is set. Without it, the payoff at zero
/// joins both the minimum and the maximum.
pub fn scan_with_boundaries(
    curve: &PayoffCurve,
    unlimited_loss: bool,
    profit_at: impl Fn(Decimal) -> Decimal,
) -> PayoffMetrics {
    let (Some(mut max_profit), Some(mut max_loss)) = (curve.max_profit(), curve.min_profit())
    else {
        return PayoffMetrics::default();
    };

    if unlimited_loss {
        let far_price = curve.max_price().unwrap_or_default() * UNBOUNDED_PRICE_MULTIPLE;
        max_loss = max_loss.min(profit_at(far_price));
    } else {
        let at_zero = profit_at(Decimal::ZERO);
        max_loss = max_loss.min(at_zero);
        max_profit = max_profit.max(at_zero);
    }

    let break_even_prices = find_break_evens(curve);

    tracing::debug!(
        samples = curve.len(),
        unlimited_loss,
        %max_profit,
        %max_loss,
        break_evens = break_even_prices.len(),
        "Scanned payoff metrics"
    );

    PayoffMetrics {
        max_profit: ProfitBound::Finite(max_profit),
        max_loss,
        is_max_loss_unlimited: unlimited_loss,
        break_even_prices,
    }
}
