//! Exact extremes for a single position.

use rust_decimal::Decimal;

use super::break_even::find_break_evens;
use super::constants::UNBOUNDED_PRICE_MULTIPLE;
use super::types::{PayoffMetrics, ProfitBound};
use crate::domain::{Position, PositionType};
use crate::payoff::{DEFAULT_STEPS, PayoffCurve, payoff, price_bounds, price_range};

/// Metrics for one position from its payoff formula.
///
/// Max profit and max loss are exact except for a naked call, whose loss is
/// reported at ten times its domain's upper price with `is_max_loss_unlimited` set.
/// Break-evens come from the default-step curve.
#[must_use]
pub fn closed_form_metrics(position: &Position) -> PayoffMetrics {
    let quantity = position.quantity();
    let premium = position.premium();
    let strike_notional = position.strike_price() * quantity;

    let (max_profit, max_loss, is_max_loss_unlimited) = match position.position_type() {
        PositionType::CoveredCall => {
            let stock_cost = position.cost_basis_per_share() * quantity;
            (
                ProfitBound::Finite(strike_notional + premium - stock_cost),
                premium - stock_cost,
                false,
            )
        }
        PositionType::CashSecuredPut | PositionType::NakedPut => (
            ProfitBound::Finite(premium),
            premium - strike_notional,
            false,
        ),
        PositionType::NakedCall => (
            ProfitBound::Finite(premium),
            far_upside_payoff(position),
            true,
        ),
        PositionType::BuyCall => (ProfitBound::Unbounded, -premium, false),
        PositionType::BuyPut => (
            ProfitBound::Finite(strike_notional - premium),
            -premium,
            false,
        ),
    };

    let prices = price_range(std::slice::from_ref(position), DEFAULT_STEPS);
    let curve = PayoffCurve::sample(&prices, |price| payoff(position, price));

    tracing::debug!(
        position_id = %position.id(),
        position_type = %position.position_type(),
        "Computed closed-form metrics"
    );

    PayoffMetrics {
        max_profit,
        max_loss,
        is_max_loss_unlimited,
        break_even_prices: find_break_evens(&curve),
    }
}

/// Payoff at ten times the upper bound of the position's own domain.
fn far_upside_payoff(position: &Position) -> Decimal {
    let upper = price_bounds(std::slice::from_ref(position))
        .map_or(position.strike_price(), |(_, upper)| upper);
    payoff(position, upper * UNBOUNDED_PRICE_MULTIPLE)
}
