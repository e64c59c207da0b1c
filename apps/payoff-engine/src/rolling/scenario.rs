//! Combined payoff of a roll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::RollRequest;
use crate::domain::{CONTRACT_MULTIPLIER, Position, PositionType};
use crate::metrics::{PayoffMetrics, scan_with_boundaries};
use crate::payoff::{DEFAULT_STEPS, PayoffCurve, payoff, price_range};

/// Outcome of closing a position and reopening at a new strike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollScenario {
    /// Realized P/L from buying back the rolled contracts.
    pub close_profit_loss: Decimal,
    /// The replacement position.
    pub new_position: Position,
    /// Close P/L plus the new position's payoff, over its own domain at
    /// the step count the roll was computed with.
    pub combined_curve: PayoffCurve,
    /// Metrics over the combined curve.
    pub metrics: PayoffMetrics,
}

/// Realized P/L of buying back `contracts` at `close_price`.
///
/// Positive when the option is closed for less than it was sold for.
#[must_use]
pub fn close_profit_loss(old: &Position, close_price: Decimal, contracts: u32) -> Decimal {
    let quantity = Decimal::from(contracts) * Decimal::from(CONTRACT_MULTIPLIER);
    (old.option_price() - close_price) * quantity
}

/// Replacement position opened by a roll.
///
/// Same symbol and type; a cash-secured put's cost basis moves to the new
/// strike, other types keep the original basis.
#[must_use]
pub fn rolled_position(old: &Position, request: &RollRequest) -> Position {
    let cost_basis = match old.position_type() {
        PositionType::CashSecuredPut => request.new_strike,
        _ => old.cost_basis_per_share(),
    };

    Position::new(
        old.symbol().clone(),
        old.position_type(),
        request.new_strike,
        request.new_premium,
        request.contracts_to_roll,
    )
    .with_cost_basis(cost_basis)
}

/// Close part or all of `old` and reopen per `request`, sampling the
/// combined curve at [`DEFAULT_STEPS`].
///
/// The request is not validated here; see [`RollRequest::validate`].
#[must_use]
pub fn compute_roll(old: &Position, request: &RollRequest) -> RollScenario {
    compute_roll_with_steps(old, request, DEFAULT_STEPS)
}

/// Close part or all of `old` and reopen per `request`.
///
/// The combined curve spans the new position's price domain with `steps`
/// intervals. Loss is open-ended when the old position is a naked call.
#[must_use]
pub fn compute_roll_with_steps(
    old: &Position,
    request: &RollRequest,
    steps: usize,
) -> RollScenario {
    let realized = close_profit_loss(old, request.close_price, request.contracts_to_roll);
    let new_position = rolled_position(old, request);

    let prices = price_range(std::slice::from_ref(&new_position), steps);
    let combined_curve =
        PayoffCurve::sample(&prices, |price| payoff(&new_position, price)).shifted(realized);

    let unlimited_loss = old.position_type().has_unlimited_loss();
    let metrics = scan_with_boundaries(&combined_curve, unlimited_loss, |price| {
        realized + payoff(&new_position, price)
    });

    tracing::debug!(
        position_id = %old.id(),
        contracts = request.contracts_to_roll,
        steps,
        close_profit_loss = %realized,
        new_strike = %request.new_strike,
        "Computed roll scenario"
    );

    RollScenario {
        close_profit_loss: realized,
        new_position,
        combined_curve,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ProfitBound;
    use rust_decimal_macros::dec;

    #[test]
    fn naked_put_roll_down() {
        // Sold 100P @ 3, buy back @ 1, reopen 95P @ 2
        let old = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 2);
        let request = RollRequest::new(dec!(1), 2, dec!(95), dec!(2));
        let roll = compute_roll(&old, &request);

        assert_eq!(roll.close_profit_loss, dec!(400));
        assert_eq!(roll.new_position.strike_price(), dec!(95));
        assert_eq!(roll.new_position.contracts(), 2);
        assert_eq!(roll.new_position.position_type(), PositionType::NakedPut);

        // 400 realized + 400 new premium
        assert_eq!(roll.metrics.max_profit, ProfitBound::Finite(dec!(800)));
        // At zero: 800 − 95 × 200
        assert_eq!(roll.metrics.max_loss, dec!(-18200));
        assert!(!roll.metrics.is_max_loss_unlimited);
        // 95 − 800 / 200
        assert_eq!(roll.metrics.break_even_prices.len(), 1);
        assert!((roll.metrics.break_even_prices[0] - dec!(91)).abs() < dec!(0.0001));
    }

    #[test]
    fn combined_curve_is_shifted_new_payoff() {
        let old = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);
        let request = RollRequest::new(dec!(4), 1, dec!(100), dec!(5));
        let roll = compute_roll(&old, &request);

        assert_eq!(roll.close_profit_loss, dec!(-100));
        assert_eq!(roll.combined_curve.len(), DEFAULT_STEPS + 1);
        for point in roll.combined_curve.points() {
            let expected = payoff(&roll.new_position, point.underlying_price) - dec!(100);
            assert_eq!(point.profit, expected);
        }
    }

    #[test]
    fn roll_curve_follows_requested_steps() {
        let old = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);
        let request = RollRequest::new(dec!(1), 1, dec!(95), dec!(2));

        let fine = compute_roll_with_steps(&old, &request, 400);
        assert_eq!(fine.combined_curve.len(), 401);
        assert_eq!(compute_roll(&old, &request).combined_curve.len(), DEFAULT_STEPS + 1);
        assert_eq!(fine.metrics.max_profit, ProfitBound::Finite(dec!(400)));
    }

    #[test]
    fn partial_roll_uses_requested_contracts() {
        let old = Position::new("XYZ", PositionType::NakedPut, dec!(50), dec!(2), 5);
        let request = RollRequest::new(dec!(0.5), 2, dec!(45), dec!(1));
        let roll = compute_roll(&old, &request);

        assert_eq!(roll.close_profit_loss, dec!(300));
        assert_eq!(roll.new_position.contracts(), 2);
    }

    #[test]
    fn naked_call_roll_is_unlimited() {
        let old = Position::new("XYZ", PositionType::NakedCall, dec!(100), dec!(3), 1);
        let request = RollRequest::new(dec!(2), 1, dec!(105), dec!(2));
        let roll = compute_roll(&old, &request);

        assert!(roll.metrics.is_max_loss_unlimited);
        // At 10 × 126: 100 + 200 − (1260 − 105) × 100
        assert_eq!(roll.metrics.max_loss, dec!(-115_200));
    }

    #[test]
    fn cash_secured_put_basis_moves_to_new_strike() {
        let old = Position::new("XYZ", PositionType::CashSecuredPut, dec!(100), dec!(3), 1)
            .with_cost_basis(dec!(100));
        let request = RollRequest::new(dec!(1), 1, dec!(90), dec!(2));

        assert_eq!(
            rolled_position(&old, &request).cost_basis_per_share(),
            dec!(90)
        );
    }

    #[test]
    fn covered_call_keeps_original_basis() {
        let old = Position::covered_call("XYZ", dec!(100), dec!(3), dec!(92), 1);
        let request = RollRequest::new(dec!(1), 1, dec!(105), dec!(2));
        let new = rolled_position(&old, &request);

        assert_eq!(new.cost_basis_per_share(), dec!(92));
        assert_eq!(new.symbol(), old.symbol());
    }

    #[test]
    fn close_profit_loss_sign_follows_premium_difference() {
        let old = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);

        assert!(close_profit_loss(&old, dec!(1), 1) > Decimal::ZERO);
        assert_eq!(close_profit_loss(&old, dec!(3), 1), Decimal::ZERO);
        assert!(close_profit_loss(&old, dec!(5), 1) < Decimal::ZERO);
    }
}
