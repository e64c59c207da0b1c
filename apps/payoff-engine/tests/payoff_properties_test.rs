//! Property tests for the payoff, metrics and roll calculations.

use payoff_engine::metrics::{closed_form_metrics, scan_metrics};
use payoff_engine::{
    DEFAULT_STEPS, Position, PositionType, ProfitBound, RollRequest, compute_metrics,
    compute_payoff_curve, compute_roll, payoff,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const FINE_STEPS: usize = 10_000;

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|c| Decimal::new(c, 2))
}

fn position_type() -> impl Strategy<Value = PositionType> {
    prop::sample::select(PositionType::ALL.to_vec())
}

prop_compose! {
    fn position_of(kind: PositionType)(
        strike in cents(500..50_000),
        premium in cents(0..2_000),
        basis_ratio in 50i64..150,
        contracts in 1u32..10,
    ) -> Position {
        let basis = (strike * Decimal::new(basis_ratio, 2)).round_dp(2);
        let position = Position::new("XYZ", kind, strike, premium, contracts);
        match kind {
            PositionType::CoveredCall | PositionType::CashSecuredPut => {
                position.with_cost_basis(basis)
            }
            _ => position,
        }
    }
}

fn any_position() -> impl Strategy<Value = Position> {
    position_type().prop_flat_map(position_of)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_closed_form_agrees_with_fine_scan(position in any_position()) {
        let closed = closed_form_metrics(&position);
        let scanned = scan_metrics(std::slice::from_ref(&position), FINE_STEPS);

        if !closed.is_max_loss_unlimited {
            prop_assert_eq!(closed.max_loss, scanned.max_loss);
        }
        if let ProfitBound::Finite(max_profit) = closed.max_profit {
            prop_assert_eq!(ProfitBound::Finite(max_profit), scanned.max_profit);
        }
    }
}

proptest! {
    #[test]
    fn prop_short_premium_kept_at_strike(
        kind in prop::sample::select(vec![
            PositionType::NakedCall,
            PositionType::NakedPut,
            PositionType::CashSecuredPut,
        ]),
        strike in cents(100..100_000),
        premium in cents(0..5_000),
        contracts in 1u32..20,
    ) {
        let position = Position::new("XYZ", kind, strike, premium, contracts);
        prop_assert_eq!(payoff(&position, strike), position.premium());
    }

    #[test]
    fn prop_only_naked_calls_are_unlimited(
        calls in prop::collection::vec(position_of(PositionType::NakedCall), 1..5),
    ) {
        prop_assert!(compute_metrics(&calls).is_max_loss_unlimited);
    }

    #[test]
    fn prop_no_naked_call_is_bounded(
        positions in prop::collection::vec(
            prop::sample::select(vec![
                PositionType::CoveredCall,
                PositionType::CashSecuredPut,
                PositionType::NakedPut,
                PositionType::BuyCall,
                PositionType::BuyPut,
            ])
            .prop_flat_map(position_of),
            1..5,
        ),
    ) {
        prop_assert!(!compute_metrics(&positions).is_max_loss_unlimited);
    }

    #[test]
    fn prop_any_naked_call_makes_set_unlimited(
        mut positions in prop::collection::vec(any_position(), 1..4),
        call in position_of(PositionType::NakedCall),
    ) {
        positions.push(call);
        prop_assert!(compute_metrics(&positions).is_max_loss_unlimited);
    }

    #[test]
    fn prop_curve_covers_every_strike(
        positions in prop::collection::vec(any_position(), 1..6),
        steps in 1usize..300,
    ) {
        let profile = compute_payoff_curve(&positions, steps);
        let min_strike = positions.iter().map(Position::strike_price).min().unwrap();
        let max_strike = positions.iter().map(Position::strike_price).max().unwrap();
        let points = profile.total.points();

        prop_assert_eq!(points.len(), steps + 1);
        prop_assert!(points[0].underlying_price <= min_strike);
        prop_assert!(points[points.len() - 1].underlying_price >= max_strike);
        prop_assert!(points[0].underlying_price >= Decimal::ZERO);
        prop_assert!(points.windows(2).all(|w| w[0].underlying_price < w[1].underlying_price));
    }

    #[test]
    fn prop_break_evens_sorted_and_spread(
        positions in prop::collection::vec(any_position(), 1..5),
    ) {
        let break_evens = compute_metrics(&positions).break_even_prices;
        prop_assert!(break_evens.windows(2).all(|w| w[1] - w[0] > dec!(0.50)));
    }

    #[test]
    fn prop_roll_close_sign_follows_premium_difference(
        old in any_position(),
        close_price in cents(1..3_000),
        new_strike in cents(500..50_000),
        new_premium in cents(1..2_000),
    ) {
        let request = RollRequest::new(close_price, old.contracts(), new_strike, new_premium);
        let roll = compute_roll(&old, &request);

        let difference = old.option_price() - close_price;
        prop_assert_eq!(roll.close_profit_loss > Decimal::ZERO, difference > Decimal::ZERO);
        prop_assert_eq!(roll.close_profit_loss < Decimal::ZERO, difference < Decimal::ZERO);
        prop_assert_eq!(roll.combined_curve.len(), DEFAULT_STEPS + 1);
    }
}

#[test]
fn covered_call_single_break_even_at_ninety() {
    let position = Position::covered_call("XYZ", dec!(100), dec!(5), dec!(95), 1);
    let metrics = compute_metrics(&[position]);

    assert_eq!(metrics.break_even_prices, vec![dec!(90)]);
}

#[test]
fn naked_put_reference_metrics() {
    let position = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);
    let metrics = compute_metrics(&[position]);

    assert_eq!(metrics.max_profit, ProfitBound::Finite(dec!(300)));
    assert_eq!(metrics.max_loss, dec!(-9700));
    assert!(!metrics.is_max_loss_unlimited);
    assert_eq!(metrics.break_even_prices, vec![dec!(97)]);
}
