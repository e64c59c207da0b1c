//! Payoff metrics: max profit, max loss and break-even prices.
//!
//! Two paths produce the same [`PayoffMetrics`] shape:
//! - One position: exact closed-form extremes per position type
//! - Several positions: a scan of the aggregated curve plus boundary checks
//!
//! Break-evens always come from the sampled curve (linear interpolation
//! between samples, then de-duplicated).

mod break_even;
mod closed_form;
mod constants;
mod scan;
mod types;

pub use break_even::{dedup_break_evens, find_break_evens};
pub use closed_form::closed_form_metrics;
pub use constants::{
    BREAK_EVEN_MERGE_DISTANCE, BREAK_EVEN_TOLERANCE, MIN_INTERPOLATION_DELTA,
    UNBOUNDED_PRICE_MULTIPLE,
};
pub use scan::{scan_metrics, scan_with_boundaries};
pub use types::{PayoffMetrics, ProfitBound};

use crate::domain::Position;
use crate::payoff::DEFAULT_STEPS;

/// Key metrics for a set of positions.
///
/// A single position uses closed forms; combinations scan the default-step
/// curve. Empty input yields zeroed metrics.
#[must_use]
pub fn compute_metrics(positions: &[Position]) -> PayoffMetrics {
    match positions {
        [] => PayoffMetrics::default(),
        [position] => closed_form_metrics(position),
        _ => scan_metrics(positions, DEFAULT_STEPS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PositionType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_positions_give_default_metrics() {
        let metrics = compute_metrics(&[]);
        assert_eq!(metrics, PayoffMetrics::default());
        assert!(metrics.break_even_prices.is_empty());
    }

    #[test]
    fn single_naked_put_scenario() {
        let position = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);
        let metrics = compute_metrics(&[position]);

        assert_eq!(metrics.max_profit, ProfitBound::Finite(dec!(300)));
        assert_eq!(metrics.max_loss, dec!(-9700));
        assert!(!metrics.is_max_loss_unlimited);
        assert_eq!(metrics.break_even_prices, vec![dec!(97)]);
    }

    #[test]
    fn bull_put_spread_uses_scan() {
        let positions = [
            Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1),
            Position::new("XYZ", PositionType::BuyPut, dec!(90), dec!(1), 1),
        ];
        let metrics = compute_metrics(&positions);

        assert_eq!(metrics.max_profit, ProfitBound::Finite(dec!(200)));
        assert_eq!(metrics.max_loss, dec!(-800));
        assert!(!metrics.is_max_loss_unlimited);
        assert_eq!(metrics.break_even_prices.len(), 1);
        assert!((metrics.break_even_prices[0] - dec!(98)).abs() < dec!(0.001));
    }

    #[test]
    fn naked_strangle_is_unlimited_with_two_break_evens() {
        let positions = [
            Position::new("XYZ", PositionType::NakedPut, dec!(90), dec!(2), 1),
            Position::new("XYZ", PositionType::NakedCall, dec!(110), dec!(2), 1),
        ];
        let metrics = compute_metrics(&positions);

        assert!(metrics.is_max_loss_unlimited);
        assert_eq!(metrics.max_profit, ProfitBound::Finite(dec!(400)));
        assert_eq!(metrics.break_even_prices.len(), 2);
        assert!((metrics.break_even_prices[0] - dec!(86)).abs() < dec!(0.01));
        assert!((metrics.break_even_prices[1] - dec!(114)).abs() < dec!(0.01));
        // 10× price dominates the sampled minimum
        let sampled_min = crate::payoff::compute_payoff_curve(&positions, DEFAULT_STEPS)
            .total
            .min_profit()
            .unwrap();
        assert!(metrics.max_loss < sampled_min);
    }

    #[test]
    fn two_covered_calls_check_zero_price() {
        let positions = [
            Position::covered_call("XYZ", dec!(100), dec!(2), dec!(90), 1),
            Position::covered_call("XYZ", dec!(105), dec!(1), dec!(95), 1),
        ];
        let metrics = compute_metrics(&positions);

        // At zero both stock legs are lost: 300 − 9000 − 9500
        assert_eq!(metrics.max_loss, dec!(-18200));
        assert!(!metrics.is_max_loss_unlimited);
        // Both capped: (100 − 90 + 2) + (105 − 95 + 1) per share
        assert_eq!(metrics.max_profit, ProfitBound::Finite(dec!(2300)));
        assert!(metrics.max_loss < Decimal::ZERO);
    }
}
