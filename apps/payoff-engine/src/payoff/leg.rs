//! Single-leg terminal payoff.

use rust_decimal::Decimal;

use crate::domain::{Position, PositionType};

/// Profit or loss of one position at expiration with the underlying at
/// `underlying_price`.
///
/// Total over every non-negative price; never fails and never mutates.
#[must_use]
pub fn payoff(position: &Position, underlying_price: Decimal) -> Decimal {
    let quantity = position.quantity();
    let premium = position.premium();
    let strike = position.strike_price();

    match position.position_type() {
        PositionType::CoveredCall => {
            let basis = position.cost_basis_per_share();
            // Shares are called away above the strike, capping the stock leg
            let stock_price = underlying_price.min(strike);
            (stock_price - basis) * quantity + premium
        }
        PositionType::NakedCall => {
            premium - (underlying_price - strike).max(Decimal::ZERO) * quantity
        }
        PositionType::CashSecuredPut => {
            if underlying_price >= strike {
                premium
            } else {
                (underlying_price - strike) * quantity + premium
            }
        }
        PositionType::NakedPut => {
            premium - (strike - underlying_price).max(Decimal::ZERO) * quantity
        }
        PositionType::BuyCall => {
            (underlying_price - strike).max(Decimal::ZERO) * quantity - premium
        }
        PositionType::BuyPut => {
            (strike - underlying_price).max(Decimal::ZERO) * quantity - premium
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn position(kind: PositionType) -> Position {
        // strike 100, $3 premium, 1 contract, $95 basis where it matters
        Position::new("XYZ", kind, dec!(100), dec!(3), 1).with_cost_basis(dec!(95))
    }

    #[test_case(PositionType::CoveredCall, dec!(80), dec!(-1200) ; "covered call below basis")]
    #[test_case(PositionType::CoveredCall, dec!(100), dec!(800) ; "covered call at strike")]
    #[test_case(PositionType::CoveredCall, dec!(130), dec!(800) ; "covered call capped above strike")]
    #[test_case(PositionType::NakedCall, dec!(90), dec!(300) ; "naked call expires worthless")]
    #[test_case(PositionType::NakedCall, dec!(110), dec!(-700) ; "naked call in the money")]
    #[test_case(PositionType::CashSecuredPut, dec!(120), dec!(300) ; "csp expires worthless")]
    #[test_case(PositionType::CashSecuredPut, dec!(90), dec!(-700) ; "csp assigned")]
    #[test_case(PositionType::NakedPut, dec!(0), dec!(-9700) ; "naked put at zero")]
    #[test_case(PositionType::NakedPut, dec!(97), dec!(0) ; "naked put break even")]
    #[test_case(PositionType::BuyCall, dec!(90), dec!(-300) ; "long call worthless")]
    #[test_case(PositionType::BuyCall, dec!(150), dec!(4700) ; "long call in the money")]
    #[test_case(PositionType::BuyPut, dec!(100), dec!(-300) ; "long put at strike")]
    #[test_case(PositionType::BuyPut, dec!(50), dec!(4700) ; "long put in the money")]
    fn payoff_at_price(kind: PositionType, price: Decimal, expected: Decimal) {
        assert_eq!(payoff(&position(kind), price), expected);
    }

    #[test]
    fn short_premium_kept_at_strike() {
        for kind in [
            PositionType::NakedCall,
            PositionType::NakedPut,
            PositionType::CashSecuredPut,
        ] {
            assert_eq!(payoff(&position(kind), dec!(100)), dec!(300), "{kind}");
        }
    }

    #[test]
    fn payoff_scales_with_contracts() {
        let one = Position::new("XYZ", PositionType::NakedPut, dec!(50), dec!(1.25), 1);
        let five = Position::new("XYZ", PositionType::NakedPut, dec!(50), dec!(1.25), 5);

        assert_eq!(payoff(&five, dec!(40)), payoff(&one, dec!(40)) * dec!(5));
    }

    #[test]
    fn cash_secured_put_matches_naked_put_payoff() {
        let csp = position(PositionType::CashSecuredPut);
        let naked = position(PositionType::NakedPut);

        for price in [dec!(0), dec!(42.5), dec!(99.99), dec!(100), dec!(250)] {
            assert_eq!(payoff(&csp, price), payoff(&naked, price));
        }
    }
}
