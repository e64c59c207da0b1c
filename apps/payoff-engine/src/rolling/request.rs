//! Roll request parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::RollError;
use crate::domain::Position;

/// How to close the old position and what to open in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Price per share paid to buy back the old option.
    pub close_price: Decimal,
    /// Number of contracts closed and reopened.
    pub contracts_to_roll: u32,
    /// Strike of the replacement position.
    pub new_strike: Decimal,
    /// Premium per share of the replacement position.
    pub new_premium: Decimal,
}

impl RollRequest {
    /// Create a new roll request.
    #[must_use]
    pub const fn new(
        close_price: Decimal,
        contracts_to_roll: u32,
        new_strike: Decimal,
        new_premium: Decimal,
    ) -> Self {
        Self {
            close_price,
            contracts_to_roll,
            new_strike,
            new_premium,
        }
    }

    /// Check the request against the position being rolled.
    ///
    /// [`compute_roll`](super::compute_roll) does not call this; callers
    /// gating the roll action do.
    pub fn validate(&self, old: &Position) -> Result<(), RollError> {
        if self.contracts_to_roll == 0 {
            return Err(RollError::NoContracts);
        }
        if self.contracts_to_roll > old.contracts() {
            return Err(RollError::ExceedsContracts {
                requested: self.contracts_to_roll,
                available: old.contracts(),
            });
        }
        if self.close_price <= Decimal::ZERO {
            return Err(RollError::InvalidClosePrice {
                price: self.close_price,
            });
        }
        if self.new_strike <= Decimal::ZERO {
            return Err(RollError::InvalidNewStrike {
                strike: self.new_strike,
            });
        }
        if self.new_premium <= Decimal::ZERO {
            return Err(RollError::InvalidNewPremium {
                premium: self.new_premium,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PositionType;
    use rust_decimal_macros::dec;

    fn old() -> Position {
        Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 3)
    }

    #[test]
    fn valid_request_passes() {
        let request = RollRequest::new(dec!(1), 3, dec!(95), dec!(2));
        assert!(request.validate(&old()).is_ok());
    }

    #[test]
    fn rejects_more_contracts_than_held() {
        let request = RollRequest::new(dec!(1), 4, dec!(95), dec!(2));
        assert_eq!(
            request.validate(&old()),
            Err(RollError::ExceedsContracts {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn rejects_zero_contracts() {
        let request = RollRequest::new(dec!(1), 0, dec!(95), dec!(2));
        assert_eq!(request.validate(&old()), Err(RollError::NoContracts));
    }

    #[test]
    fn rejects_non_positive_prices() {
        let zero_close = RollRequest::new(dec!(0), 1, dec!(95), dec!(2));
        assert!(matches!(
            zero_close.validate(&old()),
            Err(RollError::InvalidClosePrice { .. })
        ));

        let zero_strike = RollRequest::new(dec!(1), 1, dec!(0), dec!(2));
        assert!(matches!(
            zero_strike.validate(&old()),
            Err(RollError::InvalidNewStrike { .. })
        ));

        let negative_premium = RollRequest::new(dec!(1), 1, dec!(95), dec!(-2));
        assert!(matches!(
            negative_premium.validate(&old()),
            Err(RollError::InvalidNewPremium { .. })
        ));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "close_price: '1.5'\ncontracts_to_roll: 2\nnew_strike: '95'\nnew_premium: '2.25'\n";
        let request: RollRequest = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(request, RollRequest::new(dec!(1.5), 2, dec!(95), dec!(2.25)));
    }
}
