//! Position Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ExerciseStatus, PositionId, PositionType, Symbol};
use crate::domain::position::PositionError;

/// Shares of underlying per option contract.
pub const CONTRACT_MULTIPLIER: u32 = 100;

/// Margin rates applied to strike × quantity when a naked position has no
/// recorded margin cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginRates {
    /// Rate for naked calls (0.20 = 20%).
    pub naked_call: Decimal,
    /// Rate for naked puts (0.15 = 15%).
    pub naked_put: Decimal,
}

impl Default for MarginRates {
    fn default() -> Self {
        Self {
            naked_call: Decimal::new(20, 2),
            naked_put: Decimal::new(15, 2),
        }
    }
}

/// One option leg as recorded by the caller.
///
/// Immutable for the duration of any calculation. Construction does not
/// validate; call [`Position::validate`] where the record enters the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Identity in the caller's store.
    #[serde(default)]
    id: PositionId,
    /// Underlying symbol.
    symbol: Symbol,
    /// Kind of position.
    position_type: PositionType,
    /// Strike price.
    strike_price: Decimal,
    /// Premium per share (income when sold, cost when bought).
    option_price: Decimal,
    /// Stock cost basis per share (covered calls).
    #[serde(default)]
    cost_basis_per_share: Decimal,
    /// Number of contracts.
    contracts: u32,
    /// Recorded margin requirement (naked positions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    margin_cost: Option<Decimal>,
    /// Underlying price at assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exercise_market_price: Option<Decimal>,
    /// Latest underlying price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_market_price: Option<Decimal>,
    /// Assignment outcome.
    #[serde(default)]
    exercise_status: ExerciseStatus,
    /// Date the position was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open_date: Option<NaiveDate>,
    /// Option expiration date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiration_date: Option<NaiveDate>,
}

impl Position {
    /// Create a new position with a generated ID and no optional fields.
    #[must_use]
    pub fn new(
        symbol: impl Into<Symbol>,
        position_type: PositionType,
        strike_price: Decimal,
        option_price: Decimal,
        contracts: u32,
    ) -> Self {
        Self {
            id: PositionId::generate(),
            symbol: symbol.into(),
            position_type,
            strike_price,
            option_price,
            cost_basis_per_share: Decimal::ZERO,
            contracts,
            margin_cost: None,
            exercise_market_price: None,
            current_market_price: None,
            exercise_status: ExerciseStatus::Unknown,
            open_date: None,
            expiration_date: None,
        }
    }

    /// Create a covered call.
    #[must_use]
    pub fn covered_call(
        symbol: impl Into<Symbol>,
        strike_price: Decimal,
        option_price: Decimal,
        cost_basis_per_share: Decimal,
        contracts: u32,
    ) -> Self {
        Self::new(
            symbol,
            PositionType::CoveredCall,
            strike_price,
            option_price,
            contracts,
        )
        .with_cost_basis(cost_basis_per_share)
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: PositionId) -> Self {
        self.id = id;
        self
    }

    /// Set the stock cost basis per share.
    #[must_use]
    pub const fn with_cost_basis(mut self, cost_basis_per_share: Decimal) -> Self {
        self.cost_basis_per_share = cost_basis_per_share;
        self
    }

    /// Set the recorded margin cost.
    #[must_use]
    pub const fn with_margin_cost(mut self, margin_cost: Decimal) -> Self {
        self.margin_cost = Some(margin_cost);
        self
    }

    /// Set the underlying price at assignment.
    #[must_use]
    pub const fn with_exercise_market_price(mut self, price: Decimal) -> Self {
        self.exercise_market_price = Some(price);
        self
    }

    /// Set the latest underlying price.
    #[must_use]
    pub const fn with_current_market_price(mut self, price: Decimal) -> Self {
        self.current_market_price = Some(price);
        self
    }

    /// Set the assignment outcome.
    #[must_use]
    pub const fn with_exercise_status(mut self, status: ExerciseStatus) -> Self {
        self.exercise_status = status;
        self
    }

    /// Set open and expiration dates.
    #[must_use]
    pub const fn with_dates(mut self, open_date: NaiveDate, expiration_date: NaiveDate) -> Self {
        self.open_date = Some(open_date);
        self.expiration_date = Some(expiration_date);
        self
    }

    /// Get the position ID.
    #[must_use]
    pub const fn id(&self) -> &PositionId {
        &self.id
    }

    /// Get the underlying symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Get the position type.
    #[must_use]
    pub const fn position_type(&self) -> PositionType {
        self.position_type
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike_price(&self) -> Decimal {
        self.strike_price
    }

    /// Get the premium per share.
    #[must_use]
    pub const fn option_price(&self) -> Decimal {
        self.option_price
    }

    /// Get the stock cost basis per share.
    #[must_use]
    pub const fn cost_basis_per_share(&self) -> Decimal {
        self.cost_basis_per_share
    }

    /// Get the number of contracts.
    #[must_use]
    pub const fn contracts(&self) -> u32 {
        self.contracts
    }

    /// Get the recorded margin cost.
    #[must_use]
    pub const fn margin_cost(&self) -> Option<Decimal> {
        self.margin_cost
    }

    /// Get the underlying price at assignment.
    #[must_use]
    pub const fn exercise_market_price(&self) -> Option<Decimal> {
        self.exercise_market_price
    }

    /// Get the latest underlying price.
    #[must_use]
    pub const fn current_market_price(&self) -> Option<Decimal> {
        self.current_market_price
    }

    /// Get the assignment outcome.
    #[must_use]
    pub const fn exercise_status(&self) -> ExerciseStatus {
        self.exercise_status
    }

    /// Get the open date.
    #[must_use]
    pub const fn open_date(&self) -> Option<NaiveDate> {
        self.open_date
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }

    /// Shares controlled: contracts × 100.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        Decimal::from(self.contracts) * Decimal::from(CONTRACT_MULTIPLIER)
    }

    /// Total premium: option price × quantity.
    #[must_use]
    pub fn premium(&self) -> Decimal {
        self.option_price * self.quantity()
    }

    /// Premium cash flow at open (positive = credit, negative = debit).
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        if self.position_type.is_short() {
            self.premium()
        } else {
            -self.premium()
        }
    }

    /// Margin requirement for naked positions.
    ///
    /// Uses the recorded margin cost when present, otherwise the configured
    /// rate × strike × quantity. `None` for non-naked positions.
    #[must_use]
    pub fn margin_requirement(&self, rates: &MarginRates) -> Option<Decimal> {
        let rate = match self.position_type {
            PositionType::NakedCall => rates.naked_call,
            PositionType::NakedPut => rates.naked_put,
            PositionType::CoveredCall
            | PositionType::CashSecuredPut
            | PositionType::BuyCall
            | PositionType::BuyPut => return None,
        };
        Some(
            self.margin_cost
                .unwrap_or_else(|| rate * self.strike_price * self.quantity()),
        )
    }

    /// Capital tied up by the position.
    ///
    /// Stock cost for covered calls, strike collateral for cash-secured puts,
    /// margin for naked positions and premium paid for long options.
    #[must_use]
    pub fn capital_requirement(&self, rates: &MarginRates) -> Decimal {
        match self.position_type {
            PositionType::CoveredCall => self.cost_basis_per_share * self.quantity(),
            PositionType::CashSecuredPut => self.strike_price * self.quantity(),
            PositionType::NakedCall | PositionType::NakedPut => {
                self.margin_requirement(rates).unwrap_or(Decimal::ZERO)
            }
            PositionType::BuyCall | PositionType::BuyPut => self.premium(),
        }
    }

    /// Calendar days between open and expiration, when both are known.
    #[must_use]
    pub fn holding_days(&self) -> Option<i64> {
        match (self.open_date, self.expiration_date) {
            (Some(open), Some(expiration)) => Some((expiration - open).num_days()),
            _ => None,
        }
    }

    /// Validate the record's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), PositionError> {
        self.symbol.validate()?;

        if self.strike_price <= Decimal::ZERO {
            return Err(PositionError::InvalidStrike {
                strike: self.strike_price,
            });
        }

        if self.option_price < Decimal::ZERO {
            return Err(PositionError::InvalidOptionPrice {
                price: self.option_price,
            });
        }

        if self.contracts == 0 {
            return Err(PositionError::InvalidContracts {
                contracts: self.contracts,
            });
        }

        if self.position_type == PositionType::CoveredCall
            && self.cost_basis_per_share <= Decimal::ZERO
        {
            return Err(PositionError::MissingCostBasis {
                cost_basis: self.cost_basis_per_share,
            });
        }

        match self.margin_cost {
            Some(margin) if margin < Decimal::ZERO => {
                Err(PositionError::InvalidMarginCost { margin })
            }
            _ => Ok(()),
        }
    }
}
