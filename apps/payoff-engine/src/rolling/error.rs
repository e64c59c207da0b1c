//! Roll request errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a roll request cannot be applied to a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollError {
    /// More contracts requested than the position holds.
    #[error("Cannot roll {requested} contracts, position holds {available}")]
    ExceedsContracts {
        /// Contracts requested.
        requested: u32,
        /// Contracts held.
        available: u32,
    },

    /// At least one contract must be rolled.
    #[error("Contracts to roll must be >= 1")]
    NoContracts,

    /// Buy-back price must be strictly positive.
    #[error("Invalid close price: {price} (must be > 0)")]
    InvalidClosePrice {
        /// Offending price.
        price: Decimal,
    },

    /// Replacement strike must be strictly positive.
    #[error("Invalid new strike: {strike} (must be > 0)")]
    InvalidNewStrike {
        /// Offending strike.
        strike: Decimal,
    },

    /// Replacement premium must be strictly positive.
    #[error("Invalid new premium: {premium} (must be > 0)")]
    InvalidNewPremium {
        /// Offending premium.
        premium: Decimal,
    },
}
