//! Option Position Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a position record violates its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Strike price must be strictly positive.
    #[error("Invalid strike price: {strike} (must be > 0)")]
    InvalidStrike {
        /// Offending strike.
        strike: Decimal,
    },

    /// Option price must be non-negative.
    #[error("Invalid option price: {price} (must be >= 0)")]
    InvalidOptionPrice {
        /// Offending premium per share.
        price: Decimal,
    },

    /// At least one contract is required.
    #[error("Invalid contract count: {contracts} (must be >= 1)")]
    InvalidContracts {
        /// Offending contract count.
        contracts: u32,
    },

    /// Covered calls need the stock cost basis.
    #[error("Covered call requires a cost basis per share > 0, got {cost_basis}")]
    MissingCostBasis {
        /// Offending cost basis.
        cost_basis: Decimal,
    },

    /// Margin cost, when supplied, must be non-negative.
    #[error("Invalid margin cost: {margin} (must be >= 0)")]
    InvalidMarginCost {
        /// Offending margin amount.
        margin: Decimal,
    },

    /// Symbol failed validation.
    #[error("Invalid symbol: {message}")]
    InvalidSymbol {
        /// Error message.
        message: String,
    },

    /// Position type string did not match any known variant.
    #[error("Unknown position type: {value}")]
    UnknownPositionType {
        /// Input that failed to parse.
        value: String,
    },
}
