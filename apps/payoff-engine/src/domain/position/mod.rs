//! Option Position Bounded Context
//!
//! This module describes a single option leg as the caller's position store
//! hands it to the engine:
//! - Position type (covered call, cash-secured put, naked and long legs)
//! - Strike, premium, contract count and cost basis
//! - Optional market prices and exercise status for portfolio accounting

pub mod errors;
pub mod value_objects;

pub use errors::PositionError;
pub use value_objects::{
    CONTRACT_MULTIPLIER, ExerciseStatus, MarginRates, Position, PositionId, PositionType, Symbol,
};
