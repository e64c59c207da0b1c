//! Domain layer - position records and their invariants.
//!
//! Nothing in here performs I/O. The payoff, metrics and rolling modules
//! consume these types by reference and never mutate them.

pub mod position;

pub use position::{
    CONTRACT_MULTIPLIER, ExerciseStatus, MarginRates, Position, PositionError, PositionId,
    PositionType, Symbol,
};
