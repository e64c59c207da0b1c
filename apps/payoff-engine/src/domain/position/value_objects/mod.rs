//! Option Position Value Objects

mod exercise_status;
mod identifiers;
mod position;
mod position_type;
mod symbol;

pub use exercise_status::ExerciseStatus;
pub use identifiers::PositionId;
pub use position::{CONTRACT_MULTIPLIER, MarginRates, Position};
pub use position_type::PositionType;
pub use symbol::Symbol;
