//! Exercise Status Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a position ended in assignment.
///
/// Consumed by portfolio accounting only; the payoff curve ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseStatus {
    /// The option was exercised / assigned.
    Exercised,
    /// The option expired worthless.
    NotExercised,
    /// Outcome not known yet (position still open).
    #[default]
    Unknown,
}

impl fmt::Display for ExerciseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exercised => write!(f, "Exercised"),
            Self::NotExercised => write!(f, "Not Exercised"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
