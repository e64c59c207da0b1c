//! Payoff curve sampling configuration.

use serde::{Deserialize, Serialize};

use crate::payoff::DEFAULT_STEPS;

/// Curve sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Intervals between the lowest and highest sampled price.
    #[serde(default = "default_steps")]
    pub steps: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

const fn default_steps() -> usize {
    DEFAULT_STEPS
}
