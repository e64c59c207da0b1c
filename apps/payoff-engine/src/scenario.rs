//! Scenario files: positions plus an optional roll, evaluated into a report.
//!
//! ```yaml
//! positions:
//!   - id: short-put
//!     symbol: XYZ
//!     position_type: naked_put
//!     strike_price: "100"
//!     option_price: "3"
//!     contracts: 1
//! roll:
//!   position: short-put
//!   close_price: "1"
//!   contracts_to_roll: 1
//!   new_strike: "95"
//!   new_premium: "2"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::{PayoffAnalysis, PayoffCache};
use crate::config::{ConfigError, EngineConfig};
use crate::domain::{Position, PositionError};
use crate::portfolio::{PortfolioSummary, summarize};
use crate::rolling::{RollError, RollRequest, RollScenario, compute_roll_with_steps};

/// Scenario loading and evaluation errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read the scenario file.
    #[error("Failed to read scenario file '{path}': {source}")]
    ReadError {
        /// Path to the scenario file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse scenario YAML.
    #[error("Failed to parse scenario YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Engine configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A position record violated its invariants.
    #[error("Position {index}: {source}")]
    InvalidPosition {
        /// Index in the scenario's position list.
        index: usize,
        /// The violated invariant.
        source: PositionError,
    },

    /// The roll names a position the scenario does not contain.
    #[error("Roll references unknown position: {0}")]
    UnknownPosition(String),

    /// The roll request does not fit its position.
    #[error("Invalid roll: {0}")]
    Roll(#[from] RollError),
}

/// How a roll names the position it closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionRef {
    /// Index into the scenario's position list.
    Index(usize),
    /// Position ID.
    Id(String),
}

/// Roll step of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRoll {
    /// Position to close.
    pub position: PositionRef,
    /// Close and reopen terms.
    #[serde(flatten)]
    pub request: RollRequest,
}

/// Positions to analyse, optionally with a roll of one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Positions, in display order.
    pub positions: Vec<Position>,
    /// Optional roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<ScenarioRoll>,
}

impl Scenario {
    /// Parse a scenario from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml_bw::from_str(yaml)?)
    }

    /// Read and parse a scenario file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ScenarioError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&contents)
    }

    /// Validate every position record.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (index, position) in self.positions.iter().enumerate() {
            position
                .validate()
                .map_err(|source| ScenarioError::InvalidPosition { index, source })?;
        }
        Ok(())
    }

    fn roll_target(&self, reference: &PositionRef) -> Result<&Position, ScenarioError> {
        let found = match reference {
            PositionRef::Index(index) => self.positions.get(*index),
            PositionRef::Id(id) => self.positions.iter().find(|p| p.id().as_str() == id),
        };
        found.ok_or_else(|| {
            ScenarioError::UnknownPosition(match reference {
                PositionRef::Index(index) => format!("#{index}"),
                PositionRef::Id(id) => id.clone(),
            })
        })
    }
}

/// Everything computed for one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Curves and metrics of the positions.
    pub analysis: Arc<PayoffAnalysis>,
    /// Roll outcome, when the scenario has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<RollScenario>,
    /// Portfolio accounting.
    pub portfolio: PortfolioSummary,
}

/// Evaluates scenarios against one configuration, reusing analyses of
/// unchanged position lists.
#[derive(Debug)]
pub struct ScenarioRunner {
    config: EngineConfig,
    cache: PayoffCache,
}

impl ScenarioRunner {
    /// Create a runner.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cache: PayoffCache::new(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The analysis cache.
    #[must_use]
    pub const fn cache(&self) -> &PayoffCache {
        &self.cache
    }

    /// Validate and evaluate a scenario.
    pub fn run(&mut self, scenario: &Scenario) -> Result<ScenarioReport, ScenarioError> {
        scenario.validate()?;

        let roll = match &scenario.roll {
            Some(step) => {
                let old = scenario.roll_target(&step.position)?;
                step.request.validate(old)?;
                Some(compute_roll_with_steps(
                    old,
                    &step.request,
                    self.config.curve.steps,
                ))
            }
            None => None,
        };

        let analysis = self
            .cache
            .get_or_compute(&scenario.positions, self.config.curve.steps);
        let portfolio = summarize(&scenario.positions, &self.config.portfolio);

        tracing::info!(
            positions = scenario.positions.len(),
            rolled = roll.is_some(),
            unlimited_loss = analysis.metrics.is_max_loss_unlimited,
            "Evaluated scenario"
        );

        Ok(ScenarioReport {
            analysis,
            roll,
            portfolio,
        })
    }
}

/// Evaluate one scenario with a fresh runner.
pub fn run_scenario(
    scenario: &Scenario,
    config: &EngineConfig,
) -> Result<ScenarioReport, ScenarioError> {
    ScenarioRunner::new(config.clone()).run(scenario)
}
