//! Payoff Engine Binary
//!
//! Evaluates scenario files and prints one JSON report per file on stdout.
//!
//! # Usage
//!
//! ```bash
//! payoff-engine scenario.yaml [more.yaml ...]
//! ```
//!
//! # Environment Variables
//!
//! - `PAYOFF_ENGINE_CONFIG`: Path to a YAML config file (default: built-in defaults)
//! - `RUST_LOG`: Log filter, overrides the configured level

use anyhow::{Context, Result, bail};
use payoff_engine::config::{CONFIG_PATH_ENV, load_config};
use payoff_engine::scenario::{Scenario, ScenarioRunner};
use payoff_engine::telemetry::init_tracing;

fn main() -> Result<()> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: payoff-engine <scenario.yaml> [more.yaml ...]");
    }

    let config_path = std::env::var(CONFIG_PATH_ENV).ok().filter(|p| !p.is_empty());
    let config = load_config(config_path.as_deref()).context("loading engine config")?;

    init_tracing(&config.observability.logging)?;
    tracing::info!(
        config = config_path.as_deref().unwrap_or("<defaults>"),
        steps = config.curve.steps,
        scenarios = paths.len(),
        "Starting payoff engine"
    );

    let mut runner = ScenarioRunner::new(config);
    for path in &paths {
        let scenario = Scenario::from_file(path)?;
        let report = runner
            .run(&scenario)
            .with_context(|| format!("evaluating scenario '{path}'"))?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    tracing::info!(
        cache_hits = runner.cache().hits(),
        cache_misses = runner.cache().misses(),
        "Done"
    );
    Ok(())
}
