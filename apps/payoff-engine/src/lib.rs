// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Expiration payoff analytics for option-selling positions.
//!
//! # Layout (leaf → root)
//!
//! - **Domain**: the `Position` record and its value objects
//! - **Payoff**: single-leg payoff, price domain, per-leg and total curves
//! - **Metrics**: max profit, max loss, unlimited-loss flag, break-evens
//! - **Rolling**: close-and-reopen scenarios
//! - **Portfolio**: premium, capital and realized/unrealized accounting
//! - **Cache**: content-keyed memoization of analyses
//! - **Scenario**: YAML scenario files evaluated into a report
//!
//! The numeric core (`payoff`, `metrics`, `rolling`) is pure and
//! synchronous: inputs are never mutated and empty inputs produce empty
//! results instead of errors.
//!
//! # Example
//!
//! ```rust
//! use payoff_engine::{Position, PositionType, compute_metrics};
//! use rust_decimal_macros::dec;
//!
//! let put = Position::new("XYZ", PositionType::NakedPut, dec!(100), dec!(3), 1);
//! let metrics = compute_metrics(&[put]);
//! assert_eq!(metrics.max_loss, dec!(-9700));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Position record and value objects.
pub mod domain;

/// Single-leg payoff, price domain and curve aggregation.
pub mod payoff;

/// Payoff metrics.
pub mod metrics;

/// Roll scenarios.
pub mod rolling;

/// Portfolio accounting.
pub mod portfolio;

/// Analysis memoization.
pub mod cache;

/// Configuration loading.
pub mod config;

/// Tracing setup.
pub mod telemetry;

/// Scenario files and reports.
pub mod scenario;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::{
    CONTRACT_MULTIPLIER, ExerciseStatus, MarginRates, Position, PositionError, PositionId,
    PositionType, Symbol,
};
pub use metrics::{PayoffMetrics, ProfitBound, compute_metrics};
pub use payoff::{
    DEFAULT_STEPS, LegCurve, PayoffCurve, PayoffPoint, PayoffProfile, compute_payoff_curve,
    payoff, price_range,
};
pub use rolling::{RollError, RollRequest, RollScenario, compute_roll};
