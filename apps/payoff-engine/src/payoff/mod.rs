//! Expiration payoff evaluation.
//!
//! This module provides:
//! - The single-leg terminal P/L function
//! - The price-domain generator shared by curves and scans
//! - Multi-leg aggregation into per-leg and total curves on one price axis

mod curve;
mod leg;
mod range;

pub use curve::{
    LegCurve, PayoffCurve, PayoffPoint, PayoffProfile, aggregate_payoff, compute_payoff_curve,
};
pub use leg::payoff;
pub use range::{DEFAULT_STEPS, DOMAIN_BUFFER_RATIO, price_bounds, price_range};
