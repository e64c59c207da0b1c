//! Memoization of payoff analyses.
//!
//! Holds the most recent analysis keyed by a content fingerprint of the
//! input positions, so re-rendering an unchanged position list skips the
//! curve and metric computation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::domain::Position;
use crate::metrics::{PayoffMetrics, compute_metrics};
use crate::payoff::{PayoffProfile, compute_payoff_curve};

/// Curves and metrics for one set of positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoffAnalysis {
    /// Per-leg and total curves.
    pub profile: PayoffProfile,
    /// Key metrics.
    pub metrics: PayoffMetrics,
}

impl PayoffAnalysis {
    /// Compute curves and metrics.
    #[must_use]
    pub fn compute(positions: &[Position], steps: usize) -> Self {
        Self {
            profile: compute_payoff_curve(positions, steps),
            metrics: compute_metrics(positions),
        }
    }
}

/// Cached analysis.
#[derive(Debug, Clone)]
pub struct CachedAnalysis {
    /// Content hash of the positions.
    pub fingerprint: u64,
    /// Step count the curves were sampled at.
    pub steps: usize,
    /// The analysis.
    pub analysis: Arc<PayoffAnalysis>,
    /// When it was computed.
    pub computed_at: Instant,
}

/// Single-entry cache for payoff analyses.
#[derive(Debug, Default)]
pub struct PayoffCache {
    last: Option<CachedAnalysis>,
    hits: u64,
    misses: u64,
}

impl PayoffCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached analysis when the positions and step count are
    /// unchanged, otherwise recompute and replace it.
    pub fn get_or_compute(&mut self, positions: &[Position], steps: usize) -> Arc<PayoffAnalysis> {
        let fingerprint = fingerprint(positions);

        if let Some(cached) = &self.last {
            if cached.fingerprint == fingerprint && cached.steps == steps {
                self.hits += 1;
                tracing::trace!(fingerprint, steps, "Payoff cache hit");
                return Arc::clone(&cached.analysis);
            }
        }

        self.misses += 1;
        let analysis = Arc::new(PayoffAnalysis::compute(positions, steps));
        tracing::debug!(
            fingerprint,
            steps,
            legs = positions.len(),
            "Payoff cache miss, recomputed"
        );

        self.last = Some(CachedAnalysis {
            fingerprint,
            steps,
            analysis: Arc::clone(&analysis),
            computed_at: Instant::now(),
        });
        analysis
    }

    /// Most recent entry, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&CachedAnalysis> {
        self.last.as_ref()
    }

    /// Lookups served from the cache.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that recomputed.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop the cached entry; counters are kept.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// Content hash over every field that shows up in a cached analysis.
///
/// Position IDs are included since per-leg curves carry them. Symbols and
/// accounting-only fields are excluded.
#[must_use]
pub fn fingerprint(positions: &[Position]) -> u64 {
    let mut hasher = DefaultHasher::new();
    positions.len().hash(&mut hasher);
    for position in positions {
        position.id().hash(&mut hasher);
        position.position_type().hash(&mut hasher);
        position.strike_price().hash(&mut hasher);
        position.option_price().hash(&mut hasher);
        position.cost_basis_per_share().hash(&mut hasher);
        position.contracts().hash(&mut hasher);
    }
    hasher.finish()
}
