//! Per-leg and total payoff curves on a shared price axis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::leg::payoff;
use super::range::price_range;
use crate::domain::{Position, PositionId, PositionType};

/// One sample of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Underlying price at expiration.
    pub underlying_price: Decimal,
    /// Profit (negative = loss) at that price.
    pub profit: Decimal,
}

impl PayoffPoint {
    /// Create a new sample.
    #[must_use]
    pub const fn new(underlying_price: Decimal, profit: Decimal) -> Self {
        Self {
            underlying_price,
            profit,
        }
    }
}

/// An ordered sequence of payoff samples, ascending by price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoffCurve {
    points: Vec<PayoffPoint>,
}

impl PayoffCurve {
    /// Wrap samples that are already sorted by price.
    #[must_use]
    pub const fn from_points(points: Vec<PayoffPoint>) -> Self {
        Self { points }
    }

    /// Sample `profit_at` at every price.
    #[must_use]
    pub fn sample(prices: &[Decimal], profit_at: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            points: prices
                .iter()
                .map(|&price| PayoffPoint::new(price, profit_at(price)))
                .collect(),
        }
    }

    /// Get the samples.
    #[must_use]
    pub fn points(&self) -> &[PayoffPoint] {
        &self.points
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest sampled profit.
    #[must_use]
    pub fn max_profit(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.profit).max()
    }

    /// Lowest sampled profit.
    #[must_use]
    pub fn min_profit(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.profit).min()
    }

    /// Highest sampled underlying price.
    #[must_use]
    pub fn max_price(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.underlying_price)
    }

    /// Sample closest to `price` by absolute distance.
    ///
    /// No interpolation; ties resolve to the lower price.
    #[must_use]
    pub fn nearest(&self, price: Decimal) -> Option<&PayoffPoint> {
        self.points
            .iter()
            .min_by_key(|p| (p.underlying_price - price).abs())
    }

    /// Copy of the curve with `offset` added to every profit.
    #[must_use]
    pub fn shifted(&self, offset: Decimal) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| PayoffPoint::new(p.underlying_price, p.profit + offset))
                .collect(),
        }
    }
}

/// Curve of a single position within a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegCurve {
    /// Position the curve belongs to.
    pub position_id: PositionId,
    /// Position type, for labelling.
    pub position_type: PositionType,
    /// Samples on the profile's shared price axis.
    pub curve: PayoffCurve,
}

/// Per-leg and total curves sharing identical price samples index by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffProfile {
    /// One curve per input position, in input order.
    pub per_leg: Vec<LegCurve>,
    /// Sum of all legs at each price.
    pub total: PayoffCurve,
}

impl PayoffProfile {
    /// Find the curve of a position by ID.
    #[must_use]
    pub fn leg(&self, id: &PositionId) -> Option<&LegCurve> {
        self.per_leg.iter().find(|leg| &leg.position_id == id)
    }

    /// Check if the profile has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// Sum of every position's payoff at one price.
#[must_use]
pub fn aggregate_payoff(positions: &[Position], underlying_price: Decimal) -> Decimal {
    positions
        .iter()
        .map(|position| payoff(position, underlying_price))
        .sum()
}

/// Evaluate every position over the shared price domain.
///
/// The domain is generated once from all strikes; the total curve is the
/// index-wise sum of the per-leg curves. Empty input yields an empty profile.
#[must_use]
pub fn compute_payoff_curve(positions: &[Position], steps: usize) -> PayoffProfile {
    let prices = price_range(positions, steps);
    if prices.is_empty() {
        return PayoffProfile::default();
    }

    let per_leg: Vec<LegCurve> = positions
        .iter()
        .map(|position| LegCurve {
            position_id: position.id().clone(),
            position_type: position.position_type(),
            curve: PayoffCurve::sample(&prices, |price| payoff(position, price)),
        })
        .collect();

    let total = PayoffCurve::from_points(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let profit = per_leg.iter().map(|leg| leg.curve.points[i].profit).sum();
                PayoffPoint::new(price, profit)
            })
            .collect(),
    );

    tracing::debug!(
        legs = per_leg.len(),
        samples = total.len(),
        "Computed payoff curve"
    );

    PayoffProfile { per_leg, total }
}
