//! Break-even detection on sampled curves.

use rust_decimal::Decimal;

use super::constants::{BREAK_EVEN_MERGE_DISTANCE, BREAK_EVEN_TOLERANCE, MIN_INTERPOLATION_DELTA};
use crate::payoff::{PayoffCurve, PayoffPoint};

/// Underlying prices where the sampled payoff crosses zero.
///
/// Strict sign changes between neighbours are linearly interpolated; samples
/// within [`BREAK_EVEN_TOLERANCE`] of zero count directly. The result is
/// sorted and de-duplicated.
#[must_use]
pub fn find_break_evens(curve: &PayoffCurve) -> Vec<Decimal> {
    let points = curve.points();
    let mut candidates = Vec::new();

    for point in points {
        if point.profit.abs() < BREAK_EVEN_TOLERANCE {
            candidates.push(point.underlying_price);
        }
    }
    candidates.extend(
        points
            .windows(2)
            .filter_map(|pair| interpolate_root(&pair[0], &pair[1])),
    );

    let break_evens = dedup_break_evens(candidates);
    tracing::trace!(count = break_evens.len(), "Detected break-even prices");
    break_evens
}

/// Sort ascending and drop any price within [`BREAK_EVEN_MERGE_DISTANCE`] of
/// the previously kept one.
#[must_use]
pub fn dedup_break_evens(mut prices: Vec<Decimal>) -> Vec<Decimal> {
    prices.sort_unstable();

    let mut kept: Vec<Decimal> = Vec::with_capacity(prices.len());
    for price in prices {
        match kept.last() {
            Some(&last) if price - last <= BREAK_EVEN_MERGE_DISTANCE => {}
            _ => kept.push(price),
        }
    }
    kept
}

/// Zero crossing between two samples with opposite signs.
fn interpolate_root(a: &PayoffPoint, b: &PayoffPoint) -> Option<Decimal> {
    let crosses = (a.profit < Decimal::ZERO && b.profit > Decimal::ZERO)
        || (a.profit > Decimal::ZERO && b.profit < Decimal::ZERO);
    if !crosses {
        return None;
    }

    let delta = b.profit - a.profit;
    if delta.abs() <= MIN_INTERPOLATION_DELTA {
        return None;
    }

    let fraction = -a.profit / delta;
    Some(a.underlying_price + fraction * (b.underlying_price - a.underlying_price))
}
