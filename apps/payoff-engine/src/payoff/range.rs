//! Price-domain generation.

use rust_decimal::Decimal;

use crate::domain::Position;

/// Default number of intervals between the lowest and highest sample.
pub const DEFAULT_STEPS: usize = 100;

/// Headroom added on each side of the strike range (0.2 = 20%).
pub const DOMAIN_BUFFER_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Lower and upper price bounds bracketing every strike.
///
/// `buffer = max(0.2 × (max − min strike), 0.2 × min strike)`; the domain is
/// `[max(0, min − buffer), max + buffer]`. `None` for an empty slice.
#[must_use]
pub fn price_bounds(positions: &[Position]) -> Option<(Decimal, Decimal)> {
    let min_strike = positions.iter().map(Position::strike_price).min()?;
    let max_strike = positions.iter().map(Position::strike_price).max()?;

    let buffer = (DOMAIN_BUFFER_RATIO * (max_strike - min_strike))
        .max(DOMAIN_BUFFER_RATIO * min_strike);

    let lower = (min_strike - buffer).max(Decimal::ZERO);
    let upper = max_strike + buffer;

    Some((lower, upper))
}

/// Evenly spaced underlying prices covering every strike.
///
/// Returns `steps + 1` samples including both bounds, or an empty vector
/// when `positions` is empty.
#[must_use]
pub fn price_range(positions: &[Position], steps: usize) -> Vec<Decimal> {
    let Some((lower, upper)) = price_bounds(positions) else {
        return Vec::new();
    };

    if steps == 0 {
        return vec![lower];
    }

    let step = (upper - lower) / Decimal::from(steps);

    (0..=steps)
        .map(|i| {
            // Pin the last sample so rounding in `step` cannot undershoot
            if i == steps {
                upper
            } else {
                lower + step * Decimal::from(i)
            }
        })
        .collect()
}
