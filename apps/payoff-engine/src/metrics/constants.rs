//! Decimal constants for metric scans.

use rust_decimal::Decimal;

/// A sample with |profit| below this is itself a break-even (0.01).
pub const BREAK_EVEN_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Segments whose profit change is at or below this are not interpolated (0.001).
pub const MIN_INTERPOLATION_DELTA: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Break-evens closer than this to the previous kept one are merged (0.50).
pub const BREAK_EVEN_MERGE_DISTANCE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Multiple of the domain's max price used to stand in for "price → ∞".
pub const UNBOUNDED_PRICE_MULTIPLE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
