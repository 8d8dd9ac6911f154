//! Common utilities for component calculations.

use crate::error::ComponentResult;
use ct_core::numeric::ensure_finite;

/// Round-off allowance when deciding whether a quality root lies in [0, 1].
pub const QUALITY_TOLERANCE: f64 = 1e-9;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Snap a candidate quality into [0, 1] if it lies within round-off of that range.
pub fn admissible_quality(x: f64) -> Option<f64> {
    if x.is_finite() && (-QUALITY_TOLERANCE..=1.0 + QUALITY_TOLERANCE).contains(&x) {
        Some(x.clamp(0.0, 1.0))
    } else {
        None
    }
}
