use crate::{CtError, CtResult};

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> CtResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CtError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> CtResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CtError::NonPositive { what, value: v })
    }
}

/// Linear blend `a * (1 - w) + b * w`.
///
/// Written in the two-product form so that `w = 0` returns `a` exactly and
/// `w = 1` returns `b` exactly.
#[inline]
pub fn blend(a: Real, b: Real, w: Real) -> Real {
    a * (1.0 - w) + b * w
}

/// Arithmetic mean of two bracketing values.
#[inline]
pub fn midpoint(a: Real, b: Real) -> Real {
    0.5 * (a + b)
}
