//! Finite-number guard applied on every construction path.

use crate::error::{QuantityError, Result};

/// Returns `value` unchanged when it is finite, otherwise [`QuantityError::InvalidValue`].
///
/// ```rust
/// use fsunits_core::guard::ensure_finite;
///
/// assert_eq!(ensure_finite(1.5), Ok(1.5));
/// assert!(ensure_finite(f64::NAN).is_err());
/// assert!(ensure_finite(f64::NEG_INFINITY).is_err());
/// ```
#[inline]
pub fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantityError::InvalidValue { value })
    }
}

/// Clamps an arithmetic result back into the finite range.
///
/// Overflow saturates at `f64::MAX`/`f64::MIN` by sign; NaN (only reachable through a NaN operand supplied to a
/// scalar operator) collapses to zero.
#[inline]
pub(crate) fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}
