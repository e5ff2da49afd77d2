//! Flexible numeric input for quantity factories.

use core::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::{QuantityError, Result};
use crate::guard::ensure_finite;

/// A numeric sample on its way into a [`Quantity`](crate::Quantity).
///
/// Factories take `impl Into<QuantityValue>` so that any common primitive (or an exact [`Decimal`]) can be passed
/// without one overload per numeric type. Integers and floats are widened to `f64`; a [`Decimal`] is kept exact until
/// the quantity is built.
///
/// ```rust
/// use fsunits_core::QuantityValue;
/// use rust_decimal::Decimal;
///
/// assert_eq!(QuantityValue::from(5280_i32).to_f64().unwrap(), 5280.0);
/// assert_eq!(QuantityValue::from(0.5_f32).to_f64().unwrap(), 0.5);
///
/// let exact = QuantityValue::from(Decimal::new(1_25, 2));
/// assert_eq!(exact.as_decimal().unwrap(), Decimal::new(125, 2));
/// assert_eq!(exact.to_f64().unwrap(), 1.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuantityValue {
    /// Any integer or floating-point primitive, widened to `f64`.
    Double(f64),
    /// An exact decimal.
    Decimal(Decimal),
}

impl QuantityValue {
    /// Returns the value as a finite `f64`.
    ///
    /// Fails with [`QuantityError::InvalidValue`] for NaN or infinities.
    pub fn to_f64(self) -> Result<f64> {
        match self {
            QuantityValue::Double(value) => ensure_finite(value),
            QuantityValue::Decimal(value) => value
                .to_f64()
                .ok_or_else(|| QuantityError::InvalidNumber(value.to_string()))
                .and_then(ensure_finite),
        }
    }

    /// Returns the value as a [`Decimal`], without precision loss when a decimal was supplied.
    ///
    /// Doubles outside the decimal range (about ±7.9e28) fail with [`QuantityError::InvalidValue`].
    pub fn as_decimal(self) -> Result<Decimal> {
        match self {
            QuantityValue::Decimal(value) => Ok(value),
            QuantityValue::Double(value) => {
                let value = ensure_finite(value)?;
                Decimal::from_f64(value).ok_or(QuantityError::InvalidValue { value })
            }
        }
    }

    /// `true` if the caller supplied an exact decimal.
    pub fn is_decimal(self) -> bool {
        matches!(self, QuantityValue::Decimal(_))
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for QuantityValue {
                #[inline]
                fn from(value: $t) -> Self {
                    QuantityValue::Double(value as f64)
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Decimal> for QuantityValue {
    #[inline]
    fn from(value: Decimal) -> Self {
        QuantityValue::Decimal(value)
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityValue::Double(value) => write!(f, "{}", value),
            QuantityValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}
