//! Error types for fsunits-core

use crate::Dimension;
use thiserror::Error;

/// Result type for fsunits-core operations
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Errors raised while constructing, converting, comparing or formatting quantities.
///
/// Every error is local and deterministic: it is returned at the offending call and never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// A raw value was NaN or infinite.
    #[error("invalid value {value}: quantities must be finite numbers")]
    InvalidValue {
        /// The rejected value.
        value: f64,
    },

    /// Text that should hold a number could not be parsed.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A unit id or unit text does not name a unit of the dimension.
    #[error("invalid {dimension} unit: {unit:?}")]
    InvalidUnit {
        /// Dimension the unit was looked up in.
        dimension: Dimension,
        /// The rejected id or text.
        unit: String,
    },

    /// A unit outside the dimension's closed set was supplied to a conversion.
    #[error("unsupported unit {unit} for dimension {dimension}")]
    UnsupportedUnit {
        /// Dimension performing the conversion.
        dimension: Dimension,
        /// The unit that has no entry in that dimension's conversion table.
        unit: String,
    },

    /// A format specifier other than general, fixed or scientific.
    #[error("unsupported format specifier: {0:?}")]
    UnsupportedFormat(String),

    /// Two quantities of different dimensions were compared or combined.
    #[error("cannot compare {left} with {right}")]
    IncomparableType {
        /// Dimension of the left operand.
        left: Dimension,
        /// Dimension of the right operand.
        right: Dimension,
    },
}

impl QuantityError {
    pub(crate) fn invalid_unit(dimension: Dimension, unit: impl Into<String>) -> Self {
        QuantityError::InvalidUnit {
            dimension,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = QuantityError::InvalidValue { value: f64::NAN };
        assert_eq!(
            err.to_string(),
            "invalid value NaN: quantities must be finite numbers"
        );

        let err = QuantityError::invalid_unit(Dimension::Length, "furlong");
        assert_eq!(err.to_string(), "invalid length unit: \"furlong\"");

        let err = QuantityError::IncomparableType {
            left: Dimension::Mass,
            right: Dimension::Speed,
        };
        assert_eq!(err.to_string(), "cannot compare mass with speed");

        let err = QuantityError::UnsupportedFormat("X4".into());
        assert_eq!(err.to_string(), "unsupported format specifier: \"X4\"");
    }
}
