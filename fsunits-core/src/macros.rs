//! Internal macros.

/// Generates named factories and accessors on `Quantity<$unit>`.
///
/// For every `Variant => from_name, name;` entry this expands to:
///
/// - `Quantity::<$unit>::from_name(value)`: guarded construction in `Variant`
/// - `quantity.name()`: the value converted into `Variant`
#[doc(hidden)]
#[macro_export]
macro_rules! impl_named_units {
    ($unit:ident { $($variant:ident => $from:ident, $get:ident;)+ }) => {
        impl $crate::Quantity<$unit> {
            $(
                #[doc = concat!("Creates a quantity in [`", stringify!($unit), "::", stringify!($variant), "`].")]
                ///
                /// Fails with [`QuantityError::InvalidValue`](crate::QuantityError::InvalidValue) for NaN or
                /// infinities.
                #[inline]
                pub fn $from(value: impl Into<$crate::QuantityValue>) -> $crate::Result<Self> {
                    Self::from(value, $unit::$variant)
                }

                #[doc = concat!("The value expressed in [`", stringify!($unit), "::", stringify!($variant), "`].")]
                #[inline]
                pub fn $get(&self) -> f64 {
                    self.as_unit($unit::$variant)
                }
            )+
        }
    };
}

/// Implements `From<$unit> for AnyUnit` and `From<Quantity<$unit>> for AnyQuantity` for each listed dimension.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_any_from {
    ($($variant:ident($unit:ty)),+ $(,)?) => {
        $(
            impl From<$unit> for $crate::AnyUnit {
                #[inline]
                fn from(unit: $unit) -> Self {
                    $crate::AnyUnit::$variant(unit)
                }
            }

            impl From<$crate::Quantity<$unit>> for $crate::AnyQuantity {
                #[inline]
                fn from(quantity: $crate::Quantity<$unit>) -> Self {
                    $crate::AnyQuantity::$variant(quantity)
                }
            }

            impl TryFrom<$crate::AnyQuantity> for $crate::Quantity<$unit> {
                type Error = $crate::QuantityError;

                fn try_from(any: $crate::AnyQuantity) -> $crate::Result<Self> {
                    match any {
                        $crate::AnyQuantity::$variant(quantity) => Ok(quantity),
                        other => Err($crate::QuantityError::UnsupportedUnit {
                            dimension: <$unit as $crate::UnitKind>::DIMENSION,
                            unit: other.unit().name().to_owned(),
                        }),
                    }
                }
            }
        )+
    };
}
