//! Unit-erased registry.
//!
//! The typed API makes mixing dimensions a compile error. Inputs that arrive at runtime (a unit id from a file, unit
//! text from a user) instead go through [`AnyUnit`] and [`AnyQuantity`], which carry the dimension as data and report
//! mismatches as errors:
//!
//! - converting between units of different dimensions fails with [`QuantityError::UnsupportedUnit`]
//! - comparing or combining quantities of different dimensions fails with [`QuantityError::IncomparableType`]
//!
//! ```rust
//! use fsunits_core::registry::{self, AnyUnit};
//! use fsunits_core::length::LengthUnit;
//! use fsunits_core::mass::MassUnit;
//!
//! let feet = AnyUnit::from(LengthUnit::Foot);
//! let miles = AnyUnit::from(LengthUnit::Mile);
//! assert_eq!(registry::convert_value(5280.0, feet, miles), Ok(1.0));
//! assert!(registry::convert_value(1.0, feet, AnyUnit::from(MassUnit::Pound)).is_err());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::abbreviation::AbbreviationTable;
use crate::conversion::convert;
use crate::error::{QuantityError, Result};
use crate::length::{Length, LengthUnit};
use crate::mass::{Mass, MassUnit};
use crate::speed::{Speed, SpeedUnit};
use crate::temperature::{Temperature, TemperatureUnit};
use crate::{Conversion, Dimension, QuantityValue, UnitKind};

// =============================================================================
// Unit Metadata
// =============================================================================

/// Metadata about a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeta {
    /// The dimension this unit belongs to.
    pub dimension: Dimension,
    /// Raw id within the dimension.
    pub id: u32,
    /// Conversion to the dimension's base unit.
    pub conversion: Conversion,
    /// Variant name.
    pub name: &'static str,
    /// Canonical abbreviation.
    pub symbol: &'static str,
}

/// A unit of any supported dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnyUnit {
    /// A length unit.
    Length(LengthUnit),
    /// A mass unit.
    Mass(MassUnit),
    /// A speed unit.
    Speed(SpeedUnit),
    /// A temperature unit.
    Temperature(TemperatureUnit),
}

macro_rules! with_unit {
    ($any:expr, $unit:ident => $body:expr) => {
        match $any {
            AnyUnit::Length($unit) => $body,
            AnyUnit::Mass($unit) => $body,
            AnyUnit::Speed($unit) => $body,
            AnyUnit::Temperature($unit) => $body,
        }
    };
}

impl AnyUnit {
    /// Looks a unit up by dimension and raw id.
    ///
    /// Fails with [`QuantityError::InvalidUnit`] for `0` or an id the dimension does not define.
    pub fn from_id(dimension: Dimension, id: u32) -> Result<Self> {
        let unit = match dimension {
            Dimension::Length => LengthUnit::from_id(id).map(AnyUnit::Length),
            Dimension::Mass => MassUnit::from_id(id).map(AnyUnit::Mass),
            Dimension::Speed => SpeedUnit::from_id(id).map(AnyUnit::Speed),
            Dimension::Temperature => TemperatureUnit::from_id(id).map(AnyUnit::Temperature),
        };
        unit.ok_or_else(|| QuantityError::invalid_unit(dimension, id.to_string()))
    }

    /// Parses unit text within a known dimension.
    pub fn parse_in(dimension: Dimension, text: &str) -> Result<Self> {
        let id = AbbreviationTable::global()
            .lookup(dimension, text)
            .ok_or_else(|| QuantityError::invalid_unit(dimension, text.trim()))?;
        Self::from_id(dimension, id)
    }

    /// Every unit of `dimension`.
    pub fn all(dimension: Dimension) -> Vec<AnyUnit> {
        match dimension {
            Dimension::Length => LengthUnit::ALL.iter().map(|&u| u.into()).collect(),
            Dimension::Mass => MassUnit::ALL.iter().map(|&u| u.into()).collect(),
            Dimension::Speed => SpeedUnit::ALL.iter().map(|&u| u.into()).collect(),
            Dimension::Temperature => TemperatureUnit::ALL.iter().map(|&u| u.into()).collect(),
        }
    }

    /// Base unit of `dimension`.
    pub fn base(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Length => AnyUnit::Length(LengthUnit::BASE),
            Dimension::Mass => AnyUnit::Mass(MassUnit::BASE),
            Dimension::Speed => AnyUnit::Speed(SpeedUnit::BASE),
            Dimension::Temperature => AnyUnit::Temperature(TemperatureUnit::BASE),
        }
    }

    /// Dimension of the unit.
    pub fn dimension(self) -> Dimension {
        match self {
            AnyUnit::Length(_) => Dimension::Length,
            AnyUnit::Mass(_) => Dimension::Mass,
            AnyUnit::Speed(_) => Dimension::Speed,
            AnyUnit::Temperature(_) => Dimension::Temperature,
        }
    }

    /// Raw id within the dimension.
    pub fn id(self) -> u32 {
        with_unit!(self, unit => unit.id())
    }

    /// Variant name.
    pub fn name(self) -> &'static str {
        with_unit!(self, unit => unit.name())
    }

    /// Canonical abbreviation.
    pub fn abbreviation(self) -> &'static str {
        with_unit!(self, unit => crate::abbreviation(unit))
    }

    /// Conversion to the base unit.
    pub fn conversion(self) -> Conversion {
        with_unit!(self, unit => unit.conversion())
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for AnyUnit {
    type Err = QuantityError;

    /// Tries every dimension in [`Dimension::ALL`] order.
    fn from_str(s: &str) -> Result<Self> {
        Dimension::ALL
            .iter()
            .find_map(|&dimension| Self::parse_in(dimension, s).ok())
            .ok_or_else(|| QuantityError::InvalidUnit {
                dimension: Dimension::Length,
                unit: s.trim().to_owned(),
            })
    }
}

// =============================================================================
// Registry Functions
// =============================================================================

/// Returns metadata for the given unit.
#[inline]
pub fn meta(unit: AnyUnit) -> UnitMeta {
    UnitMeta {
        dimension: unit.dimension(),
        id: unit.id(),
        conversion: unit.conversion(),
        name: unit.name(),
        symbol: unit.abbreviation(),
    }
}

/// Returns the dimension of the given unit.
#[inline]
pub fn dimension(unit: AnyUnit) -> Dimension {
    unit.dimension()
}

/// Checks if two units are compatible (same dimension).
#[inline]
pub fn compatible(a: AnyUnit, b: AnyUnit) -> bool {
    a.dimension() == b.dimension()
}

/// Converts a value from one unit to another.
///
/// Returns `Err(QuantityError::UnsupportedUnit)` when `dst` is not a unit of `src`'s dimension. The value itself is
/// not guarded.
pub fn convert_value(v: f64, src: AnyUnit, dst: AnyUnit) -> Result<f64> {
    match (src, dst) {
        (AnyUnit::Length(s), AnyUnit::Length(d)) => Ok(convert(v, s, d)),
        (AnyUnit::Mass(s), AnyUnit::Mass(d)) => Ok(convert(v, s, d)),
        (AnyUnit::Speed(s), AnyUnit::Speed(d)) => Ok(convert(v, s, d)),
        (AnyUnit::Temperature(s), AnyUnit::Temperature(d)) => Ok(convert(v, s, d)),
        _ => Err(QuantityError::UnsupportedUnit {
            dimension: src.dimension(),
            unit: dst.name().to_owned(),
        }),
    }
}

// =============================================================================
// Unit-erased quantities
// =============================================================================

/// A quantity of any supported dimension.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "dimension", content = "quantity"))]
pub enum AnyQuantity {
    /// A length.
    Length(Length),
    /// A mass.
    Mass(Mass),
    /// A speed.
    Speed(Speed),
    /// A temperature.
    Temperature(Temperature),
}

macro_rules! with_quantity {
    ($any:expr, $q:ident => $body:expr) => {
        match $any {
            AnyQuantity::Length($q) => $body,
            AnyQuantity::Mass($q) => $body,
            AnyQuantity::Speed($q) => $body,
            AnyQuantity::Temperature($q) => $body,
        }
    };
}

impl AnyQuantity {
    /// Builds a quantity in `unit`, running the finite guard.
    pub fn new(value: impl Into<QuantityValue>, unit: AnyUnit) -> Result<Self> {
        let value = value.into();
        Ok(match unit {
            AnyUnit::Length(u) => AnyQuantity::Length(Length::from(value, u)?),
            AnyUnit::Mass(u) => AnyQuantity::Mass(Mass::from(value, u)?),
            AnyUnit::Speed(u) => AnyQuantity::Speed(Speed::from(value, u)?),
            AnyUnit::Temperature(u) => AnyQuantity::Temperature(Temperature::from(value, u)?),
        })
    }

    /// Builds a quantity from a dimension and raw unit id.
    pub fn from_unit_id(value: impl Into<QuantityValue>, dimension: Dimension, id: u32) -> Result<Self> {
        Self::new(value, AnyUnit::from_id(dimension, id)?)
    }

    /// Parses text such as `"30 kn"` within a known dimension.
    pub fn parse_in(dimension: Dimension, text: &str) -> Result<Self> {
        Ok(match dimension {
            Dimension::Length => AnyQuantity::Length(Length::parse(text)?),
            Dimension::Mass => AnyQuantity::Mass(Mass::parse(text)?),
            Dimension::Speed => AnyQuantity::Speed(Speed::parse(text)?),
            Dimension::Temperature => AnyQuantity::Temperature(Temperature::parse(text)?),
        })
    }

    /// Dimension of the quantity.
    pub fn dimension(&self) -> Dimension {
        self.unit().dimension()
    }

    /// Raw value.
    pub fn value(&self) -> f64 {
        with_quantity!(self, q => q.value())
    }

    /// Unit of the raw value.
    pub fn unit(&self) -> AnyUnit {
        with_quantity!(self, q => q.unit().into())
    }

    /// The value converted into `target`.
    pub fn as_unit(&self, target: AnyUnit) -> Result<f64> {
        convert_value(self.value(), self.unit(), target)
    }

    /// The quantity re-expressed in `target`.
    pub fn to_unit(&self, target: AnyUnit) -> Result<Self> {
        match (self, target) {
            (AnyQuantity::Length(q), AnyUnit::Length(u)) => Ok(q.to_unit(u).into()),
            (AnyQuantity::Mass(q), AnyUnit::Mass(u)) => Ok(q.to_unit(u).into()),
            (AnyQuantity::Speed(q), AnyUnit::Speed(u)) => Ok(q.to_unit(u).into()),
            (AnyQuantity::Temperature(q), AnyUnit::Temperature(u)) => Ok(q.to_unit(u).into()),
            _ => Err(QuantityError::UnsupportedUnit {
                dimension: self.dimension(),
                unit: target.name().to_owned(),
            }),
        }
    }

    fn incomparable(&self, other: &Self) -> QuantityError {
        QuantityError::IncomparableType {
            left: self.dimension(),
            right: other.dimension(),
        }
    }

    /// Orders two quantities of the same dimension.
    ///
    /// Fails with [`QuantityError::IncomparableType`] across dimensions.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => Ok(a.cmp(b)),
            (AnyQuantity::Mass(a), AnyQuantity::Mass(b)) => Ok(a.cmp(b)),
            (AnyQuantity::Speed(a), AnyQuantity::Speed(b)) => Ok(a.cmp(b)),
            (AnyQuantity::Temperature(a), AnyQuantity::Temperature(b)) => Ok(a.cmp(b)),
            _ => Err(self.incomparable(other)),
        }
    }

    /// Sum in the left unit; overflow saturates.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        match (*self, *other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => Ok((a + b).into()),
            (AnyQuantity::Mass(a), AnyQuantity::Mass(b)) => Ok((a + b).into()),
            (AnyQuantity::Speed(a), AnyQuantity::Speed(b)) => Ok((a + b).into()),
            (AnyQuantity::Temperature(a), AnyQuantity::Temperature(b)) => Ok((a + b).into()),
            _ => Err(self.incomparable(other)),
        }
    }

    /// Difference in the left unit; overflow saturates.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        match (*self, *other) {
            (AnyQuantity::Length(a), AnyQuantity::Length(b)) => Ok((a - b).into()),
            (AnyQuantity::Mass(a), AnyQuantity::Mass(b)) => Ok((a - b).into()),
            (AnyQuantity::Speed(a), AnyQuantity::Speed(b)) => Ok((a - b).into()),
            (AnyQuantity::Temperature(a), AnyQuantity::Temperature(b)) => Ok((a - b).into()),
            _ => Err(self.incomparable(other)),
        }
    }

    /// Formats with a specifier such as `"F2"`.
    pub fn format(&self, spec: &str) -> Result<String> {
        with_quantity!(self, q => q.format(spec))
    }
}

impl PartialEq for AnyQuantity {
    /// Quantities of different dimensions are never equal.
    fn eq(&self, other: &Self) -> bool {
        self.try_cmp(other) == Ok(Ordering::Equal)
    }
}

impl PartialOrd for AnyQuantity {
    /// `None` across dimensions.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_quantity!(self, q => fmt::Display::fmt(q, f))
    }
}

crate::impl_any_from!(
    Length(LengthUnit),
    Mass(MassUnit),
    Speed(SpeedUnit),
    Temperature(TemperatureUnit),
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn meta_describes_the_unit() {
        let m = meta(AnyUnit::Length(LengthUnit::Kilometre));
        assert_eq!(m.dimension, Dimension::Length);
        assert_eq!(m.id, 4);
        assert_eq!(m.name, "Kilometre");
        assert_eq!(m.symbol, "km");
        assert_eq!(m.conversion.scale(), 1000.0);
    }

    #[test]
    fn compatibility() {
        let ft = AnyUnit::from(LengthUnit::Foot);
        let nm = AnyUnit::from(LengthUnit::NauticalMile);
        let kg = AnyUnit::from(MassUnit::Kilogram);
        assert!(compatible(ft, nm));
        assert!(!compatible(ft, kg));
        assert_eq!(dimension(kg), Dimension::Mass);
    }

    #[test]
    fn convert_value_across_dimensions_is_unsupported() {
        let err = convert_value(1.0, LengthUnit::Foot.into(), MassUnit::Pound.into()).unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnsupportedUnit {
                dimension: Dimension::Length,
                unit: "Pound".into()
            }
        );
    }

    #[test]
    fn convert_value_same_dimension() {
        let c = AnyUnit::from(TemperatureUnit::Celsius);
        let k = AnyUnit::from(TemperatureUnit::Kelvin);
        assert_eq!(convert_value(0.0, c, k), Ok(273.15));
        assert_eq!(convert_value(42.0, c, c), Ok(42.0));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(AnyUnit::from_id(Dimension::Speed, 7), Ok(AnyUnit::Speed(SpeedUnit::Knot)));
        assert!(matches!(
            AnyUnit::from_id(Dimension::Speed, 0),
            Err(QuantityError::InvalidUnit { dimension: Dimension::Speed, .. })
        ));
        assert!(AnyUnit::from_id(Dimension::Temperature, 4).is_err());
    }

    #[test]
    fn all_and_base() {
        assert_eq!(AnyUnit::all(Dimension::Length).len(), 9);
        assert_eq!(AnyUnit::all(Dimension::Speed).len(), 11);
        assert_eq!(AnyUnit::base(Dimension::Temperature), AnyUnit::Temperature(TemperatureUnit::Kelvin));
        for dimension in Dimension::ALL {
            assert_eq!(AnyUnit::base(*dimension).dimension(), *dimension);
        }
    }

    #[test]
    fn parse_any_unit() {
        assert_eq!("mph".parse::<AnyUnit>(), Ok(AnyUnit::Speed(SpeedUnit::MilePerHour)));
        assert_eq!("lbs".parse::<AnyUnit>(), Ok(AnyUnit::Mass(MassUnit::Pound)));
        assert_eq!("°F".parse::<AnyUnit>(), Ok(AnyUnit::Temperature(TemperatureUnit::Fahrenheit)));
        assert!("parsec".parse::<AnyUnit>().is_err());
        assert_eq!(AnyUnit::Length(LengthUnit::Yard).to_string(), "yd");
    }

    #[test]
    fn any_quantity_compare() {
        let a = AnyQuantity::from(Length::from_miles(1).unwrap());
        let b = AnyQuantity::new(5000, LengthUnit::Foot.into()).unwrap();
        assert_eq!(a.try_cmp(&b), Ok(Ordering::Greater));
        assert!(a > b);

        let m = AnyQuantity::from(Mass::from_pounds(1).unwrap());
        assert_eq!(
            a.try_cmp(&m),
            Err(QuantityError::IncomparableType {
                left: Dimension::Length,
                right: Dimension::Mass
            })
        );
        assert_ne!(a, m);
        assert_eq!(a.partial_cmp(&m), None);
    }

    #[test]
    fn any_quantity_arithmetic() {
        let a = AnyQuantity::new(1, LengthUnit::Foot.into()).unwrap();
        let b = AnyQuantity::new(6, LengthUnit::Inch.into()).unwrap();
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.value(), 1.5);
        assert_eq!(sum.unit(), AnyUnit::Length(LengthUnit::Foot));
        assert_eq!(b.try_sub(&a).unwrap().value(), -6.0);

        let t = AnyQuantity::new(1, TemperatureUnit::Kelvin.into()).unwrap();
        assert!(matches!(a.try_add(&t), Err(QuantityError::IncomparableType { .. })));
        assert!(t.try_sub(&a).is_err());
    }

    #[test]
    fn any_quantity_conversion() {
        let q = AnyQuantity::parse_in(Dimension::Speed, "36 km/h").unwrap();
        assert_eq!(q.as_unit(SpeedUnit::MetrePerSecond.into()), Ok(10.0));
        let converted = q.to_unit(SpeedUnit::MetrePerSecond.into()).unwrap();
        assert_eq!(converted.to_string(), "10 m/s");
        assert!(q.to_unit(LengthUnit::Metre.into()).is_err());
        assert!(q.as_unit(LengthUnit::Metre.into()).is_err());
    }

    #[test]
    fn any_quantity_from_id_and_format() {
        let q = AnyQuantity::from_unit_id(98.6, Dimension::Temperature, 2).unwrap();
        assert_eq!(q.dimension(), Dimension::Temperature);
        assert_eq!(q.format("F1").unwrap(), "98.6 °F");
        assert_relative_eq!(q.as_unit(TemperatureUnit::Celsius.into()).unwrap(), 37.0, epsilon = 1e-12);
        assert!(AnyQuantity::from_unit_id(1, Dimension::Mass, 0).is_err());
        assert!(AnyQuantity::new(f64::NAN, MassUnit::Gram.into()).is_err());
    }

    #[test]
    fn typed_roundtrip() {
        let any = AnyQuantity::from(Mass::from_stones(2).unwrap());
        let mass = Mass::try_from(any).unwrap();
        assert_eq!(mass.pounds(), 28.0);
        assert!(Length::try_from(any).is_err());
    }
}
