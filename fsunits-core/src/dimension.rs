//! Dimension identifiers.

use core::fmt;

/// The physical **dimension** a unit belongs to.
///
/// A dimension is the category that distinguishes a metre from a kilogram. Every unit enum names its dimension
/// through [`UnitKind::DIMENSION`](crate::UnitKind::DIMENSION), and quantities of different dimensions can never be
/// mixed through the typed API.
///
/// ```rust
/// use fsunits_core::{Dimension, UnitKind};
/// use fsunits_core::length::LengthUnit;
///
/// assert_eq!(LengthUnit::DIMENSION, Dimension::Length);
/// assert_eq!(Dimension::Length.base_symbol(), "m");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Length, base unit metre.
    Length,
    /// Mass, base unit kilogram.
    Mass,
    /// Speed, base unit metre per second.
    Speed,
    /// Thermodynamic temperature, base unit kelvin.
    Temperature,
}

impl Dimension {
    /// Every supported dimension.
    pub const ALL: &'static [Dimension] = &[
        Dimension::Length,
        Dimension::Mass,
        Dimension::Speed,
        Dimension::Temperature,
    ];

    /// Capitalised dimension name.
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Length => "Length",
            Dimension::Mass => "Mass",
            Dimension::Speed => "Speed",
            Dimension::Temperature => "Temperature",
        }
    }

    /// Canonical abbreviation of the base unit.
    pub const fn base_symbol(self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Mass => "kg",
            Dimension::Speed => "m/s",
            Dimension::Temperature => "K",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Speed => "speed",
            Dimension::Temperature => "temperature",
        };
        f.write_str(name)
    }
}
