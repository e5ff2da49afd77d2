//! Temperature units.
//!
//! Temperature is an affine scale: `K = °C + 273.15` and `K = (°F + 459.67) * 5/9`. The base unit is
//! [`TemperatureUnit::Kelvin`].
//!
//! ```rust
//! use fsunits_core::temperature::Temperature;
//!
//! let freezing = Temperature::from_celsius(0).unwrap();
//! assert_eq!(freezing.kelvin(), 273.15);
//! ```

use crate::{Quantity, UnitKind};

/// Units of thermodynamic temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit_kind(dimension = Temperature)]
pub enum TemperatureUnit {
    /// Degree Celsius.
    #[unit(id = 1, scale = 1, offset = 273.15, symbols = ["°C", "degC"])]
    Celsius,
    /// Degree Fahrenheit.
    #[unit(id = 2, scale = 5 / 9, offset = 459.67 * 5.0 / 9.0, symbols = ["°F", "degF"])]
    Fahrenheit,
    /// Kelvin (base unit).
    #[unit(id = 3, base, symbols = ["K"])]
    Kelvin,
}

/// A temperature.
pub type Temperature = Quantity<TemperatureUnit>;

crate::impl_named_units!(TemperatureUnit {
    Celsius => from_celsius, celsius;
    Fahrenheit => from_fahrenheit, fahrenheit;
    Kelvin => from_kelvin, kelvin;
});
