//! Unit-tagged length, mass, speed and temperature quantities.
//!
//! `fsunits` is the user-facing crate in this workspace. It re-exports the full API from `fsunits-core` together with
//! the predefined unit enums and their quantity aliases.
//!
//! A value is always a `Quantity<U>`: a finite `f64` plus a unit variant of `U`. The unit travels with the value,
//! conversion is explicit, and comparisons normalise through the base unit of the dimension.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add feet to knots).
//! - Rejects NaN and infinities at the boundary instead of propagating them.
//! - Parses and prints unit abbreviations (`"5280 ft"`, `"30 kn"`, `"-40 °C"`).
//!
//! # What this crate does not try to solve
//!
//! - Derived-unit algebra: there is no `Length / Time -> Speed`.
//! - Locale-aware formatting beyond the decimal separator.
//! - Units outside the length, mass, speed and temperature tables.
//!
//! # Quick start
//!
//! ```rust
//! use fsunits::{Length, LengthUnit, Speed, Temperature};
//!
//! let runway = Length::from_feet(5280).unwrap();
//! assert_eq!(runway.miles(), 1.0);
//! assert_eq!(runway.to_unit(LengthUnit::Mile).to_string(), "1 mi");
//!
//! let cruise = Speed::parse("450 kn").unwrap();
//! assert!(cruise > Speed::from_miles_per_hour(500).unwrap());
//!
//! let oat = Temperature::from_celsius(-56.5).unwrap();
//! assert_eq!(oat.format("F2").unwrap(), "-56.50 °C");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use fsunits::{Length, Mass};
//!
//! let d = Length::from_feet(1).unwrap();
//! let m = Mass::from_pounds(1).unwrap();
//! let _ = d + m; // cannot add a mass to a length
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension (also re-exported at the crate root):
//!
//! - `fsunits::length` (millimetres to nautical miles)
//! - `fsunits::mass` (milligrams to long tons)
//! - `fsunits::speed` (feet per hour to kilometres per second, knots, mph)
//! - `fsunits::temperature` (kelvin, Celsius, Fahrenheit)
//!
//! # Feature flags
//!
//! - `serde`: serialises quantities as `{"value": .., "unit": ".."}`.
//!
//! # Errors
//!
//! Every fallible call returns [`Result<T>`] with a [`QuantityError`]:
//!
//! - `InvalidValue`: NaN or infinity supplied, or a checked operation overflowed
//! - `InvalidNumber`: text did not start with a number
//! - `InvalidUnit`: unknown unit id or unit text
//! - `UnsupportedUnit`: a unit-erased conversion crossed dimensions
//! - `UnsupportedFormat`: a format specifier other than `G`, `F`, `E`
//! - `IncomparableType`: unit-erased quantities of different dimensions were compared or combined
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use fsunits_core::*;

pub use fsunits_core::units::length;
pub use fsunits_core::units::mass;
pub use fsunits_core::units::speed;
pub use fsunits_core::units::temperature;

pub use fsunits_core::units::length::*;
pub use fsunits_core::units::mass::*;
pub use fsunits_core::units::speed::*;
pub use fsunits_core::units::temperature::*;
