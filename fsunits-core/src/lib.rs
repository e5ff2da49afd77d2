//! Core types for finite, unit-tagged physical quantities.
//!
//! `fsunits-core` models a quantity as a finite `f64` paired with a runtime unit drawn from a closed, per-dimension
//! unit enum:
//!
//! - A *unit* is a variant of a [`UnitKind`] enum (e.g. [`length::LengthUnit::Foot`]).
//! - A value tagged with a unit is a [`Quantity<U>`]; `Length`, `Mass`, `Speed` and `Temperature` are aliases.
//! - Conversion goes through the dimension's base unit with an exact rational scale and an optional affine offset
//!   (see [`conversion`]).
//! - Unit text is handled by one process-wide abbreviation table ([`abbreviation`], [`parse_unit`]).
//!
//! Most users should depend on `fsunits` (the facade crate).
//!
//! # What this crate solves
//!
//! - Values are always finite: NaN and infinities are rejected at construction and arithmetic saturates.
//! - Quantities of different dimensions cannot be mixed through the typed API; the unit-erased [`AnyQuantity`]
//!   reports such mixes as errors.
//! - `1 ft == 12 in` is exact, and equality, ordering and hashing agree with each other.
//!
//! # What this crate does not try to solve
//!
//! - Derived dimensions or dimensional analysis (`m/s * s`).
//! - Unit systems beyond the four predefined dimensions.
//! - Culture-aware formatting beyond the decimal separator.
//!
//! # Quick start
//!
//! ```rust
//! use fsunits_core::length::{Length, LengthUnit};
//! use fsunits_core::temperature::Temperature;
//!
//! let d = Length::from_feet(5280).unwrap();
//! assert_eq!(d.miles(), 1.0);
//! assert_eq!(d, Length::from_miles(1).unwrap());
//! assert_eq!(d.to_unit(LengthUnit::Kilometre).format("F3").unwrap(), "1.609 km");
//!
//! assert_eq!(Temperature::from_celsius(0).unwrap().kelvin(), 273.15);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for quantities (`{"value": 5280.0, "unit": "ft"}`), unit enums,
//!   [`Dimension`], [`AnyUnit`] and [`AnyQuantity`].
//!
//! # Errors
//!
//! Fallible operations return [`Result<T>`] with a [`QuantityError`]. Errors are local and deterministic; nothing is
//! retried. The only log output is `debug` when the abbreviation table is built and `trace` when unit text is
//! rejected, through the [`log`] facade.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod abbreviation;
pub mod conversion;
mod dimension;
mod error;
mod format;
pub mod guard;
mod quantity;
pub mod registry;
mod unit;
mod value;

mod sealed {
    pub trait Sealed {}
}

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use abbreviation::{abbreviation, abbreviations, parse_unit, AbbreviationTable};
pub use conversion::Conversion;
pub use dimension::Dimension;
pub use error::{QuantityError, Result};
pub use format::{FormatKind, FormatSpec, Locale};
pub use quantity::Quantity;
pub use registry::{AnyQuantity, AnyUnit, UnitMeta};
pub use unit::UnitKind;
pub use value::QuantityValue;

/// Derive macro for unit enums inside this crate.
pub use fsunits_derive::UnitKind;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::length;
pub use units::mass;
pub use units::speed;
pub use units::temperature;
