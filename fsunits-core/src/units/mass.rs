//! Mass units.
//!
//! The base unit is [`MassUnit::Kilogram`]. Avoirdupois units derive from the international pound
//! (`0.45359237 kg` exactly): ounce `lb / 16`, stone `14 lb`, short ton `2000 lb`, long ton `2240 lb`.
//!
//! ```rust
//! use fsunits_core::mass::Mass;
//!
//! let m = Mass::from_pounds(2240).unwrap();
//! assert_eq!(m.long_tons(), 1.0);
//! ```

use crate::{Quantity, UnitKind};

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit_kind(dimension = Mass)]
pub enum MassUnit {
    /// `1e-3 kg`
    #[unit(id = 1, scale = 0.001, symbols = ["g"])]
    Gram,
    /// Kilogram (base unit).
    #[unit(id = 2, base, symbols = ["kg"])]
    Kilogram,
    /// Imperial long ton, `2240 lb`.
    #[unit(id = 3, scale = 1016.0469088, symbols = ["long tn"])]
    LongTon,
    /// `1e-6 kg`
    #[unit(id = 4, scale = 1e-6, symbols = ["mg"])]
    Milligram,
    /// Avoirdupois ounce, `lb / 16`.
    #[unit(id = 5, scale = 0.028349523125, symbols = ["oz"])]
    Ounce,
    /// International avoirdupois pound.
    #[unit(id = 6, scale = 0.45359237, symbols = ["lb", "lbs", "lbm"])]
    Pound,
    /// US short ton, `2000 lb`.
    #[unit(id = 7, scale = 907.18474, symbols = ["t (short)", "short tn", "ST"])]
    ShortTon,
    /// Stone, `14 lb`.
    #[unit(id = 8, scale = 6.35029318, symbols = ["st"])]
    Stone,
    /// Metric tonne, `1000 kg`.
    #[unit(id = 9, scale = 1000, symbols = ["t"])]
    Tonne,
}

/// A mass.
pub type Mass = Quantity<MassUnit>;

crate::impl_named_units!(MassUnit {
    Gram => from_grams, grams;
    Kilogram => from_kilograms, kilograms;
    LongTon => from_long_tons, long_tons;
    Milligram => from_milligrams, milligrams;
    Ounce => from_ounces, ounces;
    Pound => from_pounds, pounds;
    ShortTon => from_short_tons, short_tons;
    Stone => from_stones, stones;
    Tonne => from_tonnes, tonnes;
});
