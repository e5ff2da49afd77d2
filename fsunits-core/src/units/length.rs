//! Length units.
//!
//! The base unit is [`LengthUnit::Metre`]. Imperial units follow the international definitions (the inch is exactly
//! `0.0254 m`, the statute mile exactly `1609.344 m`) and the nautical mile is exactly `1852 m`.
//!
//! ```rust
//! use fsunits_core::length::{Length, LengthUnit};
//!
//! let d = Length::from_feet(5280).unwrap();
//! assert_eq!(d.miles(), 1.0);
//! assert_eq!(d.to_unit(LengthUnit::Mile).to_string(), "1 mi");
//! ```

use crate::{Quantity, UnitKind};

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit_kind(dimension = Length)]
pub enum LengthUnit {
    /// `1e-3 m`
    #[unit(id = 1, scale = 0.001, symbols = ["mm"])]
    Millimetre,
    /// `1e-2 m`
    #[unit(id = 2, scale = 0.01, symbols = ["cm"])]
    Centimetre,
    /// Metre (base unit).
    #[unit(id = 3, base, symbols = ["m"])]
    Metre,
    /// `1000 m`
    #[unit(id = 4, scale = 1000, symbols = ["km"])]
    Kilometre,
    /// International inch, `0.0254 m`.
    #[unit(id = 5, scale = 0.0254, symbols = ["in", "\"", "″"])]
    Inch,
    /// International foot, `0.3048 m`.
    #[unit(id = 6, scale = 0.3048, symbols = ["ft", "'", "′"])]
    Foot,
    /// International yard, `0.9144 m`.
    #[unit(id = 7, scale = 0.9144, symbols = ["yd"])]
    Yard,
    /// Statute mile, `1609.344 m`.
    #[unit(id = 8, scale = 1609.344, symbols = ["mi"])]
    Mile,
    /// Nautical mile, `1852 m`.
    #[unit(id = 9, scale = 1852, symbols = ["NM"])]
    NauticalMile,
}

/// A length.
pub type Length = Quantity<LengthUnit>;

crate::impl_named_units!(LengthUnit {
    Millimetre => from_millimetres, millimetres;
    Centimetre => from_centimetres, centimetres;
    Metre => from_metres, metres;
    Kilometre => from_kilometres, kilometres;
    Inch => from_inches, inches;
    Foot => from_feet, feet;
    Yard => from_yards, yards;
    Mile => from_miles, miles;
    NauticalMile => from_nautical_miles, nautical_miles;
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ids_are_stable_and_dense() {
        let ids: Vec<u32> = LengthUnit::ALL.iter().map(|u| u.id()).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        for unit in LengthUnit::ALL {
            assert_eq!(LengthUnit::from_id(unit.id()), Some(*unit));
        }
        assert_eq!(LengthUnit::from_id(0), None);
        assert_eq!(LengthUnit::from_id(10), None);
    }

    #[test]
    fn scales_match_definitions() {
        let expected = [
            (LengthUnit::Millimetre, 0.001),
            (LengthUnit::Centimetre, 0.01),
            (LengthUnit::Metre, 1.0),
            (LengthUnit::Kilometre, 1000.0),
            (LengthUnit::Inch, 0.0254),
            (LengthUnit::Foot, 0.3048),
            (LengthUnit::Yard, 0.9144),
            (LengthUnit::Mile, 1609.344),
            (LengthUnit::NauticalMile, 1852.0),
        ];
        for (unit, scale) in expected {
            assert_eq!(unit.conversion().scale(), scale, "{:?}", unit);
            assert_eq!(unit.conversion().offset(), 0.0);
        }
    }

    #[test]
    fn canonical_symbols() {
        assert_eq!(LengthUnit::Foot.to_string(), "ft");
        assert_eq!(LengthUnit::Inch.to_string(), "in");
        assert_eq!(LengthUnit::NauticalMile.to_string(), "NM");
        assert_eq!(LengthUnit::Metre.name(), "Metre");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Named factories and accessors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn feet_to_miles() {
        let d = Length::from_feet(5280).unwrap();
        assert_eq!(d.miles(), 1.0);
        assert_eq!(d.unit(), LengthUnit::Foot);
        assert_eq!(d.value(), 5280.0);
    }

    #[test]
    fn inches_and_feet() {
        assert_eq!(Length::from_inches(12).unwrap().feet(), 1.0);
        assert_eq!(Length::from_yards(1).unwrap().inches(), 36.0);
        assert_eq!(Length::from_feet(1).unwrap().metres(), 0.3048);
    }

    #[test]
    fn metric_ladder() {
        let km = Length::from_kilometres(1.5).unwrap();
        assert_eq!(km.metres(), 1500.0);
        assert_eq!(km.centimetres(), 150_000.0);
        assert_eq!(km.millimetres(), 1_500_000.0);
        assert_eq!(Length::from_millimetres(250).unwrap().centimetres(), 25.0);
    }

    #[test]
    fn nautical_mile() {
        let nm = Length::from_nautical_miles(1).unwrap();
        assert_eq!(nm.metres(), 1852.0);
        assert_relative_eq!(nm.miles(), 1.150_779_448_023_542_6, max_relative = 1e-15);
        assert_relative_eq!(nm.feet(), 6076.115_485_564_305, max_relative = 1e-15);
    }

    #[test]
    fn factories_reject_non_finite() {
        assert!(Length::from_feet(f64::NAN).is_err());
        assert!(Length::from_miles(f64::INFINITY).is_err());
        assert!(Length::from_metres(f32::NEG_INFINITY).is_err());
    }

    proptest! {
        #[test]
        fn prop_feet_inches_roundtrip(v in -1e9..1e9f64) {
            let back = Length::from_feet(v).unwrap().to_unit(LengthUnit::Inch).feet();
            prop_assert!((back - v).abs() <= 1e-12 * v.abs().max(1.0));
        }

        #[test]
        fn prop_integer_inches_are_exact_in_feet(n in -1_000_000i64..1_000_000) {
            let inches = Length::from_inches(n * 12).unwrap();
            prop_assert_eq!(inches.feet(), n as f64);
            prop_assert_eq!(inches, Length::from_feet(n).unwrap());
        }
    }
}
