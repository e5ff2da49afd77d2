//! Speed units.
//!
//! The base unit is [`SpeedUnit::MetrePerSecond`]. Every other unit is a length unit over a time unit, with its scale
//! written as that quotient (`km/h = 1000 / 3600`), so the imperial and nautical units inherit the exact foot, mile and
//! nautical-mile definitions from [`length`](crate::length).
//!
//! ```rust
//! use fsunits_core::speed::Speed;
//!
//! let s = Speed::from_kilometres_per_hour(36).unwrap();
//! assert_eq!(s.metres_per_second(), 10.0);
//! ```

use crate::{Quantity, UnitKind};

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[unit_kind(dimension = Speed)]
pub enum SpeedUnit {
    /// `ft/h`
    #[unit(id = 1, scale = 0.3048 / 3600, symbols = ["ft/h"])]
    FootPerHour,
    /// `ft/min`
    #[unit(id = 2, scale = 0.3048 / 60, symbols = ["ft/min"])]
    FootPerMinute,
    /// `ft/s`
    #[unit(id = 3, scale = 0.3048, symbols = ["ft/s"])]
    FootPerSecond,
    /// `km/h`
    #[unit(id = 4, scale = 1000 / 3600, symbols = ["km/h"])]
    KilometrePerHour,
    /// `km/min`
    #[unit(id = 5, scale = 1000 / 60, symbols = ["km/min"])]
    KilometrePerMinute,
    /// `km/s`
    #[unit(id = 6, scale = 1000, symbols = ["km/s"])]
    KilometrePerSecond,
    /// Knot, one nautical mile per hour.
    #[unit(id = 7, scale = 1852 / 3600, symbols = ["kn", "kt", "knot", "knots"])]
    Knot,
    /// `m/h`
    #[unit(id = 8, scale = 1 / 3600, symbols = ["m/h"])]
    MetrePerHour,
    /// `m/min`
    #[unit(id = 9, scale = 1 / 60, symbols = ["m/min"])]
    MetrePerMinute,
    /// Metre per second (base unit).
    #[unit(id = 10, base, symbols = ["m/s"])]
    MetrePerSecond,
    /// Statute mile per hour.
    #[unit(id = 11, scale = 1609.344 / 3600, symbols = ["mph"])]
    MilePerHour,
}

/// A speed.
pub type Speed = Quantity<SpeedUnit>;

crate::impl_named_units!(SpeedUnit {
    FootPerHour => from_feet_per_hour, feet_per_hour;
    FootPerMinute => from_feet_per_minute, feet_per_minute;
    FootPerSecond => from_feet_per_second, feet_per_second;
    KilometrePerHour => from_kilometres_per_hour, kilometres_per_hour;
    KilometrePerMinute => from_kilometres_per_minute, kilometres_per_minute;
    KilometrePerSecond => from_kilometres_per_second, kilometres_per_second;
    Knot => from_knots, knots;
    MetrePerHour => from_metres_per_hour, metres_per_hour;
    MetrePerMinute => from_metres_per_minute, metres_per_minute;
    MetrePerSecond => from_metres_per_second, metres_per_second;
    MilePerHour => from_miles_per_hour, miles_per_hour;
});
