//! Unit kinds: closed, per-dimension unit enums.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::{Conversion, Dimension};

/// A closed set of units that share one [`Dimension`].
///
/// Implemented by the unit enums in [`units`](crate::units) through `#[derive(UnitKind)]`; the trait is sealed because
/// the process-wide abbreviation table only knows about those enums.
///
/// Raw ids start at `1`; `0` is reserved for "undefined" and never maps to a unit.
///
/// ```rust
/// use fsunits_core::UnitKind;
/// use fsunits_core::length::LengthUnit;
///
/// assert_eq!(LengthUnit::BASE, LengthUnit::Metre);
/// assert_eq!(LengthUnit::from_id(LengthUnit::Foot.id()), Some(LengthUnit::Foot));
/// assert_eq!(LengthUnit::from_id(0), None);
/// assert_eq!(LengthUnit::Foot.symbols(), &["ft", "'", "′"]);
/// ```
pub trait UnitKind:
    crate::sealed::Sealed + Copy + Eq + Hash + Debug + Display + Send + Sync + 'static
{
    /// Dimension shared by every unit of this kind.
    const DIMENSION: Dimension;

    /// The unit with scale `1` and offset `0`.
    const BASE: Self;

    /// Every unit, in id order.
    const ALL: &'static [Self];

    /// Stable raw id (never `0`).
    fn id(self) -> u32;

    /// Unit with the given raw id.
    fn from_id(id: u32) -> Option<Self>;

    /// Variant name, e.g. `"NauticalMile"`.
    fn name(self) -> &'static str;

    /// Registered abbreviations, canonical first. Never empty.
    fn symbols(self) -> &'static [&'static str];

    /// Conversion to the base unit.
    fn conversion(self) -> Conversion;

    /// `true` for the base unit.
    #[inline]
    fn is_base(self) -> bool {
        self == Self::BASE
    }
}
