//! Unit conversion model.
//!
//! Every unit is described by a [`Conversion`] relative to the base unit of its dimension:
//!
//! ```text
//! base = raw * scale + offset
//! raw  = (base - offset) / scale
//! ```
//!
//! `scale` is kept as an exact rational (`numerator / denominator`) so that conversions between commensurable
//! units stay exact: `12 in → ft` is computed as `12 * 1 / 12`, not as `12 * 0.0254 / 0.3048`. Length, mass and speed
//! are ratio scales (`offset == 0`); temperature units are affine.
//!
//! ```rust
//! use fsunits_core::conversion::convert;
//! use fsunits_core::length::LengthUnit;
//! use fsunits_core::temperature::TemperatureUnit;
//!
//! assert_eq!(convert(12.0, LengthUnit::Inch, LengthUnit::Foot), 1.0);
//! assert_eq!(convert(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin), 273.15);
//! ```

use crate::UnitKind;

/// How one unit relates to the base unit of its dimension.
///
/// # Invariants
///
/// - `numerator` and `denominator` are non-zero and reduced to lowest terms.
/// - `offset` is finite. The base unit is `Conversion::IDENTITY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    numerator: u64,
    denominator: u64,
    offset: f64,
}

impl Conversion {
    /// The base unit's conversion: scale 1, offset 0.
    pub const IDENTITY: Self = Self::new(1, 1, 0.0);

    /// Builds a conversion with `scale = numerator / denominator`.
    ///
    /// The fraction is reduced; a zero numerator or denominator is replaced by `1`.
    pub const fn new(numerator: u64, denominator: u64, offset: f64) -> Self {
        let numerator = if numerator == 0 { 1 } else { numerator };
        let denominator = if denominator == 0 { 1 } else { denominator };
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
            offset,
        }
    }

    /// A purely multiplicative conversion.
    pub const fn linear(numerator: u64, denominator: u64) -> Self {
        Self::new(numerator, denominator, 0.0)
    }

    /// Scale numerator.
    pub const fn numerator(self) -> u64 {
        self.numerator
    }

    /// Scale denominator.
    pub const fn denominator(self) -> u64 {
        self.denominator
    }

    /// Scale factor to the base unit, as a float.
    pub fn scale(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Additive offset to the base unit.
    pub const fn offset(self) -> f64 {
        self.offset
    }

    /// `true` when the unit is a pure multiple of the base unit.
    pub fn is_linear(self) -> bool {
        self.offset == 0.0
    }

    /// `raw * scale + offset`
    #[inline]
    pub fn to_base(self, raw: f64) -> f64 {
        ratio(raw, self.numerator as f64, self.denominator as f64) + self.offset
    }

    /// `(base - offset) / scale`
    #[inline]
    pub fn from_base(self, base: f64) -> f64 {
        ratio(base - self.offset, self.denominator as f64, self.numerator as f64)
    }

    /// Converts `value` from this unit into `target`.
    ///
    /// Two linear units are related by a single reduced ratio; affine units go through the base unit.
    pub fn convert_to(self, value: f64, target: Conversion) -> f64 {
        if self == target {
            return value;
        }
        if self.is_linear() && target.is_linear() {
            let numerator = self.numerator as u128 * target.denominator as u128;
            let denominator = self.denominator as u128 * target.numerator as u128;
            let divisor = gcd_wide(numerator, denominator);
            return ratio(value, (numerator / divisor) as f64, (denominator / divisor) as f64);
        }
        target.from_base(self.to_base(value))
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `value * numerator / denominator`, dividing first when the product alone would overflow.
#[inline]
fn ratio(value: f64, numerator: f64, denominator: f64) -> f64 {
    let product = value * numerator;
    if product.is_finite() {
        product / denominator
    } else {
        value / denominator * numerator
    }
}

fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Value of `value` (expressed in `from`) in the base unit.
#[inline]
pub fn to_base<U: UnitKind>(value: f64, from: U) -> f64 {
    from.conversion().to_base(value)
}

/// Value of `base` (expressed in the base unit) in `to`.
#[inline]
pub fn from_base<U: UnitKind>(base: f64, to: U) -> f64 {
    to.conversion().from_base(base)
}

/// Converts `value` from `from` into `to`.
///
/// Same-unit conversion returns `value` untouched.
#[inline]
pub fn convert<U: UnitKind>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    from.conversion().convert_to(value, to.conversion())
}
