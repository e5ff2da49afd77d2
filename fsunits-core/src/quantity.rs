//! Quantity type and its implementations.

use core::cmp::Ordering;
use core::fmt::{self, Write as _};
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::abbreviation::{abbreviation, parse_unit};
use crate::conversion::convert;
use crate::error::{QuantityError, Result};
use crate::format::{FormatSpec, Locale};
use crate::guard::{ensure_finite, saturate};
use crate::{QuantityValue, UnitKind};

/// A finite value paired with a unit of one dimension.
///
/// `Quantity<U>` never holds NaN or an infinity: every constructor runs the finite guard, arithmetic saturates at
/// `f64::MIN`/`f64::MAX`, and the `checked_*` variants report overflow instead.
///
/// Values keep the unit they were created in. Conversion is explicit ([`as_unit`](Self::as_unit),
/// [`to_unit`](Self::to_unit)); equality, ordering and hashing compare the values normalised to the base unit, so
/// `1 ft == 12 in` holds while the two keep their own units. Near the top of the `f64` range, where the base value
/// would overflow, the comparison happens in the coarser of the two units instead.
///
/// # Examples
///
/// ```rust
/// use fsunits_core::length::{Length, LengthUnit};
///
/// let run = Length::from_miles(1).unwrap();
/// let walk = Length::new(5000.0, LengthUnit::Foot).unwrap();
/// assert!(run > walk);
///
/// let total = run + walk;
/// assert_eq!(total.unit(), LengthUnit::Mile);
/// assert_eq!(total.feet(), 10_280.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: UnitKind> {
    value: f64,
    unit: U,
}

impl<U: UnitKind> Quantity<U> {
    /// Creates a quantity from an `f64`.
    ///
    /// Fails with [`QuantityError::InvalidValue`] for NaN or infinities.
    #[inline]
    pub fn new(value: f64, unit: U) -> Result<Self> {
        Ok(Self {
            value: ensure_finite(value)?,
            unit,
        })
    }

    /// Creates a quantity from any supported numeric input (integers, floats, [`Decimal`](rust_decimal::Decimal)).
    ///
    /// ```rust
    /// use fsunits_core::mass::{Mass, MassUnit};
    /// use rust_decimal::Decimal;
    ///
    /// let a = Mass::from(3_u8, MassUnit::Pound).unwrap();
    /// let b = Mass::from(Decimal::new(3, 0), MassUnit::Pound).unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn from(value: impl Into<QuantityValue>, unit: U) -> Result<Self> {
        Self::new(value.into().to_f64()?, unit)
    }

    /// Creates a quantity from a raw unit id.
    ///
    /// Fails with [`QuantityError::InvalidUnit`] when `id` is `0` or names no unit of this dimension.
    pub fn from_unit_id(value: impl Into<QuantityValue>, id: u32) -> Result<Self> {
        let unit = U::from_id(id).ok_or_else(|| QuantityError::invalid_unit(U::DIMENSION, id.to_string()))?;
        Self::from(value, unit)
    }

    /// Creates a quantity from unit text such as `"ft"` or `"knots"`.
    pub fn from_symbol(value: impl Into<QuantityValue>, symbol: &str) -> Result<Self> {
        Self::from(value, parse_unit::<U>(symbol)?)
    }

    /// Parses text such as `"5280 ft"`, `"12\""` or `"-40 °C"`.
    ///
    /// ```rust
    /// use fsunits_core::length::{Length, LengthUnit};
    ///
    /// let d = Length::parse("5280 ft").unwrap();
    /// assert_eq!(d.unit(), LengthUnit::Foot);
    /// assert_eq!(d.miles(), 1.0);
    /// assert!(Length::parse("5280 furlongs").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let (number, unit) = split_number(text.trim());
        let value: f64 = number
            .parse()
            .map_err(|_| QuantityError::InvalidNumber(number.to_owned()))?;
        Self::new(value, parse_unit::<U>(unit)?)
    }

    /// Raw value in [`unit`](Self::unit).
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit the value is expressed in.
    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Base unit of the dimension.
    #[inline]
    pub fn base_unit() -> U {
        U::BASE
    }

    /// Zero in the base unit.
    #[inline]
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            unit: U::BASE,
        }
    }

    /// Smallest representable quantity, in the base unit.
    #[inline]
    pub fn min_value() -> Self {
        Self {
            value: f64::MIN,
            unit: U::BASE,
        }
    }

    /// Largest representable quantity, in the base unit.
    #[inline]
    pub fn max_value() -> Self {
        Self {
            value: f64::MAX,
            unit: U::BASE,
        }
    }

    /// Every unit of the dimension.
    #[inline]
    pub fn all_units() -> &'static [U] {
        U::ALL
    }

    /// The value converted into `target`.
    #[inline]
    pub fn as_unit(&self, target: U) -> f64 {
        convert(self.value, self.unit, target)
    }

    /// The same quantity re-expressed in `target`.
    ///
    /// A result beyond the `f64` range saturates.
    #[inline]
    pub fn to_unit(&self, target: U) -> Self {
        Self {
            value: saturate(self.as_unit(target)),
            unit: target,
        }
    }

    /// The value in the base unit.
    #[inline]
    pub fn base_value(&self) -> f64 {
        self.as_unit(U::BASE)
    }

    /// Absolute value, in the same unit.
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit,
        }
    }

    /// `true` if the raw value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// `-1.0`, `0.0` or `1.0` following the sign of the raw value.
    #[inline]
    pub fn signum(&self) -> f64 {
        if self.value == 0.0 {
            0.0
        } else {
            self.value.signum()
        }
    }

    /// Sum in the left unit, or [`QuantityError::InvalidValue`] on overflow.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        Self::new(self.value + rhs.as_unit(self.unit), self.unit)
    }

    /// Difference in the left unit, or [`QuantityError::InvalidValue`] on overflow.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        Self::new(self.value - rhs.as_unit(self.unit), self.unit)
    }

    /// Scaled quantity, or [`QuantityError::InvalidValue`] on overflow or a non-finite factor.
    pub fn checked_mul(self, factor: f64) -> Result<Self> {
        Self::new(self.value * factor, self.unit)
    }

    /// Divided quantity, or [`QuantityError::InvalidValue`] on division by zero or a non-finite divisor.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        Self::new(self.value / divisor, self.unit)
    }

    /// Formats with a specifier such as `"G"`, `"F2"` or `"E3"` using the invariant locale.
    ///
    /// ```rust
    /// use fsunits_core::length::Length;
    ///
    /// let d = Length::from_feet(5280).unwrap();
    /// assert_eq!(d.format("F2").unwrap(), "5280.00 ft");
    /// assert_eq!(d.format("E3").unwrap(), "5.280E+003 ft");
    /// assert!(d.format("X").is_err());
    /// ```
    pub fn format(&self, spec: &str) -> Result<String> {
        self.to_string_with(spec, &Locale::INVARIANT)
    }

    /// Formats with a specifier and a locale.
    pub fn to_string_with(&self, spec: &str, locale: &Locale) -> Result<String> {
        let spec: FormatSpec = spec.parse()?;
        Ok(self.format_with(spec, locale))
    }

    /// Formats with an already parsed specifier.
    pub fn format_with(&self, spec: FormatSpec, locale: &Locale) -> String {
        format!("{} {}", spec.format_value(self.value, locale), abbreviation(self.unit))
    }
}

/// Splits `"1.5e3 km"` into the leading number and the remaining unit text.
fn split_number(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    while let Some(&byte) = bytes.get(end) {
        let accepted = match byte {
            b'0'..=b'9' => {
                seen_digit = true;
                true
            }
            b'.' => true,
            b'+' | b'-' => end == 0 || matches!(bytes[end - 1], b'e' | b'E'),
            b'e' | b'E' => {
                seen_digit && matches!(bytes.get(end + 1), Some(b'0'..=b'9' | b'+' | b'-'))
            }
            _ => false,
        };
        if !accepted {
            break;
        }
        end += 1;
    }
    text.split_at(end)
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitKind> Add for Quantity<U> {
    type Output = Self;

    /// Sum in the left operand's unit; overflow saturates.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: saturate(self.value + rhs.as_unit(self.unit)),
            unit: self.unit,
        }
    }
}

impl<U: UnitKind> Sub for Quantity<U> {
    type Output = Self;

    /// Difference in the left operand's unit; overflow saturates.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: saturate(self.value - rhs.as_unit(self.unit)),
            unit: self.unit,
        }
    }
}

impl<U: UnitKind> Mul<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            value: saturate(self.value * rhs),
            unit: self.unit,
        }
    }
}

impl<U: UnitKind> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: UnitKind> Div<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self {
            value: saturate(self.value / rhs),
            unit: self.unit,
        }
    }
}

impl<U: UnitKind> Div for Quantity<U> {
    type Output = f64;

    /// Dimensionless ratio of the two base-unit values.
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.base_value() / rhs.base_value()
    }
}

impl<U: UnitKind> Neg for Quantity<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl<U: UnitKind> Sum for Quantity<U> {
    /// Sums in the first element's unit; an empty iterator yields [`Quantity::zero`].
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|acc, q| acc + q).unwrap_or_else(Self::zero)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison and hashing
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitKind> Quantity<U> {
    /// Three-way comparison of the underlying quantities.
    ///
    /// Same-unit operands compare raw values. Otherwise the base-unit values are compared; when either of those
    /// overflows, the operand in the finer unit is converted into the coarser unit instead, which never overflows.
    fn compare(&self, other: &Self) -> Ordering {
        if self.unit == other.unit {
            return total(self.value, other.value);
        }
        let (left, right) = (self.base_value(), other.base_value());
        if left.is_finite() && right.is_finite() {
            return total(left, right);
        }
        let coarser = |unit: U| (unit.conversion().scale(), unit.id());
        if coarser(self.unit) >= coarser(other.unit) {
            total(self.value, other.as_unit(self.unit))
        } else {
            total(self.as_unit(other.unit), other.value)
        }
    }
}

const HASH_CEILING: f64 = f64::MAX / 2.0;

// finite inputs never convert to NaN
fn total(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl<U: UnitKind> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<U: UnitKind> Eq for Quantity<U> {}

impl<U: UnitKind> PartialOrd for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: UnitKind> Ord for Quantity<U> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<U: UnitKind> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let base = self.base_value();
        // near or past overflow, equality falls back to unit conversion: one bucket per sign
        let base = if base.abs() >= HASH_CEILING {
            f64::MAX.copysign(base)
        } else if base == 0.0 {
            // -0.0 == 0.0
            0.0
        } else {
            base
        };
        base.to_bits().hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

impl<U: UnitKind> fmt::Display for Quantity<U> {
    /// General format (`"5280 ft"`); a precision (`{:.2}`) switches to fixed-point.
    ///
    /// Width, fill and alignment pad the whole text, left-aligned by default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = match f.precision() {
            Some(precision) => FormatSpec::fixed(precision),
            None => FormatSpec::GENERAL,
        };
        let text = self.format_with(spec, &Locale::INVARIANT);
        // `Formatter::pad` would read the precision as a truncation length
        let padding = f.width().unwrap_or(0).saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl<U: UnitKind> FromStr for Quantity<U> {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serialises as `{"value": 5280.0, "unit": "ft"}`.
#[cfg(feature = "serde")]
impl<U: UnitKind> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", abbreviation(self.unit))?;
        state.end()
    }
}

/// Accepts `{"value": .., "unit": ..}` where `unit` is any registered abbreviation or unit name; the finite guard
/// applies.
#[cfg(feature = "serde")]
impl<'de, U: UnitKind> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: UnitKind> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a {} quantity with value and unit fields", U::DIMENSION)
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let unit = unit.ok_or_else(|| de::Error::missing_field("unit"))?;
                let unit = parse_unit::<U>(&unit).map_err(de::Error::custom)?;
                Quantity::new(value, unit).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
