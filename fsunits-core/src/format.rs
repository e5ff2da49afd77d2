//! Numeric format specifiers and locales.
//!
//! A specifier is a letter followed by an optional precision of at most two digits:
//!
//! | Spec | Meaning | Default precision |
//! |------|---------|-------------------|
//! | `G`/`g`  | general: shortest round-trip (scientific outside `1E-04..1E+15`), or `n` significant digits | shortest |
//! | `F`/`f`  | fixed-point with `n` decimals | 2 |
//! | `E`/`e`  | scientific with `n` mantissa decimals and a signed three-digit exponent | 6 |
//!
//! ```rust
//! use fsunits_core::{FormatSpec, Locale};
//!
//! let spec: FormatSpec = "E3".parse().unwrap();
//! assert_eq!(spec.format_value(5280.0, &Locale::INVARIANT), "5.280E+003");
//!
//! let comma = Locale::new(',');
//! assert_eq!(FormatSpec::fixed(1).format_value(0.26, &comma), "0,3");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::{QuantityError, Result};

/// Number style selected by a [`FormatSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `G`
    General,
    /// `F`
    Fixed,
    /// `E`
    Scientific,
}

/// A parsed numeric format specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    kind: FormatKind,
    precision: Option<usize>,
    lowercase: bool,
}

impl FormatSpec {
    /// Largest precision accepted by [`FormatSpec::parse`].
    pub const MAX_PRECISION: usize = 99;

    /// Shortest round-trip representation.
    pub const GENERAL: Self = Self {
        kind: FormatKind::General,
        precision: None,
        lowercase: false,
    };

    /// General format with `digits` significant digits.
    pub const fn general(digits: usize) -> Self {
        Self {
            kind: FormatKind::General,
            precision: Some(digits),
            lowercase: false,
        }
    }

    /// Fixed-point with `decimals` digits after the separator.
    pub const fn fixed(decimals: usize) -> Self {
        Self {
            kind: FormatKind::Fixed,
            precision: Some(decimals),
            lowercase: false,
        }
    }

    /// Scientific with `decimals` mantissa digits after the separator.
    pub const fn scientific(decimals: usize) -> Self {
        Self {
            kind: FormatKind::Scientific,
            precision: Some(decimals),
            lowercase: false,
        }
    }

    /// Parses a specifier; the empty string is general format.
    ///
    /// Fails with [`QuantityError::UnsupportedFormat`] for any other letter or a precision above
    /// [`MAX_PRECISION`](Self::MAX_PRECISION).
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let unsupported = || QuantityError::UnsupportedFormat(spec.to_owned());

        let mut chars = trimmed.chars();
        let Some(letter) = chars.next() else {
            return Ok(Self::GENERAL);
        };
        let kind = match letter.to_ascii_uppercase() {
            'G' => FormatKind::General,
            'F' => FormatKind::Fixed,
            'E' => FormatKind::Scientific,
            _ => return Err(unsupported()),
        };

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            match digits.parse::<usize>() {
                Ok(precision) if precision <= Self::MAX_PRECISION => Some(precision),
                _ => return Err(unsupported()),
            }
        } else {
            return Err(unsupported());
        };

        Ok(Self {
            kind,
            precision,
            lowercase: letter.is_ascii_lowercase(),
        })
    }

    /// Selected style.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    /// Explicit precision, if any.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Renders `value` with this specifier and the locale's decimal separator.
    pub fn format_value(&self, value: f64, locale: &Locale) -> String {
        let text = match self.kind {
            FormatKind::General => general(value, self.precision, self.lowercase),
            FormatKind::Fixed => format!("{:.*}", self.precision.unwrap_or(2), value),
            FormatKind::Scientific => scientific(value, self.precision.unwrap_or(6), self.lowercase),
        };
        locale.localize(text)
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::GENERAL
    }
}

impl FromStr for FormatSpec {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match (self.kind, self.lowercase) {
            (FormatKind::General, false) => 'G',
            (FormatKind::General, true) => 'g',
            (FormatKind::Fixed, false) => 'F',
            (FormatKind::Fixed, true) => 'f',
            (FormatKind::Scientific, false) => 'E',
            (FormatKind::Scientific, true) => 'e',
        };
        match self.precision {
            Some(precision) => write!(f, "{}{}", letter, precision),
            None => write!(f, "{}", letter),
        }
    }
}

/// `m.mmmE+xxx` with a sign and at least three exponent digits.
fn scientific(value: f64, decimals: usize, lowercase: bool) -> String {
    let text = format!("{:.*e}", decimals, value);
    let (mantissa, exponent) = split_exponent(&text);
    let marker = if lowercase { 'e' } else { 'E' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}{}{:03}", mantissa, marker, sign, exponent.unsigned_abs())
}

/// `%g`-style general format; without precision the shortest round-trip text.
fn general(value: f64, digits: Option<usize>, lowercase: bool) -> String {
    if value == 0.0 {
        return format!("{}", value);
    }
    let Some(digits) = digits.filter(|&digits| digits > 0) else {
        let text = format!("{:e}", value);
        let (mantissa, exponent) = split_exponent(&text);
        return if exponent < -4 || exponent >= SHORTEST_DIGITS {
            with_exponent(mantissa, exponent, lowercase)
        } else {
            format!("{}", value)
        };
    };

    let text = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = split_exponent(&text);
    if exponent < -4 || exponent >= digits as i32 {
        with_exponent(trim_fraction(mantissa), exponent, lowercase)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

/// Exponent at which shortest general format switches to scientific notation.
const SHORTEST_DIGITS: i32 = 15;

/// `1.5E+03`: signed exponent of at least two digits.
fn with_exponent(mantissa: &str, exponent: i32, lowercase: bool) -> String {
    let marker = if lowercase { 'e' } else { 'E' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exponent.unsigned_abs())
}

/// Splits Rust's `1.5e3` exponent form into mantissa text and exponent.
fn split_exponent(text: &str) -> (&str, i32) {
    match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or_default()),
        None => (text, 0),
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Culture settings applied when rendering numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    decimal_separator: char,
}

impl Locale {
    /// `.` as decimal separator.
    pub const INVARIANT: Self = Self::new('.');

    /// A locale with the given decimal separator.
    pub const fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// Decimal separator.
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    fn localize(&self, text: String) -> String {
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', self.decimal_separator.encode_utf8(&mut [0; 4]))
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}
