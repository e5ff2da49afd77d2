//! Unit abbreviations and unit-text parsing.
//!
//! All unit enums register their symbols in one process-wide [`AbbreviationTable`], built on first use and read-only
//! afterwards, so lookups are safe from any thread without locking.
//!
//! Parsing tries an exact (case-sensitive) match against every registered abbreviation and variant name first, then a
//! case-insensitive match that is accepted only when it names a single unit. That keeps `"st"` (stone) and `"ST"`
//! (short ton) distinct while still accepting `"KM"` or `"knots"`.
//!
//! ```rust
//! use fsunits_core::{abbreviation, parse_unit};
//! use fsunits_core::mass::MassUnit;
//! use fsunits_core::speed::SpeedUnit;
//!
//! assert_eq!(abbreviation(SpeedUnit::Knot), "kn");
//! assert_eq!(parse_unit::<SpeedUnit>("knots"), Ok(SpeedUnit::Knot));
//! assert_eq!(parse_unit::<MassUnit>("ST"), Ok(MassUnit::ShortTon));
//! assert_eq!(parse_unit::<MassUnit>("st"), Ok(MassUnit::Stone));
//! assert!(parse_unit::<MassUnit>("St").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::error::{QuantityError, Result};
use crate::length::LengthUnit;
use crate::mass::MassUnit;
use crate::speed::SpeedUnit;
use crate::temperature::TemperatureUnit;
use crate::{Dimension, UnitKind};

static TABLE: OnceCell<AbbreviationTable> = OnceCell::new();

/// Symbol and alias lookup for every registered unit.
#[derive(Debug, Default)]
pub struct AbbreviationTable {
    symbols: HashMap<Dimension, HashMap<u32, &'static [&'static str]>>,
    exact: HashMap<Dimension, HashMap<&'static str, u32>>,
    /// Lower-cased alias to unit id; `None` when two units share the folded spelling.
    folded: HashMap<Dimension, HashMap<String, Option<u32>>>,
}

impl AbbreviationTable {
    /// The process-wide table.
    pub fn global() -> &'static AbbreviationTable {
        TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut table = Self::default();
        table.register::<LengthUnit>();
        table.register::<MassUnit>();
        table.register::<SpeedUnit>();
        table.register::<TemperatureUnit>();
        log::debug!(
            "abbreviation table ready: {} units, {} aliases",
            table.len(),
            table.exact.values().map(HashMap::len).sum::<usize>()
        );
        table
    }

    fn register<U: UnitKind>(&mut self) {
        let dimension = U::DIMENSION;
        let symbols = self.symbols.entry(dimension).or_default();
        let exact = self.exact.entry(dimension).or_default();
        let folded = self.folded.entry(dimension).or_default();

        for &unit in U::ALL {
            let id = unit.id();
            symbols.insert(id, unit.symbols());

            for alias in unit.symbols().iter().copied().chain(Some(unit.name())) {
                if let Some(previous) = exact.insert(alias, id) {
                    if previous != id {
                        log::warn!("{} alias {:?} registered by two units", dimension, alias);
                    }
                }
                folded
                    .entry(alias.to_lowercase())
                    .and_modify(|slot| {
                        if *slot != Some(id) {
                            *slot = None;
                        }
                    })
                    .or_insert(Some(id));
            }
        }
    }

    /// Number of registered units across all dimensions.
    pub fn len(&self) -> usize {
        self.symbols.values().map(HashMap::len).sum()
    }

    /// `true` if no unit is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All abbreviations of a unit, canonical first.
    pub fn symbols(&self, dimension: Dimension, id: u32) -> Option<&'static [&'static str]> {
        self.symbols.get(&dimension)?.get(&id).copied()
    }

    /// Canonical abbreviation of a unit.
    pub fn canonical(&self, dimension: Dimension, id: u32) -> Option<&'static str> {
        self.symbols(dimension, id)?.first().copied()
    }

    /// Resolves unit text to a unit id within `dimension`.
    pub fn lookup(&self, dimension: Dimension, text: &str) -> Option<u32> {
        let text = text.trim();
        if let Some(&id) = self.exact.get(&dimension).and_then(|aliases| aliases.get(text)) {
            return Some(id);
        }
        self.folded
            .get(&dimension)?
            .get(text.to_lowercase().as_str())
            .copied()
            .flatten()
    }
}

/// Canonical abbreviation of `unit`, e.g. `"ft"`.
pub fn abbreviation<U: UnitKind>(unit: U) -> &'static str {
    AbbreviationTable::global()
        .canonical(U::DIMENSION, unit.id())
        .unwrap_or(unit.name())
}

/// Every abbreviation registered for `unit`, canonical first.
pub fn abbreviations<U: UnitKind>(unit: U) -> &'static [&'static str] {
    AbbreviationTable::global()
        .symbols(U::DIMENSION, unit.id())
        .unwrap_or_else(|| unit.symbols())
}

/// Parses unit text (an abbreviation, alias or variant name) into a unit of `U`.
///
/// Fails with [`QuantityError::InvalidUnit`] when the text matches nothing, or only matches case-insensitively and
/// that match is ambiguous.
pub fn parse_unit<U: UnitKind>(text: &str) -> Result<U> {
    AbbreviationTable::global()
        .lookup(U::DIMENSION, text)
        .and_then(U::from_id)
        .ok_or_else(|| {
            log::trace!("rejected {} unit text {:?}", U::DIMENSION, text);
            QuantityError::invalid_unit(U::DIMENSION, text.trim())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn every_unit_has_a_canonical_abbreviation() {
        let table = AbbreviationTable::global();
        assert_eq!(table.len(), 9 + 9 + 11 + 3);
        for unit in LengthUnit::ALL {
            assert_eq!(abbreviation(*unit), unit.symbols()[0]);
        }
        for unit in TemperatureUnit::ALL {
            assert!(!abbreviations(*unit).is_empty());
        }
    }

    #[test]
    fn canonical_abbreviations() {
        assert_eq!(abbreviation(LengthUnit::Foot), "ft");
        assert_eq!(abbreviation(LengthUnit::NauticalMile), "NM");
        assert_eq!(abbreviation(MassUnit::LongTon), "long tn");
        assert_eq!(abbreviation(SpeedUnit::MilePerHour), "mph");
        assert_eq!(abbreviation(TemperatureUnit::Celsius), "°C");
        assert_eq!(abbreviations(LengthUnit::Inch), &["in", "\"", "″"]);
    }

    #[test]
    fn exact_aliases_parse() {
        assert_eq!(parse_unit::<LengthUnit>("'"), Ok(LengthUnit::Foot));
        assert_eq!(parse_unit::<LengthUnit>("″"), Ok(LengthUnit::Inch));
        assert_eq!(parse_unit::<MassUnit>("lbs"), Ok(MassUnit::Pound));
        assert_eq!(parse_unit::<MassUnit>("t (short)"), Ok(MassUnit::ShortTon));
        assert_eq!(parse_unit::<MassUnit>("t"), Ok(MassUnit::Tonne));
        assert_eq!(parse_unit::<SpeedUnit>("kt"), Ok(SpeedUnit::Knot));
        assert_eq!(parse_unit::<TemperatureUnit>("degF"), Ok(TemperatureUnit::Fahrenheit));
    }

    #[test]
    fn variant_names_parse() {
        assert_eq!(parse_unit::<LengthUnit>("NauticalMile"), Ok(LengthUnit::NauticalMile));
        assert_eq!(parse_unit::<SpeedUnit>("metrepersecond"), Ok(SpeedUnit::MetrePerSecond));
        assert_eq!(parse_unit::<TemperatureUnit>("kelvin"), Ok(TemperatureUnit::Kelvin));
    }

    #[test]
    fn case_folding_only_when_unambiguous() {
        assert_eq!(parse_unit::<LengthUnit>("KM"), Ok(LengthUnit::Kilometre));
        assert_eq!(parse_unit::<LengthUnit>("nm"), Ok(LengthUnit::NauticalMile));
        assert_eq!(parse_unit::<MassUnit>("KG"), Ok(MassUnit::Kilogram));
        assert_eq!(parse_unit::<MassUnit>("st"), Ok(MassUnit::Stone));
        assert_eq!(parse_unit::<MassUnit>("ST"), Ok(MassUnit::ShortTon));
        assert!(parse_unit::<MassUnit>("St").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_unit::<LengthUnit>("  mi "), Ok(LengthUnit::Mile));
    }

    #[test]
    fn unknown_text_is_an_invalid_unit() {
        assert_eq!(
            parse_unit::<LengthUnit>("furlong"),
            Err(QuantityError::InvalidUnit {
                dimension: Dimension::Length,
                unit: "furlong".into()
            })
        );
        // a symbol from another dimension does not leak across
        assert!(parse_unit::<LengthUnit>("kg").is_err());
        assert!(parse_unit::<SpeedUnit>("").is_err());
    }

    #[test]
    fn unit_enums_implement_from_str() {
        assert_eq!("ft/s".parse::<SpeedUnit>(), Ok(SpeedUnit::FootPerSecond));
        assert!("parsec".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn table_is_built_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let table = AbbreviationTable::global() as *const AbbreviationTable as usize;
                    assert_eq!(abbreviation(MassUnit::Pound), "lb");
                    table
                })
            })
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
