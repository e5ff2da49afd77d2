//! Integration-level tests for the `fsunits` facade crate.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use fsunits::conversion::{convert, to_base};
use fsunits::registry::{self, AnyQuantity, AnyUnit};
use fsunits::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests per dimension
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn smoke_test_length() {
    let km = Length::from_kilometres(1).unwrap();
    assert_eq!(km.metres(), 1000.0);
    assert_abs_diff_eq!(km.nautical_miles(), 0.539_956_803_455_723_5, epsilon = 1e-15);
}

#[test]
fn smoke_test_mass() {
    let kg = Mass::from_kilograms(1).unwrap();
    assert_eq!(format!("{:.2}", kg.to_unit(MassUnit::Pound)), "2.20 lb");
    assert_eq!(kg.grams(), 1000.0);
}

#[test]
fn smoke_test_speed() {
    let v = Speed::from_knots(1).unwrap();
    assert_relative_eq!(v.metres_per_second(), 1852.0 / 3600.0, max_relative = 1e-15);
    assert_relative_eq!(v.kilometres_per_hour(), 1.852, max_relative = 1e-15);
}

#[test]
fn smoke_test_temperature() {
    assert_eq!(Temperature::from_celsius(0).unwrap().kelvin(), 273.15);
    assert_abs_diff_eq!(Temperature::from_fahrenheit(-40).unwrap().celsius(), -40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(Temperature::from_celsius(100).unwrap().fahrenheit(), 212.0, epsilon = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn feet_to_miles() {
    let runway = Length::from_feet(5280).unwrap();
    assert_eq!(format!("{:.2}", runway.miles()), "1.00");
    assert_eq!(runway.to_unit(LengthUnit::Mile).to_string(), "1 mi");
}

#[test]
fn equality_and_ordering_ignore_the_unit() {
    assert_eq!(Length::from_feet(1).unwrap(), Length::from_inches(12).unwrap());
    assert!(Length::from_miles(1).unwrap() > Length::from_feet(5000).unwrap());
    assert_eq!(Mass::from_pounds(14).unwrap(), Mass::from_stones(1).unwrap());
    assert_eq!(Speed::from_kilometres_per_hour(3.6).unwrap(), Speed::from_metres_per_second(1).unwrap());
}

#[test]
fn addition_keeps_the_left_unit() {
    let sum = Length::from_feet(1).unwrap() + Length::from_metres(1).unwrap();
    assert_eq!(sum.unit(), LengthUnit::Foot);
    assert_relative_eq!(sum.value(), 1.0 + 1.0 / 0.3048, max_relative = 1e-15);

    let reversed = Length::from_metres(1).unwrap() + Length::from_feet(1).unwrap();
    assert_eq!(reversed.unit(), LengthUnit::Metre);
    assert_relative_eq!(sum.metres(), reversed.metres(), max_relative = 1e-15);
}

#[test]
fn guard_rejects_non_finite_input() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(Length::from_feet(bad), Err(QuantityError::InvalidValue { .. })));
        assert!(matches!(
            Temperature::new(bad, TemperatureUnit::Kelvin),
            Err(QuantityError::InvalidValue { .. })
        ));
    }
}

#[test]
fn raw_unit_ids() {
    assert!(matches!(Length::from_unit_id(5, 0), Err(QuantityError::InvalidUnit { .. })));
    assert!(matches!(Mass::from_unit_id(5, 10), Err(QuantityError::InvalidUnit { .. })));
    assert_eq!(Length::from_unit_id(5280, 6).unwrap().unit(), LengthUnit::Foot);
    assert_eq!(Speed::from_unit_id(250, 7).unwrap().unit(), SpeedUnit::Knot);
}

#[test]
fn hash_agrees_with_equality() {
    let a = Length::from_feet(1).unwrap();
    let b = Length::from_inches(12).unwrap();
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&Length::zero()), hash_of(&Length::new(-0.0, LengthUnit::Mile).unwrap()));

    let set: HashSet<Length> = [a, b, Length::from_yards(1).unwrap().to_unit(LengthUnit::Foot) / 3.0]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn min_max_and_clamp_come_from_ord() {
    let low = Speed::from_knots(120).unwrap();
    let high = Speed::from_miles_per_hour(300).unwrap();
    assert_eq!(low.max(high), high);
    assert_eq!(high.min(low), low);
    let fast = Speed::from_kilometres_per_hour(900).unwrap();
    assert_eq!(fast.clamp(low, high), high);
}

#[test]
fn registry_extremes() {
    assert_eq!(Length::base_unit(), LengthUnit::Metre);
    assert_eq!(Mass::base_unit(), MassUnit::Kilogram);
    assert_eq!(Speed::base_unit(), SpeedUnit::MetrePerSecond);
    assert_eq!(Temperature::base_unit(), TemperatureUnit::Kelvin);
    assert!(Mass::zero().is_zero());
    assert_eq!(Length::max_value().value(), f64::MAX);
    assert_eq!(Length::min_value().value(), f64::MIN);
    assert_eq!(Speed::all_units().len(), 11);
}

#[test]
fn overflow_saturates_or_fails() {
    let big = Length::max_value();
    assert_eq!((big * 2.0).value(), f64::MAX);
    assert_eq!((-big * 2.0).value(), f64::MIN);
    assert!(big.checked_mul(2.0).is_err());
    assert!(big.checked_add(big).is_err());
    assert!(Length::from_feet(1).unwrap().checked_div(0.0).is_err());
}

#[test]
fn decimal_input() {
    let fuel = Mass::from_pounds(Decimal::new(1_5, 1)).unwrap();
    assert_eq!(fuel, Mass::from_pounds(1.5).unwrap());
    assert_eq!(fuel.to_string(), "1.5 lb");

    let leg = Length::from(Decimal::new(2_640, 0), LengthUnit::Foot).unwrap();
    assert_eq!(leg.miles(), 0.5);
    assert_eq!(Speed::from_unit_id(Decimal::new(450, 0), SpeedUnit::Knot.id()).unwrap().knots(), 450.0);
    assert_eq!(
        QuantityValue::from(Decimal::new(-565, 1)).as_decimal().unwrap(),
        Decimal::new(-565, 1)
    );
}

#[test]
fn values_near_the_top_of_the_range() {
    let ounces = Mass::new(1e301, MassUnit::Ounce).unwrap();
    assert_relative_eq!(ounces.kilograms(), 2.834_952_312_5e299, max_relative = 1e-15);
    assert_relative_eq!(ounces.pounds(), 6.25e299, max_relative = 1e-15);

    let far = Length::new(f64::MAX, LengthUnit::Mile).unwrap();
    assert!(far > Length::max_value());
    assert!(far < Length::new(f64::MAX, LengthUnit::NauticalMile).unwrap());
    assert_relative_eq!(far.nautical_miles(), f64::MAX / 1.852 * 1.609_344, max_relative = 1e-15);

    let a = Length::new(1e306, LengthUnit::Kilometre).unwrap();
    let b = Length::new(2e306, LengthUnit::Kilometre).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.max(b), b);
}

#[test]
fn max_value_converted_and_compared() {
    let max = Mass::max_value();
    for &unit in MassUnit::ALL {
        let converted = max.to_unit(unit);
        assert!(converted.value().is_finite());
        assert!(converted <= max, "{:?}", unit);
        assert!(converted > Mass::new(1e300, unit).unwrap(), "{:?}", unit);
    }
    assert_eq!(Mass::max_value().to_string(), "1.7976931348623157E+308 kg");
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn abbreviation_aliases_resolve() {
    for text in ["kt", "kn", "knot", "knots", "Knot", "KN"] {
        assert_eq!(parse_unit::<SpeedUnit>(text).unwrap(), SpeedUnit::Knot, "{}", text);
    }
    assert_eq!(parse_unit::<LengthUnit>("'").unwrap(), LengthUnit::Foot);
    assert_eq!(parse_unit::<MassUnit>("KG").unwrap(), MassUnit::Kilogram);
    assert_eq!(parse_unit::<MassUnit>("st").unwrap(), MassUnit::Stone);
    assert_eq!(parse_unit::<MassUnit>("ST").unwrap(), MassUnit::ShortTon);
    assert!(parse_unit::<MassUnit>("St").is_err());
    assert_eq!("degF".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
    assert_eq!(abbreviations(LengthUnit::Inch), &["in", "\"", "″"]);
}

#[test]
fn quantities_parse_and_print() {
    let alt: Length = "35000 ft".parse().unwrap();
    assert_eq!(alt.unit(), LengthUnit::Foot);
    assert_eq!(alt.format("E2").unwrap(), "3.50E+004 ft");
    assert_eq!(Temperature::parse("-40 °F").unwrap().to_string(), "-40 °F");
    assert_eq!(Mass::parse("2.5lb").unwrap().value(), 2.5);
    assert!(matches!(Length::parse("ten ft"), Err(QuantityError::InvalidNumber(_))));
    assert!(matches!(Length::parse("10 furlongs"), Err(QuantityError::InvalidUnit { .. })));
}

#[test]
fn unsupported_formats_fail() {
    let q = Speed::from_knots(250).unwrap();
    for spec in ["N", "X2", "C", "F100"] {
        assert!(matches!(q.format(spec), Err(QuantityError::UnsupportedFormat(_))), "{}", spec);
    }
    assert_eq!(q.to_string_with("F1", &Locale::new(',')).unwrap(), "250,0 kn");
}

#[test]
fn abbreviation_table_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let table = AbbreviationTable::global();
                (table as *const AbbreviationTable as usize, abbreviation(SpeedUnit::Knot))
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|r| *r == results[0]));
    assert_eq!(results[0].1, "kn");
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit-erased path
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unit_erased_quantities() {
    let feet = AnyUnit::from(LengthUnit::Foot);
    let pounds = AnyUnit::from(MassUnit::Pound);
    assert!(!registry::compatible(feet, pounds));
    assert!(matches!(
        registry::convert_value(1.0, feet, pounds),
        Err(QuantityError::UnsupportedUnit { .. })
    ));

    let distance = AnyQuantity::parse_in(Dimension::Length, "5280 ft").unwrap();
    let weight = AnyQuantity::new(1, pounds).unwrap();
    assert_eq!(distance.as_unit(AnyUnit::from(LengthUnit::Mile)), Ok(1.0));
    assert!(matches!(distance.try_cmp(&weight), Err(QuantityError::IncomparableType { .. })));
    assert!(matches!(distance.try_add(&weight), Err(QuantityError::IncomparableType { .. })));
    assert_ne!(distance, weight);
    assert_eq!(distance.partial_cmp(&weight), None);

    let length: Length = distance.try_into().unwrap();
    assert_eq!(length.miles(), 1.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Sample {
        altitude: Length,
        airspeed: Speed,
        oat: Temperature,
    }

    #[test]
    fn sample_roundtrip() {
        let sample = Sample {
            altitude: Length::from_feet(35000).unwrap(),
            airspeed: Speed::from_knots(450).unwrap(),
            oat: Temperature::from_celsius(-56.5).unwrap(),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert!(json.contains(r#""altitude":{"value":35000.0,"unit":"ft"}"#));
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
        assert_eq!(back.altitude.unit(), LengthUnit::Foot);
    }

    #[test]
    fn invalid_payloads_are_rejected() {
        assert!(serde_json::from_str::<Length>(r#"{"value":1.0,"unit":"furlong"}"#).is_err());
        assert!(serde_json::from_str::<Length>(r#"{"value":1.0}"#).is_err());
        assert!(serde_json::from_str::<Speed>(r#"{"value":1.0,"unit":"ft"}"#).is_err());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

fn any_length_unit() -> impl Strategy<Value = LengthUnit> {
    proptest::sample::select(LengthUnit::ALL)
}

fn any_temperature_unit() -> impl Strategy<Value = TemperatureUnit> {
    proptest::sample::select(TemperatureUnit::ALL)
}

proptest! {
    #[test]
    fn prop_convert_roundtrip(v in -1e9f64..1e9, a in any_length_unit(), b in any_length_unit()) {
        let back = convert(convert(v, a, b), b, a);
        prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        prop_assert_eq!(convert(v, a, a), v);
    }

    #[test]
    fn prop_base_invariance(v in -1e6f64..1e6, u in any_temperature_unit()) {
        let q = Temperature::new(v, u).unwrap();
        prop_assert_eq!(q.as_unit(TemperatureUnit::Kelvin), to_base(v, u));
    }

    #[test]
    fn prop_addition_commutes_in_value(
        x in -1e6f64..1e6, y in -1e6f64..1e6,
        a in any_length_unit(), b in any_length_unit(), target in any_length_unit(),
    ) {
        let p = Length::new(x, a).unwrap();
        let q = Length::new(y, b).unwrap();
        let left = (p + q).as_unit(target);
        let right = (q + p).as_unit(target);
        let scale = p.as_unit(target).abs().max(q.as_unit(target).abs()).max(1.0);
        prop_assert!((left - right).abs() <= 1e-9 * scale);
    }

    #[test]
    fn prop_equal_quantities_hash_alike(v in -1e6f64..1e6, u in any_length_unit()) {
        let q = Length::new(v, u).unwrap();
        let same = q.to_unit(u);
        prop_assert_eq!(q, same);
        prop_assert_eq!(hash_of(&q), hash_of(&same));
    }

    #[test]
    fn prop_huge_values_keep_eq_hash_and_order(
        x in -1.0f64..1.0, y in -1.0f64..1.0, a in any_length_unit(), b in any_length_unit(),
    ) {
        let p = Length::new(x * f64::MAX, a).unwrap();
        let q = Length::new(y * f64::MAX, b).unwrap();
        prop_assert_eq!(p.cmp(&q), q.cmp(&p).reverse());
        let converted = p.to_unit(b);
        if p == converted {
            prop_assert_eq!(hash_of(&p), hash_of(&converted));
        }
        if a == b {
            prop_assert_eq!(p.cmp(&q), p.value().partial_cmp(&q.value()).unwrap());
        }
    }

    #[test]
    fn prop_huge_temperatures_keep_eq_hash_and_order(
        x in -1.0f64..1.0, a in any_temperature_unit(), b in any_temperature_unit(),
    ) {
        let p = Temperature::new(x * f64::MAX, a).unwrap();
        let converted = p.to_unit(b);
        prop_assert_eq!(p.cmp(&converted), converted.cmp(&p).reverse());
        if p == converted {
            prop_assert_eq!(hash_of(&p), hash_of(&converted));
        }
    }

    #[test]
    fn prop_parse_display_roundtrip(v in -1e6f64..1e6, u in any_length_unit()) {
        let q = Length::new(v, u).unwrap();
        let back: Length = q.to_string().parse().unwrap();
        prop_assert_eq!(back.value(), v);
        prop_assert_eq!(back.unit(), u);
    }
}
