//! Predefined unit enums, one module per dimension.
//!
//! - [`length`]: metric and imperial lengths plus the nautical mile
//! - [`mass`]: metric and avoirdupois masses
//! - [`speed`]: length-over-time units and the knot
//! - [`temperature`]: kelvin, Celsius and Fahrenheit

pub mod length;
pub mod mass;
pub mod speed;
pub mod temperature;
