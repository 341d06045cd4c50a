//! uconv Formula Library
//!
//! Pure, stateless transforms used by the conversion catalog:
//! - Linear scales and offsets (temperature, length, angle, currency)
//! - Fraction reduction (gcd, decimal → fraction)
//! - Base conversions (binary ↔ decimal, RGB → hex)
//! - Approximate Julian day → Gregorian date
//!
//! Literal constants are kept exactly as the catalog publishes them so
//! results stay reproducible digit for digit.

mod linear;
mod fraction;
mod base;
mod calendar;

pub use linear::{
    celsius_to_fahrenheit, celsius_to_kelvin, degrees_to_radians, fahrenheit_to_celsius,
    feet_to_meters, kelvin_to_celsius, meters_to_feet,
    FEET_PER_METER, KELVIN_OFFSET, METERS_PER_FOOT, USD_TO_EUR,
};
pub use fraction::{fraction_from_decimal, gcd};
pub use base::{binary_to_decimal, decimal_to_binary, rgb_channel_to_hex, rgb_to_hex};
pub use calendar::{julian_to_gregorian, JD_UNIX_EPOCH, MILLIS_PER_DAY};
