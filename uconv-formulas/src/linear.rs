//! Linear unit formulas: scale factors and offsets

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.28084;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Static USD → EUR rate. Not fetched live.
pub const USD_TO_EUR: f64 = 0.9;

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn meters_to_feet(m: f64) -> f64 {
    m * FEET_PER_METER
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * METERS_PER_FOOT
}

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
