//! Length and area conversions

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::{feet_to_meters, meters_to_feet};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_nonzero;

const KILOMETERS_PER_MILE: f64 = 1.60934;
const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

// ============ Length/Distance ============

static METERS_TO_KILOMETERS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("meters", "Meters")];
static MILES_TO_KILOMETERS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("miles", "Miles")];
static KILOMETERS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("kilometers", "Kilometers")];

static METERS_TO_FEET_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("m", "Meters")];
static METERS_TO_FEET_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("feet", "Feet")];

static FEET_TO_METERS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("ft", "Feet")];
static FEET_TO_METERS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("meters", "Meters")];

fn meters_to_kilometers(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "meters", "kilometers", 6, |m| m / 1000.0)
}

fn miles_to_kilometers(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "miles", "kilometers", 6, |mi| mi * KILOMETERS_PER_MILE)
}

fn meters_to_feet_fields(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "m", "feet", 4, meters_to_feet)
}

fn feet_to_meters_fields(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "ft", "meters", 4, feet_to_meters)
}

pub static METERS_TO_KILOMETERS: Conversion = Conversion::new(
    "Meters to Kilometers",
    &METERS_TO_KILOMETERS_INPUTS,
    &KILOMETERS_OUTPUTS,
    meters_to_kilometers,
);

pub static MILES_TO_KILOMETERS: Conversion = Conversion::new(
    "Miles to Kilometers",
    &MILES_TO_KILOMETERS_INPUTS,
    &KILOMETERS_OUTPUTS,
    miles_to_kilometers,
);

pub static METERS_TO_FEET: Conversion = Conversion::new(
    "Meters to Feet",
    &METERS_TO_FEET_INPUTS,
    &METERS_TO_FEET_OUTPUTS,
    meters_to_feet_fields,
);

pub static FEET_TO_METERS: Conversion = Conversion::new(
    "Feet to Meters",
    &FEET_TO_METERS_INPUTS,
    &FEET_TO_METERS_OUTPUTS,
    feet_to_meters_fields,
);

pub fn length_category() -> Category {
    Category::new("Length/Distance")
        .with_conversion(METERS_TO_KILOMETERS)
        .with_conversion(MILES_TO_KILOMETERS)
        .with_conversion(METERS_TO_FEET)
        .with_conversion(FEET_TO_METERS)
}

// ============ Area ============

static SQUARE_METERS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("sqm", "Square Meters")];
static SQUARE_FEET_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("sqft", "Square Feet")];

fn square_meters_to_square_feet(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "sqm", "sqft", 4, |sqm| sqm * SQUARE_FEET_PER_SQUARE_METER)
}

pub static SQUARE_METERS_TO_SQUARE_FEET: Conversion = Conversion::new(
    "Square Meters to Square Feet",
    &SQUARE_METERS_INPUTS,
    &SQUARE_FEET_OUTPUTS,
    square_meters_to_square_feet,
);

pub fn area_category() -> Category {
    Category::new("Area").with_conversion(SQUARE_METERS_TO_SQUARE_FEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(conversion: &Conversion, key: &str, value: &str) -> String {
        let out = conversion.evaluate(&InputBag::new().with(key, value));
        out.get(conversion.output_fields[0].key).unwrap_or_default().to_string()
    }

    #[test]
    fn test_meters_to_kilometers() {
        assert_eq!(run(&METERS_TO_KILOMETERS, "meters", "1500"), "1.500000");
        assert_eq!(run(&METERS_TO_KILOMETERS, "meters", "1"), "0.001000");
    }

    #[test]
    fn test_meters_to_kilometers_numeric_zero_is_blank() {
        let out = METERS_TO_KILOMETERS.evaluate(&InputBag::new().with("meters", 0));
        assert_eq!(out.get("kilometers"), Some(""));
        assert_eq!(run(&METERS_TO_KILOMETERS, "meters", "0"), "0.000000");
    }

    #[test]
    fn test_miles_to_kilometers() {
        assert_eq!(run(&MILES_TO_KILOMETERS, "miles", "1"), "1.609340");
        assert_eq!(run(&MILES_TO_KILOMETERS, "miles", "26.2"), "42.164708");
    }

    #[test]
    fn test_meters_feet() {
        assert_eq!(run(&METERS_TO_FEET, "m", "1"), "3.2808");
        assert_eq!(run(&METERS_TO_FEET, "m", "100"), "328.0840");
        assert_eq!(run(&FEET_TO_METERS, "ft", "1"), "0.3048");
        assert_eq!(run(&FEET_TO_METERS, "ft", "10"), "3.0480");
    }

    #[test]
    fn test_square_meters_to_square_feet() {
        assert_eq!(run(&SQUARE_METERS_TO_SQUARE_FEET, "sqm", "1"), "10.7639");
        assert_eq!(run(&SQUARE_METERS_TO_SQUARE_FEET, "sqm", "20"), "215.2780");
        assert_eq!(run(&SQUARE_METERS_TO_SQUARE_FEET, "sqm", ""), "");
    }

    #[test]
    fn test_categories() {
        assert_eq!(length_category().conversions().len(), 4);
        assert_eq!(area_category().name, "Area");
    }
}
