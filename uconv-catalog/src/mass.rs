//! Weight and volume conversions

use uconv_core::{InputBag, OutputBag};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_nonzero;

const POUNDS_PER_KILOGRAM: f64 = 2.20462;
const KILOGRAMS_PER_POUND: f64 = 0.453592;
const LITERS_PER_GALLON: f64 = 3.78541;

// ============ Weight/Mass ============

static KILOGRAMS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("kg", "Kilograms")];
static POUNDS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("pounds", "Pounds")];

static POUNDS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("lb", "Pounds")];
static KILOGRAMS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("kilograms", "Kilograms")];

fn kilograms_to_pounds(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "kg", "pounds", 4, |kg| kg * POUNDS_PER_KILOGRAM)
}

fn pounds_to_kilograms(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "lb", "kilograms", 4, |lb| lb * KILOGRAMS_PER_POUND)
}

pub static KILOGRAMS_TO_POUNDS: Conversion = Conversion::new(
    "Kilograms to Pounds",
    &KILOGRAMS_INPUTS,
    &POUNDS_OUTPUTS,
    kilograms_to_pounds,
);

pub static POUNDS_TO_KILOGRAMS: Conversion = Conversion::new(
    "Pounds to Kilograms",
    &POUNDS_INPUTS,
    &KILOGRAMS_OUTPUTS,
    pounds_to_kilograms,
);

pub fn weight_category() -> Category {
    Category::new("Weight/Mass")
        .with_conversion(KILOGRAMS_TO_POUNDS)
        .with_conversion(POUNDS_TO_KILOGRAMS)
}

// ============ Volume ============

static LITERS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("L", "Liters")];
static MILLILITERS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("mL", "Milliliters")];

static GALLONS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("gal", "Gallons")];
static LITERS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("liters", "Liters")];

fn liters_to_milliliters(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "L", "mL", 2, |l| l * 1000.0)
}

fn gallons_to_liters(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "gal", "liters", 4, |gal| gal * LITERS_PER_GALLON)
}

pub static LITERS_TO_MILLILITERS: Conversion = Conversion::new(
    "Liters to Milliliters",
    &LITERS_INPUTS,
    &MILLILITERS_OUTPUTS,
    liters_to_milliliters,
);

pub static GALLONS_TO_LITERS: Conversion = Conversion::new(
    "Gallons to Liters",
    &GALLONS_INPUTS,
    &LITERS_OUTPUTS,
    gallons_to_liters,
);

pub fn volume_category() -> Category {
    Category::new("Volume")
        .with_conversion(LITERS_TO_MILLILITERS)
        .with_conversion(GALLONS_TO_LITERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(conversion: &Conversion, key: &str, value: &str) -> String {
        let out = conversion.evaluate(&InputBag::new().with(key, value));
        out.get(conversion.output_fields[0].key).unwrap_or_default().to_string()
    }

    #[test]
    fn test_kilograms_pounds() {
        assert_eq!(run(&KILOGRAMS_TO_POUNDS, "kg", "1"), "2.2046");
        assert_eq!(run(&KILOGRAMS_TO_POUNDS, "kg", "70"), "154.3234");
        assert_eq!(run(&POUNDS_TO_KILOGRAMS, "lb", "1"), "0.4536");
        assert_eq!(run(&POUNDS_TO_KILOGRAMS, "lb", "150"), "68.0388");
    }

    #[test]
    fn test_weight_numeric_zero_is_blank() {
        assert_eq!(run(&KILOGRAMS_TO_POUNDS, "kg", "0"), "0.0000");
        let out = KILOGRAMS_TO_POUNDS.evaluate(&InputBag::new().with("kg", 0));
        assert_eq!(out.get("pounds"), Some(""));
        assert_eq!(run(&POUNDS_TO_KILOGRAMS, "lb", ""), "");
    }

    #[test]
    fn test_liters_to_milliliters() {
        assert_eq!(run(&LITERS_TO_MILLILITERS, "L", "1.5"), "1500.00");
    }

    #[test]
    fn test_gallons_to_liters() {
        assert_eq!(run(&GALLONS_TO_LITERS, "gal", "1"), "3.7854");
        assert_eq!(run(&GALLONS_TO_LITERS, "gal", "5"), "18.9271");
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let out = LITERS_TO_MILLILITERS.evaluate(&InputBag::new().with("l", "2"));
        assert_eq!(out.get("mL"), Some(""));
    }
}
