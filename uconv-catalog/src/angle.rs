//! Angle and trigonometric conversions

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::degrees_to_radians;
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::{scale_nonzero, scale_present};

static DEGREES_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("deg", "Degrees")];
static RADIANS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("radians", "Radians")];
static SIN_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("sin", "Sin(angle)")];

fn degrees_to_radians_fields(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "deg", "radians", 6, degrees_to_radians)
}

// sin(0) is a real answer, unlike a zero-degree conversion
fn sin_of_angle(inputs: &InputBag) -> OutputBag {
    scale_present(inputs, "deg", "sin", 6, |deg| degrees_to_radians(deg).sin())
}

pub static DEGREES_TO_RADIANS: Conversion = Conversion::new(
    "Degrees to Radians",
    &DEGREES_INPUTS,
    &RADIANS_OUTPUTS,
    degrees_to_radians_fields,
);

pub static SIN_OF_ANGLE: Conversion = Conversion::new(
    "Degrees to Radians (already above), Sin of angle",
    &DEGREES_INPUTS,
    &SIN_OUTPUTS,
    sin_of_angle,
);

pub fn angles_category() -> Category {
    Category::new("Angles").with_conversion(DEGREES_TO_RADIANS)
}

pub fn trigonometry_category() -> Category {
    Category::new("Trigonometric Conversions").with_conversion(SIN_OF_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(conversion: &Conversion, value: &str) -> String {
        let out = conversion.evaluate(&InputBag::new().with("deg", value));
        out.get(conversion.output_fields[0].key).unwrap_or_default().to_string()
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(run(&DEGREES_TO_RADIANS, "180"), "3.141593");
        assert_eq!(run(&DEGREES_TO_RADIANS, "90"), "1.570796");
        assert_eq!(run(&DEGREES_TO_RADIANS, "1"), "0.017453");
        assert_eq!(run(&DEGREES_TO_RADIANS, "0"), "0.000000");
        let out = DEGREES_TO_RADIANS.evaluate(&InputBag::new().with("deg", 0));
        assert_eq!(out.get("radians"), Some(""));
    }

    #[test]
    fn test_sin_of_angle() {
        assert_eq!(run(&SIN_OF_ANGLE, "90"), "1.000000");
        assert_eq!(run(&SIN_OF_ANGLE, "30"), "0.500000");
        assert_eq!(run(&SIN_OF_ANGLE, "-90"), "-1.000000");
    }

    #[test]
    fn test_sin_of_zero_is_a_value() {
        assert_eq!(run(&SIN_OF_ANGLE, "0"), "0.000000");
        assert_eq!(run(&SIN_OF_ANGLE, ""), "");
    }

    #[test]
    fn test_sin_of_infinity_is_blank() {
        assert_eq!(run(&SIN_OF_ANGLE, "Infinity"), "");
    }
}
