//! Fraction and decimal conversions

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::fraction_from_decimal;
use uconv_registry::{Category, Conversion, FieldSpec, Step};

use crate::helpers::{fixed, text_output};

// ============ Fraction to Decimal ============

static FRACTION_TO_DECIMAL_INPUTS: [FieldSpec; 2] = [
    FieldSpec::numeric("numerator", "Numerator"),
    FieldSpec::numeric("denominator", "Denominator"),
];

static FRACTION_TO_DECIMAL_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("decimal", "Decimal")];

fn fraction_to_decimal(inputs: &InputBag) -> OutputBag {
    let denominator = inputs.nonzero("denominator").filter(|d| *d != 0.0);
    match (inputs.number("numerator"), denominator) {
        (Some(n), Some(d)) => OutputBag::single("decimal", fixed(n / d, 4)),
        _ => OutputBag::blank(["decimal"]),
    }
}

pub static FRACTION_TO_DECIMAL: Conversion = Conversion::new(
    "Fraction to Decimal",
    &FRACTION_TO_DECIMAL_INPUTS,
    &FRACTION_TO_DECIMAL_OUTPUTS,
    fraction_to_decimal,
);

// ============ Decimal to Fraction ============

static DECIMAL_TO_FRACTION_INPUTS: [FieldSpec; 1] =
    [FieldSpec::numeric("decimalVal", "Decimal").with_step(Step::Any)];

static DECIMAL_TO_FRACTION_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("fraction", "Fraction")];

fn decimal_to_fraction(inputs: &InputBag) -> OutputBag {
    text_output(
        "fraction",
        inputs.nonzero("decimalVal").and_then(fraction_from_decimal),
    )
}

pub static DECIMAL_TO_FRACTION: Conversion = Conversion::new(
    "Decimal to Fraction",
    &DECIMAL_TO_FRACTION_INPUTS,
    &DECIMAL_TO_FRACTION_OUTPUTS,
    decimal_to_fraction,
);

pub fn category() -> Category {
    Category::new("Fraction and Decimal")
        .with_conversion(FRACTION_TO_DECIMAL)
        .with_conversion(DECIMAL_TO_FRACTION)
}
