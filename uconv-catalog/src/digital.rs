//! Number base and data storage conversions

use uconv_core::{display_number, InputBag, OutputBag};
use uconv_formulas::{binary_to_decimal, decimal_to_binary};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::{scale_nonzero, text_output};

const BYTES_PER_KILOBYTE: f64 = 1024.0;

// ============ Base Conversions ============

static DECIMAL_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("dec", "Decimal")];
static BINARY_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("binary", "Binary")];

static BINARY_INPUTS: [FieldSpec; 1] = [FieldSpec::text("bin", "Binary")];
static DECIMAL_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("decimal", "Decimal")];

fn decimal_to_binary_fields(inputs: &InputBag) -> OutputBag {
    text_output("binary", inputs.number("dec").and_then(decimal_to_binary))
}

fn binary_to_decimal_fields(inputs: &InputBag) -> OutputBag {
    let decimal = inputs
        .text("bin")
        .and_then(|bin| binary_to_decimal(&bin))
        .map(display_number);
    text_output("decimal", decimal)
}

pub static DECIMAL_TO_BINARY: Conversion = Conversion::new(
    "Decimal to Binary",
    &DECIMAL_INPUTS,
    &BINARY_OUTPUTS,
    decimal_to_binary_fields,
);

pub static BINARY_TO_DECIMAL: Conversion = Conversion::new(
    "Binary to Decimal",
    &BINARY_INPUTS,
    &DECIMAL_OUTPUTS,
    binary_to_decimal_fields,
);

pub fn base_category() -> Category {
    Category::new("Base Conversions")
        .with_conversion(DECIMAL_TO_BINARY)
        .with_conversion(BINARY_TO_DECIMAL)
}

// ============ Data Storage ============

static BYTES_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("bytes", "Bytes")];
static KILOBYTES_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("kb", "Kilobytes")];

fn bytes_to_kilobytes(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "bytes", "kb", 4, |bytes| bytes / BYTES_PER_KILOBYTE)
}

pub static BYTES_TO_KILOBYTES: Conversion = Conversion::new(
    "Bytes to Kilobytes",
    &BYTES_INPUTS,
    &KILOBYTES_OUTPUTS,
    bytes_to_kilobytes,
);

pub fn storage_category() -> Category {
    Category::new("Data Storage").with_conversion(BYTES_TO_KILOBYTES)
}
