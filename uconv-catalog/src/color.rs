//! Miscellaneous conversions: RGB color to hex

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::rgb_to_hex;
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::text_output;

static RGB_INPUTS: [FieldSpec; 3] = [
    FieldSpec::numeric("r", "Red (0-255)"),
    FieldSpec::numeric("g", "Green (0-255)"),
    FieldSpec::numeric("b", "Blue (0-255)"),
];

static HEX_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("hex", "HEX")];

fn rgb_to_hex_fields(inputs: &InputBag) -> OutputBag {
    let hex = match (inputs.number("r"), inputs.number("g"), inputs.number("b")) {
        (Some(r), Some(g), Some(b)) => rgb_to_hex(r, g, b),
        _ => None,
    };
    text_output("hex", hex)
}

pub static RGB_TO_HEX: Conversion = Conversion::new("RGB to HEX", &RGB_INPUTS, &HEX_OUTPUTS, rgb_to_hex_fields);

pub fn category() -> Category {
    Category::new("Miscellaneous").with_conversion(RGB_TO_HEX)
}
