//! Julian day to calendar date

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::julian_to_gregorian;
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::text_output;

static JULIAN_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("jd", "Julian Day")];
static DATE_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("date", "Gregorian Date (approx)")];

fn julian_date_to_gregorian(inputs: &InputBag) -> OutputBag {
    text_output("date", inputs.nonzero("jd").and_then(julian_to_gregorian))
}

pub static JULIAN_TO_GREGORIAN: Conversion = Conversion::new(
    "Julian Date to Gregorian",
    &JULIAN_INPUTS,
    &DATE_OUTPUTS,
    julian_date_to_gregorian,
);

pub fn category() -> Category {
    Category::new("Geographical Conversions (Example)").with_conversion(JULIAN_TO_GREGORIAN)
}
