//! Currency conversion at a fixed example rate

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::USD_TO_EUR;
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_nonzero;

static USD_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("usd", "USD")];
static EUR_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("eur", "EUR")];

fn usd_to_eur(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "usd", "eur", 2, |usd| usd * USD_TO_EUR)
}

pub static USD_TO_EUR_STATIC: Conversion =
    Conversion::new("USD to EUR (static rate)", &USD_INPUTS, &EUR_OUTPUTS, usd_to_eur);

pub fn category() -> Category {
    Category::new("Currency (Static Rate Example)").with_conversion(USD_TO_EUR_STATIC)
}
