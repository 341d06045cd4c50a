//! Energy, pressure and power conversions

use uconv_core::{InputBag, OutputBag};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_nonzero;

const JOULES_PER_CALORIE: f64 = 4.184;
const PSI_PER_PASCAL: f64 = 0.000145038;
const WATTS_PER_HORSEPOWER: f64 = 745.7;

static JOULES_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("J", "Joules")];
static CALORIES_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("cal", "Calories")];

static PASCALS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("Pa", "Pascals")];
static PSI_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("psi", "psi")];

static WATTS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("W", "Watts")];
static HORSEPOWER_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("hp", "Horsepower")];

fn joules_to_calories(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "J", "cal", 4, |j| j / JOULES_PER_CALORIE)
}

fn pascals_to_psi(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "Pa", "psi", 6, |pa| pa * PSI_PER_PASCAL)
}

fn watts_to_horsepower(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "W", "hp", 4, |w| w / WATTS_PER_HORSEPOWER)
}

pub static JOULES_TO_CALORIES: Conversion = Conversion::new(
    "Joules to Calories (approx)",
    &JOULES_INPUTS,
    &CALORIES_OUTPUTS,
    joules_to_calories,
);

pub static PASCALS_TO_PSI: Conversion =
    Conversion::new("Pascals to psi", &PASCALS_INPUTS, &PSI_OUTPUTS, pascals_to_psi);

pub static WATTS_TO_HORSEPOWER: Conversion = Conversion::new(
    "Watts to Horsepower",
    &WATTS_INPUTS,
    &HORSEPOWER_OUTPUTS,
    watts_to_horsepower,
);

pub fn energy_category() -> Category {
    Category::new("Energy").with_conversion(JOULES_TO_CALORIES)
}

pub fn pressure_category() -> Category {
    Category::new("Pressure").with_conversion(PASCALS_TO_PSI)
}

pub fn power_category() -> Category {
    Category::new("Power").with_conversion(WATTS_TO_HORSEPOWER)
}
