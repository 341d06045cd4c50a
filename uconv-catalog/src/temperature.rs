//! Temperature conversions
//!
//! Zero is a real temperature, so every input here uses the *present*
//! guard rather than treating 0 as unset.

use uconv_core::{InputBag, OutputBag};
use uconv_formulas::{celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, kelvin_to_celsius};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_present;

static CELSIUS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("celsius", "Celsius")];
static FAHRENHEIT_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("fahrenheit", "Fahrenheit")];

static FAHRENHEIT_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("fahrenheit", "Fahrenheit")];
static CELSIUS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("celsius", "Celsius")];

static C_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("c", "Celsius")];
static KELVIN_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("kelvin", "Kelvin")];

static K_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("k", "Kelvin")];

fn celsius_to_fahrenheit_fields(inputs: &InputBag) -> OutputBag {
    scale_present(inputs, "celsius", "fahrenheit", 2, celsius_to_fahrenheit)
}

fn fahrenheit_to_celsius_fields(inputs: &InputBag) -> OutputBag {
    scale_present(inputs, "fahrenheit", "celsius", 2, fahrenheit_to_celsius)
}

fn celsius_to_kelvin_fields(inputs: &InputBag) -> OutputBag {
    scale_present(inputs, "c", "kelvin", 2, celsius_to_kelvin)
}

fn kelvin_to_celsius_fields(inputs: &InputBag) -> OutputBag {
    scale_present(inputs, "k", "celsius", 2, kelvin_to_celsius)
}

pub static CELSIUS_TO_FAHRENHEIT: Conversion = Conversion::new(
    "Celsius to Fahrenheit",
    &CELSIUS_INPUTS,
    &FAHRENHEIT_OUTPUTS,
    celsius_to_fahrenheit_fields,
);

pub static FAHRENHEIT_TO_CELSIUS: Conversion = Conversion::new(
    "Fahrenheit to Celsius",
    &FAHRENHEIT_INPUTS,
    &CELSIUS_OUTPUTS,
    fahrenheit_to_celsius_fields,
);

pub static CELSIUS_TO_KELVIN: Conversion = Conversion::new(
    "Celsius to Kelvin",
    &C_INPUTS,
    &KELVIN_OUTPUTS,
    celsius_to_kelvin_fields,
);

pub static KELVIN_TO_CELSIUS: Conversion = Conversion::new(
    "Kelvin to Celsius",
    &K_INPUTS,
    &CELSIUS_OUTPUTS,
    kelvin_to_celsius_fields,
);

pub fn category() -> Category {
    Category::new("Temperature")
        .with_conversion(CELSIUS_TO_FAHRENHEIT)
        .with_conversion(FAHRENHEIT_TO_CELSIUS)
        .with_conversion(CELSIUS_TO_KELVIN)
        .with_conversion(KELVIN_TO_CELSIUS)
}
