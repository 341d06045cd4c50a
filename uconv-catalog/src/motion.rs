//! Speed and time conversions

use uconv_core::{InputBag, OutputBag};
use uconv_registry::{Category, Conversion, FieldSpec};

use crate::helpers::scale_nonzero;

const KMH_PER_MS: f64 = 3.6;
const MS_PER_MPH: f64 = 0.44704;

// ============ Speed ============

static MS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("ms", "m/s")];
static KMH_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("kmh", "km/h")];

static MPH_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("mph", "mph")];
static MS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("ms", "m/s")];

fn ms_to_kmh(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "ms", "kmh", 2, |ms| ms * KMH_PER_MS)
}

fn mph_to_ms(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "mph", "ms", 4, |mph| mph * MS_PER_MPH)
}

pub static MS_TO_KMH: Conversion = Conversion::new("m/s to km/h", &MS_INPUTS, &KMH_OUTPUTS, ms_to_kmh);

pub static MPH_TO_MS: Conversion =
    Conversion::new("Miles per hour to m/s", &MPH_INPUTS, &MS_OUTPUTS, mph_to_ms);

pub fn speed_category() -> Category {
    Category::new("Speed")
        .with_conversion(MS_TO_KMH)
        .with_conversion(MPH_TO_MS)
}

// ============ Time ============

static SECONDS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("sec", "Seconds")];
static MINUTES_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("minutes", "Minutes")];

static HOURS_INPUTS: [FieldSpec; 1] = [FieldSpec::numeric("hrs", "Hours")];
static SECONDS_OUTPUTS: [FieldSpec; 1] = [FieldSpec::output("seconds", "Seconds")];

fn seconds_to_minutes(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "sec", "minutes", 4, |s| s / 60.0)
}

fn hours_to_seconds(inputs: &InputBag) -> OutputBag {
    scale_nonzero(inputs, "hrs", "seconds", 0, |h| h * 3600.0)
}

pub static SECONDS_TO_MINUTES: Conversion = Conversion::new(
    "Seconds to Minutes",
    &SECONDS_INPUTS,
    &MINUTES_OUTPUTS,
    seconds_to_minutes,
);

pub static HOURS_TO_SECONDS: Conversion = Conversion::new(
    "Hours to Seconds",
    &HOURS_INPUTS,
    &SECONDS_OUTPUTS,
    hours_to_seconds,
);

pub fn time_category() -> Category {
    Category::new("Time")
        .with_conversion(SECONDS_TO_MINUTES)
        .with_conversion(HOURS_TO_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(conversion: &Conversion, key: &str, value: &str) -> String {
        let out = conversion.evaluate(&InputBag::new().with(key, value));
        out.get(conversion.output_fields[0].key).unwrap_or_default().to_string()
    }

    #[test]
    fn test_speed() {
        assert_eq!(run(&MS_TO_KMH, "ms", "10"), "36.00");
        assert_eq!(run(&MS_TO_KMH, "ms", "1"), "3.60");
        assert_eq!(run(&MPH_TO_MS, "mph", "60"), "26.8224");
        assert_eq!(run(&MPH_TO_MS, "mph", "1"), "0.4470");
    }

    #[test]
    fn test_speed_output_key_differs_from_input_key() {
        let out = MPH_TO_MS.evaluate(&InputBag::new().with("ms", "5"));
        assert_eq!(out.get("ms"), Some(""));
    }

    #[test]
    fn test_seconds_to_minutes() {
        assert_eq!(run(&SECONDS_TO_MINUTES, "sec", "90"), "1.5000");
        assert_eq!(run(&SECONDS_TO_MINUTES, "sec", "1"), "0.0167");
        assert_eq!(run(&SECONDS_TO_MINUTES, "sec", "0"), "0.0000");
    }

    #[test]
    fn test_hours_to_seconds_has_no_decimals() {
        assert_eq!(run(&HOURS_TO_SECONDS, "hrs", "1.5"), "5400");
        assert_eq!(run(&HOURS_TO_SECONDS, "hrs", "2"), "7200");
    }
}
