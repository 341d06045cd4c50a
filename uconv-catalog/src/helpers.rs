//! Shared guard-and-format helpers for catalog formulas

use uconv_core::{to_fixed, InputBag, OutputBag};

/// Fixed-decimal rendering of a result. NaN is treated as invalid input.
pub fn fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        String::new()
    } else {
        to_fixed(value, places)
    }
}

/// Single-output scale where zero means "unset"
pub fn scale_nonzero(
    inputs: &InputBag,
    input: &str,
    output: &str,
    places: usize,
    formula: impl Fn(f64) -> f64,
) -> OutputBag {
    match inputs.nonzero(input) {
        Some(x) => OutputBag::single(output, fixed(formula(x), places)),
        None => OutputBag::blank([output]),
    }
}

/// Single-output scale where zero is a legitimate value
pub fn scale_present(
    inputs: &InputBag,
    input: &str,
    output: &str,
    places: usize,
    formula: impl Fn(f64) -> f64,
) -> OutputBag {
    match inputs.number(input) {
        Some(x) => OutputBag::single(output, fixed(formula(x), places)),
        None => OutputBag::blank([output]),
    }
}

/// Single text output; `None` renders blank
pub fn text_output(output: &str, value: Option<String>) -> OutputBag {
    OutputBag::single(output, value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_nan_is_blank() {
        assert_eq!(fixed(f64::NAN, 2), "");
        assert_eq!(fixed(1.5, 2), "1.50");
        assert_eq!(fixed(f64::INFINITY, 2), "Infinity");
    }

    #[test]
    fn test_scale_nonzero_treats_numeric_zero_as_unset() {
        let out = scale_nonzero(&InputBag::new().with("x", 0), "x", "y", 2, |x| x * 2.0);
        assert_eq!(out.get("y"), Some(""));
        let out = scale_nonzero(&InputBag::new().with("x", ""), "x", "y", 2, |x| x * 2.0);
        assert_eq!(out.get("y"), Some(""));
        let out = scale_nonzero(&InputBag::new().with("x", "0"), "x", "y", 2, |x| x * 2.0);
        assert_eq!(out.get("y"), Some("0.00"));
        let out = scale_nonzero(&InputBag::new().with("x", "3"), "x", "y", 2, |x| x * 2.0);
        assert_eq!(out.get("y"), Some("6.00"));
    }

    #[test]
    fn test_scale_present_accepts_zero() {
        let out = scale_present(&InputBag::new().with("x", 0), "x", "y", 1, |x| x + 1.0);
        assert_eq!(out.get("y"), Some("1.0"));
        let out = scale_present(&InputBag::new().with("x", ""), "x", "y", 1, |x| x + 1.0);
        assert_eq!(out.get("y"), Some(""));
        let out = scale_present(&InputBag::new().with("x", "abc"), "x", "y", 1, |x| x + 1.0);
        assert_eq!(out.get("y"), Some(""));
    }

    #[test]
    fn test_text_output() {
        assert_eq!(text_output("t", None).get("t"), Some(""));
        assert_eq!(text_output("t", Some("ok".into())).get("t"), Some("ok"));
    }
}
