//! Fraction reduction

use uconv_core::display_number;

/// Greatest common divisor (Euclid) of two integral values.
///
/// Operands are taken by absolute value; `gcd(a, 0) == a`.
pub fn gcd(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0.0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Round half up (toward positive infinity)
fn round_half_up(x: f64) -> f64 {
    let r = x.round();
    if x - r == 0.5 {
        r + 1.0
    } else {
        r
    }
}

/// Reduce a decimal to the fraction `numerator/denominator`.
///
/// The denominator is `10^places`, where `places` is the length of the text
/// after the `.` in [`display_number`]; the result is then reduced by
/// [`gcd`]. Text without a `.` (whole numbers, and exponent forms such as
/// `1e-7`) is returned as `"text/1"`. Returns `None` for non-finite values
/// or when `10^places` overflows.
pub fn fraction_from_decimal(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let text = display_number(value);
    let Some((_, fraction_digits)) = text.split_once('.') else {
        return Some(format!("{}/1", text));
    };

    let places = i32::try_from(fraction_digits.len()).ok()?;
    let denominator = 10f64.powi(places);
    if !denominator.is_finite() {
        return None;
    }
    let numerator = round_half_up(value * denominator);
    if !numerator.is_finite() {
        return None;
    }

    let divisor = gcd(numerator, denominator);
    Some(format!(
        "{}/{}",
        display_number(numerator / divisor),
        display_number(denominator / divisor)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12.0, 18.0), 6.0);
        assert_eq!(gcd(7.0, 0.0), 7.0);
        assert_eq!(gcd(0.0, 5.0), 5.0);
        assert_eq!(gcd(75.0, 100.0), 25.0);
        assert_eq!(gcd(-5.0, 10.0), 5.0);
    }

    #[test]
    fn test_fraction_reduction() {
        assert_eq!(fraction_from_decimal(0.75).as_deref(), Some("3/4"));
        assert_eq!(fraction_from_decimal(0.5).as_deref(), Some("1/2"));
        assert_eq!(fraction_from_decimal(1.25).as_deref(), Some("5/4"));
        assert_eq!(fraction_from_decimal(0.1).as_deref(), Some("1/10"));
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(fraction_from_decimal(2.0).as_deref(), Some("2/1"));
        assert_eq!(fraction_from_decimal(-3.0).as_deref(), Some("-3/1"));
    }

    #[test]
    fn test_exponent_text_is_kept_whole() {
        assert_eq!(fraction_from_decimal(1e-7).as_deref(), Some("1e-7/1"));
        assert_eq!(fraction_from_decimal(1e21).as_deref(), Some("1e+21/1"));
        assert_eq!(fraction_from_decimal(0.000001).as_deref(), Some("1/1000000"));
    }

    #[test]
    fn test_negative_keeps_sign_on_numerator() {
        assert_eq!(fraction_from_decimal(-0.5).as_deref(), Some("-1/2"));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fraction_from_decimal(f64::NAN), None);
        assert_eq!(fraction_from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }
}
