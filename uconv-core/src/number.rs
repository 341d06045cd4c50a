//! Number coercion and display
//!
//! Field values arrive either as text typed by a user or as numbers decoded
//! from JSON. These helpers turn them into `f64` and format results back
//! into text with the exact digits the catalog was authored against:
//! fixed decimals with ties rounded away from zero, and plain numbers that
//! switch to exponent notation outside `[1e-6, 1e21)`.

/// Magnitude from which numbers are printed in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitude below which numbers are printed in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Enough fractional digits to print any finite `f64` exactly
/// (the smallest subnormal has 1074 binary fraction digits).
const EXACT_DIGITS: usize = 1100;

/// Parse user text as a number.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// forms, `Infinity`, and unsigned `0x`/`0o`/`0b` integer literals.
/// Returns `None` for empty or non-numeric text.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }

    let (sign, unsigned) = match s.as_bytes()[0] {
        b'-' => (-1.0, &s[1..]),
        b'+' => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    // Rust also accepts "inf" and "nan"; only plain decimal syntax is valid here
    let plain = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !plain || !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Display a number the way a plain numeric field shows it.
///
/// Integers print without a fraction, `-0` prints as `0`, and magnitudes
/// outside `[1e-6, 1e21)` use exponent notation with an explicit sign
/// (`1e+21`, `1.5e-7`).
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", value)
}

/// Format a number with exactly `places` fractional digits.
///
/// The exact binary value is rounded, with ties going away from zero, so
/// `to_fixed(2.5, 0)` is `"3"` and `to_fixed(0.125, 2)` is `"0.13"`.
/// Negative values that round to zero keep their sign (`"-0.00"`).
/// Infinities and magnitudes of 1e21 or more fall back to [`display_number`].
pub fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() || value.is_infinite() || value.abs() >= EXPONENT_UPPER {
        return display_number(value);
    }
    let places = places.min(100);

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = &frac_part[..places.min(frac_part.len())];
    let round_up = frac_part
        .as_bytes()
        .get(places)
        .map_or(false, |&d| d >= b'5');

    let mut digits = format!("{}{}", int_part, kept);
    if round_up {
        digits = increment_digits(&digits);
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&digits[..split]);
    if places > 0 {
        out.push('.');
        out.push_str(&digits[split..]);
    }
    out
}

/// Add one unit in the last place of a decimal digit string.
fn increment_digits(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return bytes.into_iter().map(char::from).collect();
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.extend(bytes.into_iter().map(char::from));
    out
}
