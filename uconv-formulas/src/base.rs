//! Base conversions: binary digits and hex color channels

/// 2^64 as f64; integers below this fit in u64 exactly
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Base-2 digits of `dec` truncated toward zero.
///
/// No leading zeros; negative values get a leading `-`. Exact for every
/// finite `f64`. Returns `None` for NaN and infinities.
pub fn decimal_to_binary(dec: f64) -> Option<String> {
    if !dec.is_finite() {
        return None;
    }
    let whole = dec.trunc();
    let sign = if whole < 0.0 { "-" } else { "" };
    Some(format!("{}{}", sign, integral_binary(whole.abs())))
}

/// Binary digits of a non-negative integral f64
fn integral_binary(whole: f64) -> String {
    if whole < TWO_POW_64 {
        return format!("{:b}", whole as u64);
    }
    // whole = mantissa * 2^exponent with exponent > 0 at this magnitude
    let bits = whole.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as usize - 1075;
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    format!("{:b}{}", mantissa, "0".repeat(exponent))
}

/// Value of a binary digit string.
///
/// Returns `None` unless `bin` matches `^[01]+$` exactly. Values beyond 2^53
/// are rounded to the nearest `f64` from their leading 128 bits.
pub fn binary_to_decimal(bin: &str) -> Option<f64> {
    if bin.is_empty() || !bin.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let significant = bin.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0.0);
    }
    if significant.len() <= 128 {
        return u128::from_str_radix(significant, 2).ok().map(|n| n as f64);
    }

    let head = u128::from_str_radix(&significant[..128], 2).ok()?;
    let shift = i32::try_from(significant.len() - 128).unwrap_or(i32::MAX);
    Some(head as f64 * 2f64.powi(shift))
}

/// Two-digit lowercase hex for one color channel.
///
/// The channel is truncated toward zero and clamped to 0..=255.
pub fn rgb_channel_to_hex(channel: f64) -> Option<String> {
    if !channel.is_finite() {
        return None;
    }
    let clamped = channel.trunc().clamp(0.0, 255.0) as u8;
    Some(format!("{:02x}", clamped))
}

/// `#rrggbb` for three channels
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Option<String> {
    Some(format!(
        "#{}{}{}",
        rgb_channel_to_hex(r)?,
        rgb_channel_to_hex(g)?,
        rgb_channel_to_hex(b)?
    ))
}
