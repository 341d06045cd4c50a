//! Approximate Julian day → Gregorian date

/// Julian day number of the Unix epoch (1970-01-01T00:00:00Z)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Milliseconds per day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Largest representable distance from the epoch (±100,000,000 days)
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Convert a Julian day to a proleptic Gregorian `YYYY-MM-DD` date.
///
/// The day offset is turned into epoch milliseconds (truncated toward zero)
/// and floored to a whole day. Years outside 0..=9999 use the extended
/// `±YYYYYY` form. Returns `None` outside the representable date range.
pub fn julian_to_gregorian(jd: f64) -> Option<String> {
    let millis = (jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY;
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }

    let millis = millis.trunc() as i64;
    let days = millis.div_euclid(MILLIS_PER_DAY as i64);
    let (year, month, day) = civil_from_days(days);
    Some(format_date(year, month, day))
}

fn format_date(year: i64, month: u32, day: u32) -> String {
    if (0..=9999).contains(&year) {
        format!("{:04}-{:02}-{:02}", year, month, day)
    } else {
        format!("{:+07}-{:02}-{:02}", year, month, day)
    }
}

/// Convert days since Unix epoch to (year, month, day)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}
