//! Display dates derived from epoch-second timestamps
//!
//! Formatting never fails: anything that does not yield a valid date
//! becomes [`NOT_AVAILABLE`].

use chrono::{DateTime, Utc};

/// Placeholder shown when a timestamp is missing or unusable
pub const NOT_AVAILABLE: &str = "N/A";

/// How long a resolution stays at vote once promoted (four days)
pub const VOTING_PERIOD_SECS: i64 = 345_600;

/// Largest magnitude of epoch milliseconds a browser date accepts
const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Parse the leading integer of `value`, the way a lenient integer parse
/// would: leading whitespace and one sign are accepted, and parsing stops
/// at the first non-digit. Returns `None` when no digits are found or the
/// number does not fit in an `i64`.
///
/// ```
/// use wavotes_core::timestamp::parse_epoch_seconds;
///
/// assert_eq!(parse_epoch_seconds("1700000000"), Some(1_700_000_000));
/// assert_eq!(parse_epoch_seconds("  -12abc"), Some(-12));
/// assert_eq!(parse_epoch_seconds("abc"), None);
/// ```
pub fn parse_epoch_seconds(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Convert epoch seconds to a UTC date time, rejecting values a browser
/// date could not represent.
fn to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    let millis = seconds.checked_mul(1000)?;
    if millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Format epoch seconds as a `YYYY-MM-DD` UTC date, or `"N/A"`.
///
/// ```
/// use wavotes_core::timestamp::timestamp_to_date;
///
/// assert_eq!(timestamp_to_date("0"), "1970-01-01");
/// assert_eq!(timestamp_to_date(""), "N/A");
/// assert_eq!(timestamp_to_date("not-a-number"), "N/A");
/// ```
pub fn timestamp_to_date(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    parse_epoch_seconds(timestamp)
        .and_then(to_datetime)
        .map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Date the vote on a resolution closes, given its promotion timestamp.
pub fn voting_end_date(promoted: &str) -> String {
    parse_epoch_seconds(promoted)
        .and_then(|s| s.checked_add(VOTING_PERIOD_SECS))
        .and_then(to_datetime)
        .map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
