//! Unix timestamp conversion
//!
//! Accepts a bare number (seconds or milliseconds, auto-detected by
//! magnitude) or an RFC 3339 date string, and reports every rendering the
//! timestamp page shows.

use crate::error::InspectError;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

/// Inputs at or above this magnitude are treated as milliseconds
/// (10^12 seconds is the year 33658)
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampInfo {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
    pub weekday: String,
    /// True when the input number was interpreted as milliseconds
    pub interpreted_as_millis: bool,
}

/// Convert a timestamp or RFC 3339 string into the full report
pub fn convert_timestamp(input: &str) -> Result<TimestampInfo, InspectError> {
    let input = input.trim();

    if let Ok(raw) = input.parse::<i64>() {
        let as_millis = raw.abs() >= MILLIS_THRESHOLD;
        let (seconds, millis) = if as_millis {
            (raw.div_euclid(1000), raw)
        } else {
            (raw, raw.saturating_mul(1000))
        };
        let datetime = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .ok_or_else(|| InspectError::Timestamp(format!("{} is out of range", raw)))?;
        return Ok(info_for(datetime, millis, as_millis));
    }

    let datetime = DateTime::parse_from_rfc3339(input)
        .map_err(|e| InspectError::Timestamp(format!("{:?}: {}", input, e)))?
        .with_timezone(&Utc);
    Ok(info_for(datetime, datetime.timestamp_millis(), false))
}

fn info_for(datetime: DateTime<Utc>, millis: i64, as_millis: bool) -> TimestampInfo {
    TimestampInfo {
        unix_seconds: datetime.timestamp(),
        unix_millis: millis,
        rfc3339: datetime.to_rfc3339(),
        weekday: datetime.weekday().to_string(),
        interpreted_as_millis: as_millis,
    }
}

/// Humanised offset between two Unix timestamps, e.g. "3 hours ago"
pub fn relative_from(timestamp: i64, now: i64) -> String {
    let delta = now - timestamp;
    let (magnitude, past) = (delta.abs(), delta >= 0);

    let phrase = match magnitude {
        0..=4 => return "just now".to_string(),
        5..=59 => plural(magnitude, "second"),
        60..=3_599 => plural(magnitude / 60, "minute"),
        3_600..=86_399 => plural(magnitude / 3_600, "hour"),
        86_400..=2_591_999 => plural(magnitude / 86_400, "day"),
        2_592_000..=31_535_999 => plural(magnitude / 2_592_000, "month"),
        _ => plural(magnitude / 31_536_000, "year"),
    };

    if past {
        format!("{} ago", phrase)
    } else {
        format!("in {}", phrase)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
