//! Parsing of `Expires` response headers.
//!
//! ESI reports cache lifetime as an RFC 1123 date with a zone abbreviation,
//! e.g. `Thu, 09 Nov 2017 17:27:14 GMT`. Only that one layout is accepted.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

use crate::error::{EsiError, Result};

/// Layout of the date and time between the weekday and the zone abbreviation.
const EXPIRES_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Weekday names; the weekday must be one of these but is not checked
/// against the date.
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parse an `Expires` header value into an absolute UTC timestamp.
///
/// # Errors
///
/// Returns [`EsiError::InvalidExpiry`] when the value is not in
/// `Mon, 02 Jan 2006 15:04:05 MST` form or the zone is not recognized.
pub fn parse_expiry(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    let (stamp, zone) = trimmed
        .rsplit_once(' ')
        .ok_or_else(|| invalid(value, "missing time zone"))?;

    let offset_hours = zone_offset_hours(zone)
        .ok_or_else(|| invalid(value, format!("unrecognized time zone '{}'", zone)))?;

    let (weekday, date) = stamp
        .split_once(", ")
        .ok_or_else(|| invalid(value, "missing weekday"))?;
    if !WEEKDAYS.contains(&weekday) {
        return Err(invalid(value, format!("unrecognized weekday '{}'", weekday)));
    }

    let local = NaiveDateTime::parse_from_str(date, EXPIRES_FORMAT)
        .map_err(|e| invalid(value, e.to_string()))?;

    Ok(Utc.from_utc_datetime(&(local - Duration::hours(offset_hours))))
}

/// UTC offset in hours for the zone abbreviations HTTP dates use.
fn zone_offset_hours(zone: &str) -> Option<i64> {
    let hours = match zone {
        "GMT" | "UTC" | "UT" | "Z" => 0,
        "EDT" => -4,
        "EST" | "CDT" => -5,
        "CST" | "MDT" => -6,
        "MST" | "PDT" => -7,
        "PST" => -8,
        _ => return None,
    };
    Some(hours)
}

fn invalid(value: &str, message: impl Into<String>) -> EsiError {
    EsiError::InvalidExpiry {
        value: value.to_string(),
        message: message.into(),
    }
}
