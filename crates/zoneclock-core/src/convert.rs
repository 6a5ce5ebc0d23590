//! Timestamp and timezone conversion utility.
//!
//! Pure transformations between instants, Unix timestamps and rendered
//! calendar strings. All timezone-rule data and offset math comes from the
//! `jiff` engine; this module supplies no rules of its own.
//!
//! The two converter directions are deliberately asymmetric:
//!
//! - [`timestamp_to_formatted_time`] accepts an explicit target timezone,
//!   because a timestamp is absolute and can be rendered anywhere.
//! - [`formatted_time_to_timestamp`] always interprets its input in the
//!   viewer's own local timezone and accepts no timezone parameter, keeping
//!   the reverse direction unambiguous.

use jiff::{civil, tz::TimeZone, Timestamp, Zoned};
use log::debug;

use crate::{
    error::{ClockError, Result, TimeResultExt},
    locale::Language,
};

/// Unit auto-detection boundary for numeric timestamps.
///
/// Values strictly greater than this are interpreted as milliseconds since
/// epoch, all others as seconds. In seconds-units the boundary sits around
/// the year 2286, far enough out to disambiguate typical 10-digit second
/// timestamps from 13-digit millisecond ones. Inputs meaning
/// 9,999,999,999..=10,000,000,000 *seconds* are misread as milliseconds;
/// that dead zone is a known property of the heuristic and is kept as-is.
pub const MILLISECOND_THRESHOLD: i64 = 10_000_000_000;

/// Which calendar fields a formatted string should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFields {
    /// `HH:MM:SS`, 24-hour
    Time,
    /// Abbreviated weekday, year, month, day
    Date,
    /// Full date and time, 24-hour
    DateTime,
}

/// Detect the host environment's default timezone identifier.
///
/// Returns the IANA name of the system timezone. When the platform cannot
/// name its zone (jiff then falls back to UTC internally), the neutral
/// `"UTC"` identifier is returned, so the result is always non-empty.
pub fn detect_local_timezone() -> String {
    TimeZone::system().iana_name().unwrap_or("UTC").to_string()
}

/// Resolve a timezone identifier, falling back to the system zone.
///
/// Empty or unresolvable identifiers never fail formatting; they degrade to
/// the host's own local timezone, mirroring how the selection surface treats
/// an unknown detected zone.
fn resolve_zone(timezone_id: &str) -> TimeZone {
    if timezone_id.is_empty() {
        return TimeZone::system();
    }
    match TimeZone::get(timezone_id) {
        Ok(tz) => tz,
        Err(err) => {
            debug!("timezone '{timezone_id}' not resolvable ({err}), using system zone");
            TimeZone::system()
        }
    }
}

/// Render an instant in a target timezone using the language's conventions.
///
/// `En` renders dates as `Mon, Jan 1, 2024` and date-times as
/// `01/01/2024, 00:00:00`; `Zh` renders `2024年1月1日 周一` and
/// `2024/01/01 00:00:00`. Time-only output is `HH:MM:SS` in both.
pub fn format_instant(
    instant: Timestamp,
    timezone_id: &str,
    language: Language,
    fields: FormatFields,
) -> String {
    let zoned = instant.to_zoned(resolve_zone(timezone_id));
    match fields {
        FormatFields::Time => zoned.strftime("%H:%M:%S").to_string(),
        FormatFields::Date => format_date(&zoned, language),
        FormatFields::DateTime => match language {
            Language::En => zoned.strftime("%m/%d/%Y, %H:%M:%S").to_string(),
            Language::Zh => zoned.strftime("%Y/%m/%d %H:%M:%S").to_string(),
        },
    }
}

fn format_date(zoned: &Zoned, language: Language) -> String {
    let weekday = zoned.weekday().to_monday_zero_offset() as usize;
    match language {
        Language::En => format!(
            "{}, {} {}, {}",
            language.weekday_abbrev(weekday),
            language.month_abbrev(zoned.month() as usize),
            zoned.day(),
            zoned.year()
        ),
        Language::Zh => format!(
            "{}年{}月{}日 {}",
            zoned.year(),
            zoned.month(),
            zoned.day(),
            language.weekday_abbrev(weekday)
        ),
    }
}

/// The unit a numeric timestamp value is interpreted in.
pub fn unit_of(value: i64) -> &'static str {
    if value > MILLISECOND_THRESHOLD {
        "milliseconds"
    } else {
        "seconds"
    }
}

/// Parse a raw timestamp string into its integer value, rejecting
/// non-integer input.
pub fn parse_raw(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| {
        ClockError::invalid_input("timestamp").with_reason(format!("'{trimmed}' is not an integer"))
    })
}

/// Parse a raw numeric timestamp string into an instant.
///
/// Unit is auto-detected against [`MILLISECOND_THRESHOLD`]. Non-integer
/// input and out-of-range values are rejected as invalid input.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp> {
    let value = parse_raw(raw)?;

    if value > MILLISECOND_THRESHOLD {
        Timestamp::from_millisecond(value).time_context("timestamp out of representable range")
    } else {
        Timestamp::from_second(value).time_context("timestamp out of representable range")
    }
}

/// Convert a raw timestamp string to a formatted local date-time string.
///
/// The target timezone is explicit; 24-hour time is always used.
pub fn timestamp_to_formatted_time(
    raw: &str,
    timezone_id: &str,
    language: Language,
) -> Result<String> {
    let instant = parse_timestamp(raw)?;
    Ok(format_instant(
        instant,
        timezone_id,
        language,
        FormatFields::DateTime,
    ))
}

/// Convert a local calendar string to whole seconds since epoch.
///
/// The string is interpreted as wall-clock time in the viewer's own local
/// timezone; fractional seconds are truncated. Accepted shapes are
/// `YYYY-MM-DDTHH:mm` and `YYYY-MM-DDTHH:mm:ss`, with a space tolerated in
/// place of the `T`.
pub fn formatted_time_to_timestamp(local: &str) -> Result<i64> {
    let trimmed = local.trim();
    if trimmed.is_empty() {
        return Err(ClockError::invalid_input("datetime").with_reason("no date/time provided"));
    }

    let normalized = trimmed.replacen(' ', "T", 1);
    let parsed = civil::DateTime::strptime("%Y-%m-%dT%H:%M:%S", &normalized)
        .or_else(|_| civil::DateTime::strptime("%Y-%m-%dT%H:%M", &normalized))
        .map_err(|_| {
            ClockError::invalid_input("datetime")
                .with_reason(format!("'{trimmed}' is not a YYYY-MM-DDTHH:mm date/time"))
        })?;

    let zoned = parsed
        .to_zoned(TimeZone::system())
        .time_context("date/time not representable in the local timezone")?;
    Ok(zoned.timestamp().as_second())
}

/// Current local wall-clock time as a `YYYY-MM-DDTHH:mm` input string.
///
/// Suitable for pre-filling the converter's date/time field.
pub fn now_as_local_input_string() -> String {
    Zoned::now().strftime("%Y-%m-%dT%H:%M").to_string()
}

/// Live `UTC±H[:MM]` offset label for a timezone at the current instant.
///
/// This is the authoritative offset derived from the rule database, unlike
/// the static label cached in the catalog. Unresolvable identifiers yield
/// the neutral `"UTC+0"`.
pub fn current_utc_offset(timezone_id: &str) -> String {
    utc_offset_at(timezone_id, Timestamp::now())
}

/// `UTC±H[:MM]` offset label for a timezone at a given instant.
pub fn utc_offset_at(timezone_id: &str, instant: Timestamp) -> String {
    let Ok(tz) = TimeZone::get(timezone_id) else {
        return "UTC+0".to_string();
    };
    let seconds = tz.to_offset(instant).seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}
