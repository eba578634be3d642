//! Time token normalization and duration formatting.
//!
//! Event lines start with a wall-clock token such as `9:00`, `0930` or `930`.
//! These are turned into an offset from midnight so that adjacent events can
//! be subtracted from each other.

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;

use crate::error::DurationFormatError;

/// `9:00` or `11:00`.
static HH_COLON_MM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").unwrap());

/// `1100`.
static HHMM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]{2})([0-9]{2})$").unwrap());

/// `900`.
static HMM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9])([0-9]{2})$").unwrap());

const MINUTES_PER_HOUR: i64 = 60;

/// Latest accepted offset: 24:00 closes the day.
const MAX_OFFSET_MINUTES: i64 = 24 * MINUTES_PER_HOUR;

/// Parses a time token into an offset from midnight.
///
/// Accepts `h:mm`, `hh:mm`, `hhmm` and `hmm`. The result must be a time of
/// day between `00:00` and `24:00` inclusive.
pub fn parse_time_token(token: &str) -> Result<TimeDelta, DurationFormatError> {
    let caps = [&*HH_COLON_MM_RE, &*HHMM_RE, &*HMM_RE]
        .into_iter()
        .find_map(|re| re.captures(token))
        .ok_or_else(|| DurationFormatError::Shape {
            token: token.to_string(),
        })?;

    let hours: i64 = caps[1]
        .parse()
        .map_err(|_| out_of_range(token, "hours are not a number"))?;
    let minutes: i64 = caps[2]
        .parse()
        .map_err(|_| out_of_range(token, "minutes are not a number"))?;

    if minutes >= MINUTES_PER_HOUR {
        return Err(out_of_range(token, "minutes must be below 60"));
    }
    let total = hours * MINUTES_PER_HOUR + minutes;
    if total > MAX_OFFSET_MINUTES {
        return Err(out_of_range(token, "time must not be later than 24:00"));
    }

    Ok(TimeDelta::minutes(total))
}

fn out_of_range(token: &str, reason: &'static str) -> DurationFormatError {
    DurationFormatError::OutOfRange {
        token: token.to_string(),
        reason,
    }
}

/// Formats a duration as `XhYmZs`, dropping trailing zero components.
///
/// `8h0m0s` becomes `8h`, `30m0s` becomes `30m`, `1h0m30s` is kept as is.
/// The zero duration is `0s`.
pub fn format_duration(duration: TimeDelta) -> String {
    drop_trailing_zeros(human_duration(duration))
}

fn human_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

fn drop_trailing_zeros(mut formatted: String) -> String {
    if formatted == "0s" {
        return formatted;
    }
    if formatted.ends_with("m0s") {
        formatted.truncate(formatted.len() - 2);
    }
    if formatted.ends_with("h0m") {
        formatted.truncate(formatted.len() - 2);
    }
    formatted
}

/// Formats an offset from midnight as zero-padded `HH:MM`.
pub fn format_hhmm(offset: TimeDelta) -> String {
    let total = offset.num_minutes();
    let hours = total / MINUTES_PER_HOUR;
    let minutes = total % MINUTES_PER_HOUR;
    format!("{hours:02}:{minutes:02}")
}
