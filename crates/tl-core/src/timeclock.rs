//! Timeclock output format, as read by `hledger -ftimeclock:-`.
//!
//! Each interval becomes a clock-in line naming the account and a clock-out
//! line:
//!
//! ```text
//! i 2023-01-02 09:00 Work:ProjectA
//! o 2023-01-02 11:00
//! ```

use std::fmt::Write;

use crate::duration::format_hhmm;
use crate::error::TimelogError;
use crate::section::DaySection;

/// Separator between account name components.
pub const ACCOUNT_SEPARATOR: &str = ":";

/// Renders all sections as timeclock entries.
///
/// Intervals are validated the same way as for the event tree, so entries
/// that would run backwards are rejected instead of emitted.
pub fn format_timeclock(sections: &[DaySection]) -> Result<String, TimelogError> {
    let mut out = String::new();
    for section in sections {
        for interval in section.intervals()? {
            writeln!(
                out,
                "i {} {} {}",
                section.date,
                format_hhmm(interval.start),
                interval.path.join(ACCOUNT_SEPARATOR)
            )
            .unwrap();
            writeln!(out, "o {} {}", section.date, format_hhmm(interval.end)).unwrap();
        }
    }
    Ok(out)
}
