//! Line parser for time logs.
//!
//! A time log is a plain-text file with one section per day:
//!
//! ```text
//! # 2023-01-02
//! 9:00 Work - ProjectA
//! 11:00 Lunch
//! 11:30 end
//! ```
//!
//! Day headers open a new section, event lines are appended to the most
//! recently opened one, and everything else is skipped.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

use crate::duration::parse_time_token;
use crate::error::TimelogError;
use crate::section::{DaySection, EventMarker};

/// `# 2006-01-02`.
static SECTION_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# ([0-9]{4}-[0-9]{2}-[0-9]{2})$").unwrap());

/// `11:00 Daily meeting`.
static SECTION_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9:]+)[ \t]+(.+)$").unwrap());

/// Separator between category path segments.
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Options controlling how event lines are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Splits an event description into its category path.
    pub separator: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Parses a whole time log into day sections.
///
/// Aborts on the first malformed event line; no partial result is returned.
pub fn parse_timelog<R: BufRead>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<Vec<DaySection>, TimelogError> {
    let mut sections: Vec<DaySection> = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        // Notes may be in any encoding; only headers and event lines matter.
        let line = String::from_utf8_lossy(strip_line_ending(&buf));

        if let Some(caps) = SECTION_START_RE.captures(&line) {
            let date = &caps[1];
            tracing::debug!(line = line_number, date, "matched start of day section");
            sections.push(DaySection::new(date));
            continue;
        }

        if let Some(caps) = SECTION_LINE_RE.captures(&line) {
            let (token, description) = (&caps[1], &caps[2]);
            tracing::debug!(
                line = line_number,
                time = token,
                event = description,
                "matched event line"
            );

            let Some(section) = sections.last_mut() else {
                return Err(TimelogError::Structural {
                    line: line_number,
                    text: line.to_string(),
                });
            };
            let start = parse_time_token(token).map_err(|source| TimelogError::Parse {
                line: line_number,
                text: line.to_string(),
                source,
            })?;
            section.markers.push(EventMarker {
                line: line_number,
                start,
                path: split_path(description, &options.separator),
            });
            continue;
        }

        if !line.trim().is_empty() {
            tracing::debug!(line = line_number, text = %line, "ignoring non-timelog line");
        }
    }

    Ok(sections)
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits an event description into category path segments.
fn split_path(description: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![description.to_string()];
    }
    description.split(separator).map(String::from).collect()
}
