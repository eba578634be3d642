//! Per-day totals computed directly from the parsed log.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::TimeDelta;
use serde::{Serialize, Serializer};

use crate::duration::format_duration;
use crate::error::TimelogError;
use crate::section::DaySection;

/// Total tracked time for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: String,
    #[serde(serialize_with = "serialize_duration")]
    pub sum: TimeDelta,
}

fn serialize_duration<S: Serializer>(
    duration: &TimeDelta,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}

/// Sums every section's intervals per date.
///
/// Sections sharing a date are merged. The result is ordered by date, and
/// dates without a single interval are left out.
pub fn summarize_days(sections: &[DaySection]) -> Result<Vec<DaySummary>, TimelogError> {
    let mut days: BTreeMap<&str, TimeDelta> = BTreeMap::new();
    for section in sections {
        // Intervals need a start and a following event.
        if section.markers.len() < 2 {
            continue;
        }
        let total = section.total()?;
        *days
            .entry(section.date.as_str())
            .or_insert_with(TimeDelta::zero) += total;
    }

    Ok(days
        .into_iter()
        .map(|(day, sum)| DaySummary {
            day: day.to_string(),
            sum,
        })
        .collect())
}

/// Renders summaries as `<date>: <duration>` lines.
pub fn format_days(days: &[DaySummary]) -> String {
    let mut out = String::new();
    for day in days {
        writeln!(out, "{}: {}", day.day, format_duration(day.sum)).unwrap();
    }
    out
}
