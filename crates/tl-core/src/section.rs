//! Day sections and the intervals between their events.

use chrono::TimeDelta;

use crate::duration::format_hhmm;
use crate::error::TimelogError;

/// One `# YYYY-MM-DD` block of the time log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    /// The date label exactly as written in the header.
    pub date: String,

    /// Events in input order.
    pub markers: Vec<EventMarker>,
}

/// A single event line: when it started and what it was about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMarker {
    /// Input line the event came from (1-based).
    pub line: usize,

    /// Offset from midnight.
    pub start: TimeDelta,

    /// Category path, outermost category first.
    pub path: Vec<String>,
}

/// The span between two adjacent events, attributed to the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<'a> {
    pub start: TimeDelta,
    pub end: TimeDelta,
    pub path: &'a [String],
}

impl Interval<'_> {
    /// Length of the interval. Always positive for intervals produced by
    /// [`DaySection::intervals`].
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl DaySection {
    /// Creates an empty section for the given date.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            markers: Vec::new(),
        }
    }

    /// Derives the intervals between adjacent events.
    ///
    /// The last event only closes the previous interval. Fails if an event
    /// does not start strictly after the one before it; duplicated times are
    /// rejected rather than producing empty intervals.
    pub fn intervals(&self) -> Result<Vec<Interval<'_>>, TimelogError> {
        self.markers
            .windows(2)
            .map(|pair| {
                let (current, next) = (&pair[0], &pair[1]);
                if current.start >= next.start {
                    return Err(TimelogError::TimeOrder {
                        date: self.date.clone(),
                        line: current.line,
                        start: format_hhmm(current.start),
                        end: format_hhmm(next.start),
                    });
                }
                Ok(Interval {
                    start: current.start,
                    end: next.start,
                    path: &current.path,
                })
            })
            .collect()
    }

    /// Sum of all interval durations in this section.
    pub fn total(&self) -> Result<TimeDelta, TimelogError> {
        Ok(self
            .intervals()?
            .iter()
            .map(Interval::duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::section;
    use super::*;

    #[test]
    fn test_intervals_pair_adjacent_events() {
        let day = section(
            "2023-01-02",
            &[(9, 0, "Work - A"), (11, 0, "Lunch"), (11, 30, "end")],
        );

        let intervals = day.intervals().unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].duration(), TimeDelta::hours(2));
        assert_eq!(intervals[0].path, ["Work", "A"]);
        assert_eq!(intervals[1].duration(), TimeDelta::minutes(30));
        assert_eq!(intervals[1].path, ["Lunch"]);
    }

    #[test]
    fn test_single_event_has_no_intervals() {
        let day = section("2023-01-02", &[(9, 0, "Work")]);
        assert!(day.intervals().unwrap().is_empty());
        assert_eq!(day.total().unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_empty_section_has_no_intervals() {
        let day = DaySection::new("2023-01-02");
        assert!(day.intervals().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_times_are_rejected() {
        let day = section("2023-01-02", &[(10, 0, "A"), (10, 0, "B"), (11, 0, "end")]);

        let err = day.intervals().unwrap_err();
        assert!(matches!(
            err,
            TimelogError::TimeOrder { ref date, line: 2, .. } if date == "2023-01-02"
        ));
        assert_eq!(
            err.to_string(),
            "2023-01-02, line 2: event at 10:00 must start before the next event at 10:00"
        );
    }

    #[test]
    fn test_backwards_times_are_rejected() {
        let day = section("2023-01-02", &[(10, 0, "A"), (9, 0, "B")]);
        assert!(matches!(
            day.intervals(),
            Err(TimelogError::TimeOrder { .. })
        ));
        assert!(day.total().is_err());
    }

    #[test]
    fn test_total_sums_intervals() {
        let day = section(
            "2023-01-02",
            &[(9, 0, "A"), (9, 45, "B"), (12, 0, "C"), (12, 10, "end")],
        );
        assert_eq!(day.total().unwrap(), TimeDelta::minutes(190));
    }
}
