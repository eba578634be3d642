//! Core logic for the timelog tool.
//!
//! This crate turns a plain-text daily time log into:
//! - Day sections of timestamped events (`parse`)
//! - An aggregated event tree per day (`tree`), rendered as a bullet outline
//! - Timeclock entries for hledger (`timeclock`)
//! - Per-day totals (`summary`)

pub mod duration;
mod error;
pub mod parse;
mod section;
pub mod summary;
pub mod timeclock;
pub mod tree;

pub use duration::{format_duration, format_hhmm, parse_time_token};
pub use error::{DurationFormatError, TimelogError};
pub use parse::{DEFAULT_SEPARATOR, ParseOptions, parse_timelog};
pub use section::{DaySection, EventMarker, Interval};
pub use summary::{DaySummary, format_days, summarize_days};
pub use timeclock::format_timeclock;
pub use tree::{EventTree, format_timelog};
