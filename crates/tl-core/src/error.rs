//! Error types for parsing and aggregating time logs.

use thiserror::Error;

/// A time token that could not be turned into an offset from midnight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationFormatError {
    /// The token matches none of the accepted shapes.
    #[error("error parsing {token}: string must match 'h:mm', 'hh:mm', 'hmm' or 'hhmm' format")]
    Shape { token: String },

    /// The token has a valid shape but does not denote a time of day.
    #[error("error parsing {token}: {reason}")]
    OutOfRange { token: String, reason: &'static str },
}

/// Errors produced while parsing a time log or deriving intervals from it.
///
/// Every variant aborts the run; nothing is repaired.
#[derive(Debug, Error)]
pub enum TimelogError {
    /// An event line carried a time token the normalizer rejected.
    #[error("error on line {line}: {text}")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: DurationFormatError,
    },

    /// An event line appeared before the first day header.
    #[error(
        "error on line {line}: {text}, encountered a section line before encountering the start of a section"
    )]
    Structural { line: usize, text: String },

    /// Two adjacent events in a day do not move forward in time.
    #[error("{date}, line {line}: event at {start} must start before the next event at {end}")]
    TimeOrder {
        date: String,
        line: usize,
        start: String,
        end: String,
    },

    /// Reading the input failed.
    #[error("failed to read time log: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_keeps_duration_error_as_source() {
        let err = TimelogError::Parse {
            line: 3,
            text: "25:99 Something".to_string(),
            source: DurationFormatError::OutOfRange {
                token: "25:99".to_string(),
                reason: "minutes must be below 60",
            },
        };

        assert_eq!(err.to_string(), "error on line 3: 25:99 Something");
        let source = std::error::Error::source(&err).expect("should have a source");
        assert_eq!(
            source.to_string(),
            "error parsing 25:99: minutes must be below 60"
        );
    }

    #[test]
    fn shape_error_names_token_and_accepted_formats() {
        let shape = DurationFormatError::Shape {
            token: "12345".to_string(),
        };
        assert_eq!(
            shape.to_string(),
            "error parsing 12345: string must match 'h:mm', 'hh:mm', 'hmm' or 'hhmm' format"
        );
    }
}
