//! Per-day totals computed without hledger.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::{DaySection, format_days, summarize_days};

/// Runs the days command.
pub fn run<W: Write>(writer: &mut W, sections: &[DaySection], json: bool) -> Result<()> {
    let days = summarize_days(sections)?;

    if json {
        let output = serde_json::to_string_pretty(&days).context("failed to encode day totals")?;
        writeln!(writer, "{output}")?;
    } else {
        write!(writer, "{}", format_days(&days))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use tl_core::{ParseOptions, parse_timelog};

    use super::*;

    const INPUT: &str = "\
# 2023-01-03
9:00 Work
12:15 end
# 2023-01-02
9:00 Work
11:30 Lunch
12:00 end
";

    fn render(json: bool) -> String {
        let sections = parse_timelog(INPUT.as_bytes(), &ParseOptions::default()).unwrap();
        let mut output = Vec::new();
        run(&mut output, &sections, json).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_days_text() {
        assert_snapshot!(render(false), @r"
        2023-01-02: 3h
        2023-01-03: 3h15m
        ");
    }

    #[test]
    fn test_days_json() {
        assert_snapshot!(render(true), @r#"
        [
          {
            "day": "2023-01-02",
            "sum": "3h"
          },
          {
            "day": "2023-01-03",
            "sum": "3h15m"
          }
        ]
        "#);
    }
}
