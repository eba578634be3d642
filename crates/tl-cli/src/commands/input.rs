//! Reading the time log from stdin or a file.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tl_core::{DaySection, ParseOptions, parse_timelog};

/// Parses the time log from `file`, or from stdin when no file is given.
pub fn read_sections(file: Option<&Path>, options: &ParseOptions) -> Result<Vec<DaySection>> {
    let sections = match file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            parse_timelog(BufReader::new(file), options)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => parse_timelog(io::stdin().lock(), options)
            .context("failed to parse time log from stdin")?,
    };

    tracing::debug!(sections = sections.len(), "parsed time log");
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_sections_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# 2023-01-02\n9:00 Work\n10:00 end\n").unwrap();
        file.flush().unwrap();

        let sections = read_sections(Some(file.path()), &ParseOptions::default()).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].markers.len(), 2);
    }

    #[test]
    fn test_read_sections_reports_path_and_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# 2023-01-02\n25:99 Something\n").unwrap();
        file.flush().unwrap();

        let err = read_sections(Some(file.path()), &ParseOptions::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("error on line 2: 25:99 Something"));
        assert!(message.contains("minutes must be below 60"));
    }

    #[test]
    fn test_read_sections_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.md");

        let err = read_sections(Some(&missing), &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
