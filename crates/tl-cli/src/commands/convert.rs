//! Plain conversion to the timelog or timeclock format.

use std::io::Write;

use anyhow::Result;
use tl_core::{DaySection, format_timeclock, format_timelog};

use crate::OutputFormat;

/// Renders all sections in `format` and writes them out.
///
/// The whole output is rendered before anything is written, so a bad
/// section leaves the writer untouched.
pub fn run<W: Write>(writer: &mut W, sections: &[DaySection], format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Timelog => format_timelog(sections)?,
        OutputFormat::Timeclock => format_timeclock(sections)?,
    };
    writer.write_all(output.as_bytes())?;
    Ok(())
}
