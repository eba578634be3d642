//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Processes a daily time log and generates aggregated event information.
///
/// The time log is read from stdin (or `--file`) and converted to one of:
/// - timelog: a per-day tree of events, summed at every level
/// - timeclock: entries for further processing with hledger
#[derive(Debug, Parser)]
#[command(name = "timelog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read the time log from this file instead of stdin.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format when no subcommand is given.
    #[arg(short = 'O', long, value_enum)]
    pub output_format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print total tracked time per day, without hledger.
    #[command(visible_alias = "d")]
    Days {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print timeclock entries aggregated by day.
    #[command(visible_alias = "sum")]
    Summary,

    /// Print timeclock entries in "hledger register" format.
    #[command(visible_alias = "reg")]
    Register {
        /// Reporting period passed to hledger (e.g. "this week").
        period: Option<String>,
    },

    /// Print timeclock entries in collapsed "hledger print" format.
    #[command(visible_alias = "p")]
    Print {
        /// Reporting period passed to hledger.
        period: Option<String>,
    },

    /// Print timeclock entries in "hledger balance" format.
    #[command(visible_alias = "b")]
    Balance {
        /// Reporting period passed to hledger.
        period: Option<String>,
    },
}

/// Output formats for plain conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-day bullet tree of aggregated events.
    Timelog,
    /// hledger timeclock entries.
    Timeclock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::try_parse_from(["timelog", "-O", "timelog"]).unwrap();
        assert_eq!(cli.output_format, Some(OutputFormat::Timelog));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommand_aliases() {
        let cli = Cli::try_parse_from(["timelog", "reg", "this week"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Register { period: Some(ref p) }) if p == "this week"
        ));

        let cli = Cli::try_parse_from(["timelog", "sum"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["timelog", "-O", "csv"]).is_err());
    }
}
