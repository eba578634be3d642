//! hledger-backed reports.
//!
//! The time log is converted to timeclock entries and piped into hledger,
//! which does the period filtering and aggregation.

use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tl_core::{DaySection, format_timeclock};

use crate::Config;

/// Makes hledger read timeclock entries from stdin.
const TIMECLOCK_FORMAT: &str = "-ftimeclock:-";

/// Lines of `hledger print` output that make up one transaction.
const PRINT_LINES_PER_ENTRY: usize = 3;

/// An hledger report over the time log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Daily totals: `<date>: <amount> (<running total>)`.
    Summary,
    /// `hledger register`, optionally limited to a period.
    Register { period: Option<String> },
    /// `hledger print`, one transaction per line.
    Print { period: Option<String> },
    /// `hledger balance` as a tree sorted by amount.
    Balance { period: Option<String> },
}

impl Report {
    /// Arguments passed to hledger for this report.
    pub fn args(&self, excluded_accounts: &[String]) -> Vec<String> {
        let (command, extra, period) = match self {
            Self::Summary => ("register", vec!["--daily", "--pivot", "date"], None),
            Self::Register { period } => ("register", Vec::new(), period.as_ref()),
            Self::Print { period } => ("print", Vec::new(), period.as_ref()),
            Self::Balance { period } => {
                ("balance", vec!["--tree", "--sort-amount"], period.as_ref())
            }
        };

        let mut args = vec![TIMECLOCK_FORMAT.to_string(), command.to_string()];
        args.extend(
            excluded_accounts
                .iter()
                .map(|account| format!("not:acct:^{account}")),
        );
        args.extend(extra.into_iter().map(String::from));
        if let Some(period) = period.filter(|p| !p.is_empty()) {
            args.push("-p".to_string());
            args.push(period.clone());
        }
        args
    }

    /// Reshapes hledger's output for display.
    pub fn postprocess(&self, output: &str) -> String {
        match self {
            Self::Summary => format_summary(output),
            Self::Print { .. } => collapse_lines(output, PRINT_LINES_PER_ENTRY),
            Self::Register { .. } | Self::Balance { .. } => output.to_string(),
        }
    }
}

/// Turns `2023-01-02 8.00h 8.00h` into `2023-01-02: 8.00h (8.00h)`.
fn format_summary(output: &str) -> String {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split_whitespace();
            let day = fields.next().unwrap_or_default();
            let amount = fields.next().unwrap_or_default();
            let total = fields.next().unwrap_or_default();
            format!("{day}: {amount} ({total})\n")
        })
        .collect()
}

/// Joins every `n` consecutive lines into one.
fn collapse_lines(output: &str, n: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    lines
        .chunks(n)
        .map(|chunk| format!("{}\n", chunk.concat()))
        .collect()
}

/// Runs `report` over the parsed time log and writes hledger's output.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    sections: &[DaySection],
    report: &Report,
) -> Result<()> {
    let journal = format_timeclock(sections)?;
    let args = report.args(&config.excluded_accounts);
    let output = run_hledger(&config.hledger_path, &args, &journal)?;
    write!(writer, "{}", report.postprocess(&output))?;
    Ok(())
}

/// Pipes `journal` into hledger and returns its stdout.
fn run_hledger(program: &Path, args: &[String], journal: &str) -> Result<String> {
    tracing::debug!(program = %program.display(), ?args, "running hledger");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("failed to start {}", program.display()))?;

    let mut stdin = child.stdin.take().context("failed to capture hledger stdin")?;

    // Feed stdin while stdout is drained, or both pipes fill up on large logs.
    let (written, output) = std::thread::scope(|scope| {
        let feeder = scope.spawn(move || stdin.write_all(journal.as_bytes()));
        let output = child.wait_with_output();
        (feeder.join(), output)
    });

    let output = output.with_context(|| format!("failed to wait for {}", program.display()))?;
    if !output.status.success() {
        anyhow::bail!("{} exited with status {}", program.display(), output.status);
    }
    match written.map_err(|_| anyhow::anyhow!("hledger stdin writer panicked"))? {
        // A successful hledger need not read all of its input.
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("hledger closed stdin early");
        }
        written => written.context("failed to write timeclock entries to hledger")?,
    }

    String::from_utf8(output.stdout).context("hledger output is not valid UTF-8")
}
