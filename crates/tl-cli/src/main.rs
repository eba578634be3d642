use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::hledger::Report;
use tl_cli::commands::{convert, days, hledger, input};
use tl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr; stdout carries the converted output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let sections = input::read_sections(cli.file.as_deref(), &config.parse_options())?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match &cli.command {
        None => {
            let format = cli.output_format.unwrap_or(config.output_format);
            convert::run(&mut writer, &sections, format)?;
        }
        Some(Commands::Days { json }) => {
            days::run(&mut writer, &sections, *json)?;
        }
        Some(Commands::Summary) => {
            hledger::run(&mut writer, &config, &sections, &Report::Summary)?;
        }
        Some(Commands::Register { period }) => {
            let report = Report::Register {
                period: period.clone(),
            };
            hledger::run(&mut writer, &config, &sections, &report)?;
        }
        Some(Commands::Print { period }) => {
            let report = Report::Print {
                period: period.clone(),
            };
            hledger::run(&mut writer, &config, &sections, &report)?;
        }
        Some(Commands::Balance { period }) => {
            let report = Report::Balance {
                period: period.clone(),
            };
            hledger::run(&mut writer, &config, &sections, &report)?;
        }
    }

    writer.flush()?;
    Ok(())
}
