//! Timelog CLI library.
//!
//! This crate provides the CLI interface for the timelog tool.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
