//! CLI subcommand implementations.

pub mod convert;
pub mod days;
pub mod hledger;
pub mod input;
