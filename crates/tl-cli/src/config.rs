//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tl_core::{DEFAULT_SEPARATOR, ParseOptions};

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Separator between category path segments in event lines.
    pub separator: String,

    /// Output format used when `--output-format` is not given.
    pub output_format: OutputFormat,

    /// hledger executable used by the reporting subcommands.
    pub hledger_path: PathBuf,

    /// Top-level accounts hidden from hledger reports.
    pub excluded_accounts: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("separator", &self.separator)
            .field("output_format", &self.output_format)
            .field("hledger_path", &self.hledger_path)
            .field("excluded_accounts", &self.excluded_accounts)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            output_format: OutputFormat::Timeclock,
            hledger_path: PathBuf::from("hledger"),
            excluded_accounts: vec!["Break".to_string(), "Lunch".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TIMELOG_*)
        figment = figment.merge(Env::prefixed("TIMELOG_"));

        figment.extract()
    }

    /// Options for the time log parser.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            separator: self.separator.clone(),
        }
    }
}

/// Returns the platform-specific config directory for timelog.
///
/// On Linux: `~/.config/timelog`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timelog"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.separator, " - ");
        assert_eq!(config.output_format, OutputFormat::Timeclock);
        assert_eq!(config.hledger_path, PathBuf::from("hledger"));
        assert_eq!(config.excluded_accounts, ["Break", "Lunch"]);
    }

    #[test]
    fn test_default_parse_options() {
        assert_eq!(Config::default().parse_options(), ParseOptions::default());
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
separator = " / "
output_format = "timelog"
excluded_accounts = ["Break"]
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.separator, " / ");
        assert_eq!(config.output_format, OutputFormat::Timelog);
        assert_eq!(config.excluded_accounts, ["Break"]);
        assert_eq!(config.hledger_path, PathBuf::from("hledger"));
    }

    #[test]
    fn test_dirs_config_path_ends_with_timelog() {
        if let Some(path) = dirs_config_path() {
            assert_eq!(path.file_name().unwrap(), "timelog");
        }
    }
}
