//! Application configuration loaded from TOML and overridden by the CLI.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::Mode;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause before the AI plays, in milliseconds.
    ai_delay_ms: u64,

    /// Start directly in this mode instead of showing the menu.
    default_mode: Option<Mode>,

    /// Whether the scoreboard starts visible.
    show_scoreboard: bool,

    /// Log file path.
    log_file: PathBuf,

    /// Fixed seed for the AI's random tie-breaks.
    seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            default_mode: None,
            show_scoreboard: true,
            log_file: PathBuf::from("tictactoe.log"),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Without one, `tictactoe.toml` in
    /// the working directory is used if present, defaults otherwise. CLI
    /// flags win over file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_overrides(cli))
    }

    /// Applies CLI flags on top of this config.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.default_mode = Some(mode.into());
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = cli.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        self
    }

    /// AI pause as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.ai_delay_ms(), 500);
        assert!(*config.show_scoreboard());
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let cli = Cli {
            mode: Some(ModeArg::TwoPlayer),
            seed: Some(3),
            ai_delay_ms: Some(0),
            log_file: Some(PathBuf::from("x.log")),
            ..Cli::default()
        };
        let config = AppConfig::default().with_overrides(&cli);
        assert_eq!(*config.default_mode(), Some(Mode::TwoPlayer));
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.ai_delay_ms(), 0);
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("ai_delay_ms = 50").unwrap();
        assert_eq!(*config.ai_delay_ms(), 50);
        assert!(*config.show_scoreboard());
        assert_eq!(*config.default_mode(), None);
    }
}
