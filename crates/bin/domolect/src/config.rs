//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `domolect.toml` in the working directory, or the file named by
//! `DOMOLECT_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::str::FromStr;

use serde::Deserialize;

const DEFAULT_PATH: &str = "domolect.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interactive prompt settings.
    pub repl: ReplConfig,
    /// Result rendering settings.
    pub output: OutputConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Device driver toggles.
    pub driver: DriverConfig,
}

/// REPL configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Printed before every line read.
    pub prompt: String,
    /// Printed once on start-up.
    pub banner: String,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How a recognised command is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Multi-line simulated execution description.
    #[default]
    Text,
    /// The parsed command as a single JSON line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Device driver toggles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Dispatch recognised commands to the in-memory virtual driver.
    pub virtual_enabled: bool,
}

impl Config {
    /// Load configuration from `domolect.toml` (or `$DOMOLECT_CONFIG`) if
    /// present, then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("DOMOLECT_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("DOMOLECT_PROMPT") {
            self.repl.prompt = val;
        }
        if let Some(val) = var("DOMOLECT_OUTPUT") {
            self.output.format = val.parse()?;
        }
        if let Some(val) = var("DOMOLECT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("DOMOLECT_VIRTUAL_DRIVER") {
            self.driver.virtual_enabled = parse_flag(&val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.repl.prompt.is_empty() {
            return Err(ConfigError::Validation(
                "prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Validation(format!(
            "expected a boolean, got: {other}"
        ))),
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            banner: "Welcome to the Domolect 2.0 REPL. Type 'exit' to quit.".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domolect=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
