//! CLI configuration management.
//!
//! Handles loading of `bsm.toml` with environment variable override support.
//! The `[defaults]` table supplies market inputs for any flag omitted on the
//! command line; absent keys fall back to the pricer's built-in defaults.

use std::path::Path;

use pricer_models::analytical::{
    OptionContract, DEFAULT_DAYS_TO_EXPIRY, DEFAULT_DIVIDEND_YIELD, DEFAULT_RATE, DEFAULT_SPOT,
    DEFAULT_STRIKE, DEFAULT_VOLATILITY,
};
use pricer_models::instruments::OptionType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output rendering for pricing results
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Market inputs used when a contract omits them
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MarketDefaults {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Dividend yield
    pub dividend_yield: f64,
    /// Days to expiry
    pub days_to_expiry: f64,
}

impl Default for MarketDefaults {
    fn default() -> Self {
        Self {
            spot: DEFAULT_SPOT,
            strike: DEFAULT_STRIKE,
            volatility: DEFAULT_VOLATILITY,
            rate: DEFAULT_RATE,
            dividend_yield: DEFAULT_DIVIDEND_YIELD,
            days_to_expiry: DEFAULT_DAYS_TO_EXPIRY,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Market defaults
    #[serde(default)]
    pub defaults: MarketDefaults,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            defaults: MarketDefaults::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name (`BSM_LOG_LEVEL`, `BSM_FORMAT`)
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("BSM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("BSM_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => self.format,
            };
        }

        self
    }

    /// Validate the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        // Defaults must describe a constructible contract
        let d = &self.defaults;
        if let Err(e) = OptionContract::new(
            OptionType::Call,
            d.spot,
            d.strike,
            d.volatility,
            d.rate,
            d.dividend_yield,
            d.days_to_expiry,
        ) {
            errors.push(format!("defaults: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
