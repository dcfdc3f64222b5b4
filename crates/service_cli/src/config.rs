//! CLI configuration management
//!
//! Handles loading configuration from TOML files and CLI arguments. Environment
//! variables arrive through the CLI arguments, which clap fills from `PAYPERIOD_*`.

use payperiod_core::types::{parse_timezone, ConfigurationError, CycleStartDay, SystemClock};
use payperiod_models::periods::{
    CompanyPaymentConfig, FrequencyFallback, PaymentFrequency, PaymentSettings,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Settings(#[from] ConfigurationError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective CLI configuration
///
/// `frequency` and `cycle_start_day` are kept as stored so an unknown
/// frequency reaches [`FrequencyFallback`] instead of failing the load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Stored payment frequency
    pub frequency: String,
    /// Stored ISO cycle start day
    pub cycle_start_day: u8,
    /// Frequency used when `frequency` is not recognised
    #[serde(deserialize_with = "deserialize_frequency")]
    pub default_frequency: PaymentFrequency,
    /// IANA timezone used to resolve "today"; machine local when unset
    pub timezone: Option<String>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_frequency<'de, D>(deserializer: D) -> Result<PaymentFrequency, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    PaymentFrequency::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frequency: PaymentFrequency::Weekly.name().to_string(),
            cycle_start_day: CycleStartDay::MONDAY.get(),
            default_frequency: PaymentFrequency::Weekly,
            timezone: None,
            log_level: LogLevel::Warn,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        CycleStartDay::new(self.cycle_start_day)?;

        if let Some(timezone) = &self.timezone {
            parse_timezone(timezone)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(frequency) = &cli.frequency {
            self.frequency = frequency.clone();
        }
        if let Some(day) = cli.cycle_start_day {
            self.cycle_start_day = day;
        }
        if let Some(default_frequency) = &cli.default_frequency {
            self.default_frequency = PaymentFrequency::from_str(default_frequency)?;
        }
        if let Some(timezone) = &cli.timezone {
            self.timezone = Some(timezone.clone());
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Stored settings as the company-settings store would hold them
    pub fn settings(&self) -> PaymentSettings {
        PaymentSettings::new(self.frequency.clone(), self.cycle_start_day)
    }

    /// Fallback policy for unknown frequencies
    pub fn fallback(&self) -> FrequencyFallback {
        FrequencyFallback::new(self.default_frequency)
    }

    /// Resolve the typed payment configuration
    pub fn payment_config(&self) -> Result<CompanyPaymentConfig, ConfigError> {
        Ok(self.fallback().resolve(&self.settings())?)
    }

    /// Clock resolving "today" in the configured timezone
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        match &self.timezone {
            Some(name) => Ok(SystemClock::in_timezone(parse_timezone(name)?)),
            None => Ok(SystemClock::local()),
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Frequency override
    pub frequency: Option<String>,
    /// Cycle start day override
    pub cycle_start_day: Option<u8>,
    /// Fallback frequency override
    pub default_frequency: Option<String>,
    /// Timezone override
    pub timezone: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments, including their environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
