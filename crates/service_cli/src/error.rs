//! CLI error types

use payperiod_core::types::DateError;
use payperiod_models::periods::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;
