//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and arithmetic
//! - `ConfigurationError`: Errors from company payment settings

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `OutOfRange`: Arithmetic left the representable calendar range
/// - `InvalidWeekStart`: Zero-based week start outside 0..=6
///
/// # Examples
/// ```
/// use payperiod_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic overflowed the supported calendar range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),

    /// Week start outside the zero-based 0 (Sunday) ..= 6 (Saturday) range.
    #[error("Invalid week start: {0}. Must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidWeekStart(u8),
}

/// Company payment configuration errors.
///
/// Raised while turning stored payment settings into a typed configuration.
/// An unknown frequency is only an error for strict parsing; settings
/// resolution substitutes a fallback frequency instead.
///
/// # Examples
/// ```
/// use payperiod_core::types::ConfigurationError;
///
/// let err = ConfigurationError::InvalidCycleStartDay(9);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid cycle start day: 9. Must be between 1 (Monday) and 7 (Sunday)"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Frequency string is not one of weekly, biweekly or monthly.
    #[error("Unknown payment frequency: {0}")]
    UnknownFrequency(String),

    /// Cycle start day outside 1..=7.
    #[error("Invalid cycle start day: {0}. Must be between 1 (Monday) and 7 (Sunday)")]
    InvalidCycleStartDay(u8),

    /// Timezone name is not a known IANA zone.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}
