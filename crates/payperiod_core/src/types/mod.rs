//! Core calendar types.
//!
//! This module provides:
//! - `time`: `Date`, a calendar-day wrapper around chrono::NaiveDate with checked arithmetic
//! - `weekday`: ISO (1-7) and zero-based (0-6, Sunday first) weekday conventions
//! - `clock`: Sources of "today" resolved in the viewer's timezone
//! - `error`: Structured error types for date and configuration failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`CycleStartDay`], [`to_zero_based_weekday`] from `weekday`
//! - [`Clock`], [`SystemClock`], [`FixedClock`], [`parse_timezone`] from `clock`
//! - [`DateError`], [`ConfigurationError`] from `error`

pub mod clock;
pub mod error;
pub mod time;
pub mod weekday;

// Re-export commonly used types at module level
pub use clock::{parse_timezone, Clock, FixedClock, SystemClock};
pub use error::{ConfigurationError, DateError};
pub use time::Date;
pub use weekday::{to_zero_based_weekday, CycleStartDay};
