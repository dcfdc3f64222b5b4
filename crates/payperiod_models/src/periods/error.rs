//! Period and period schedule error types.

use payperiod_core::types::{Date, DateError};
use thiserror::Error;

/// Errors that can occur while constructing a period.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// The end date lies before the start date.
    #[error("Period end {end} is before its start {start}")]
    EndBeforeStart {
        /// The first day of the period.
        start: Date,
        /// The last day of the period.
        end: Date,
    },
}

/// Errors that can occur while building a period schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The `until` date lies before the `from` date.
    #[error("Schedule start {from} must not be after end {until}")]
    InvalidDateRange {
        /// The first reference date.
        from: Date,
        /// The last reference date.
        until: Date,
    },

    /// Both an end date and a period count were supplied.
    #[error("Schedule takes either an end date or a period count, not both")]
    ConflictingBounds,

    /// Schedule would generate no periods.
    #[error("Schedule would generate no periods starting {from}")]
    NoPeriods {
        /// The first reference date.
        from: Date,
    },

    /// Date arithmetic failed while walking periods.
    #[error(transparent)]
    Date(#[from] DateError),
}
