//! Payment-period calculation.
//!
//! This module provides:
//! - [`PaymentFrequency`]: Pay cadence (Weekly, Biweekly, Monthly)
//! - [`CompanyPaymentConfig`]: Frequency plus cycle start day for one company
//! - [`PaymentSettings`] and [`FrequencyFallback`]: Stored settings and their resolution
//! - [`CalculatedPeriod`] / [`PeriodType`]: Inclusive period boundaries
//! - [`current_period`], [`previous_period`], [`next_period`] and [`PeriodCalculator`]
//! - [`PeriodSchedule`] / [`PeriodScheduleBuilder`]: Contiguous runs of periods
//!
//! # Examples
//!
//! ```
//! use payperiod_models::periods::{
//!     current_period, next_period, previous_period, CompanyPaymentConfig,
//! };
//! use payperiod_core::types::{CycleStartDay, Date};
//!
//! let config = CompanyPaymentConfig::weekly(CycleStartDay::MONDAY);
//! let wednesday = Date::from_ymd(2024, 1, 17).unwrap();
//!
//! let current = current_period(&config, wednesday).unwrap();
//! assert_eq!(current.start_date().to_string(), "2024-01-15");
//! assert_eq!(current.end_date().to_string(), "2024-01-21");
//!
//! let previous = previous_period(&config, wednesday).unwrap();
//! assert_eq!(previous.start_date().to_string(), "2024-01-08");
//!
//! let next = next_period(&config, wednesday).unwrap();
//! assert_eq!(next.end_date().to_string(), "2024-01-28");
//! ```

mod calculator;
mod config;
mod error;
mod frequency;
mod period;
mod schedule;
mod strategy;

pub use calculator::{current_period, next_period, previous_period, PeriodCalculator};
pub use config::{CompanyPaymentConfig, FrequencyFallback, PaymentSettings};
pub use error::{PeriodError, ScheduleError};
pub use frequency::PaymentFrequency;
pub use period::{CalculatedPeriod, PeriodType};
pub use schedule::{PeriodSchedule, PeriodScheduleBuilder};
pub use strategy::{biweekly_period_index, period_bounds};
