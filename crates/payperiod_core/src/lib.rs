//! # payperiod_core: Calendar Foundation for Payment-Period Calculation
//!
//! ## Layer 1 (Foundation) Role
//!
//! payperiod_core is the bottom layer of the payperiod workspace, providing:
//! - Date type: `Date` with checked calendar arithmetic (`types::time`)
//! - Weekday conventions: `CycleStartDay`, `to_zero_based_weekday` (`types::weekday`)
//! - Clock abstraction: `Clock`, `SystemClock`, `FixedClock` (`types::clock`)
//! - Error types: `DateError`, `ConfigurationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other payperiod_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - chrono-tz: IANA timezones for the viewer's calendar day
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use payperiod_core::types::{CycleStartDay, Date};
//!
//! // Week containing Wednesday 2024-01-17, starting on Monday
//! let date = Date::from_ymd(2024, 1, 17).unwrap();
//! let start = date.start_of_week(CycleStartDay::MONDAY.zero_based()).unwrap();
//! assert_eq!(start.to_string(), "2024-01-15");
//!
//! // Sunday (7) maps onto the 0-based convention as 0
//! assert_eq!(CycleStartDay::SUNDAY.zero_based(), 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `CycleStartDay`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
