//! Calendar date type for payment-period calculations.
//!
//! This module provides:
//! - `Date`: Type-safe calendar-day wrapper around chrono::NaiveDate
//! - Checked day and month arithmetic that reports overflow as [`DateError`]
//! - Week, month and year boundary primitives used by the period strategies
//!
//! # Examples
//!
//! ```
//! use payperiod_core::types::time::Date;
//!
//! let date = Date::from_ymd(2024, 2, 15).unwrap();
//!
//! assert_eq!(date.first_day_of_month().to_string(), "2024-02-01");
//! assert_eq!(date.last_day_of_month().unwrap().to_string(), "2024-02-29");
//! ```

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date without a time-of-day component.
///
/// Pay-period boundaries are whole calendar days in the viewer's timezone,
/// so this wrapper never carries an offset. It serialises as ISO 8601
/// (`YYYY-MM-DD`), which keeps a formatted boundary stable no matter which
/// timezone parses it back.
///
/// # Examples
///
/// ```
/// use payperiod_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 1, 17).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 1);
/// assert_eq!(date.day(), 17);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-01-17".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let later = Date::from_ymd(2024, 1, 28).unwrap();
/// assert_eq!(later - date, 11);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on the machine's local timezone.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Returns the calendar day an instant falls on in the given timezone.
    ///
    /// A pay period belongs to the viewer's local day, not the UTC day:
    /// 03:00 UTC on the 18th is still the 17th in Los Angeles.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use payperiod_core::types::time::Date;
    ///
    /// let instant = Utc.with_ymd_and_hms(2024, 1, 18, 3, 0, 0).unwrap();
    /// let la = Date::from_instant(instant, &chrono_tz::America::Los_Angeles);
    /// assert_eq!(la.to_string(), "2024-01-17");
    /// ```
    pub fn from_instant(instant: DateTime<Utc>, timezone: &Tz) -> Self {
        Date(instant.with_timezone(timezone).date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-02-29").unwrap();
    /// assert_eq!(date.day(), 29);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the weekday as 0 = Sunday .. 6 = Saturday.
    pub fn zero_based_weekday(&self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Returns the date `days` calendar days later.
    pub fn add_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("adding {} days to {}", days, self)))
    }

    /// Returns the date `days` calendar days earlier.
    pub fn sub_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_sub_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| {
                DateError::OutOfRange(format!("subtracting {} days from {}", days, self))
            })
    }

    /// Returns the date `months` calendar months later.
    ///
    /// The day is clamped to the end of the target month (Jan 31 + 1 month = Feb 29 in 2024).
    pub fn add_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("adding {} months to {}", months, self)))
    }

    /// Returns the date `months` calendar months earlier, clamping the day like [`Date::add_months`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 3, 31).unwrap();
    /// assert_eq!(date.sub_months(1).unwrap().to_string(), "2024-02-29");
    /// ```
    pub fn sub_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_sub_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| {
                DateError::OutOfRange(format!("subtracting {} months from {}", months, self))
            })
    }

    /// Returns the first day of this date's month.
    pub fn first_day_of_month(&self) -> Self {
        // Day 1 exists in every month
        Date(self.0 - Days::new(u64::from(self.0.day() - 1)))
    }

    /// Returns the last day of this date's month, accounting for leap years.
    ///
    /// Fails only for the final month of chrono's supported range.
    pub fn last_day_of_month(&self) -> Result<Self, DateError> {
        self.first_day_of_month().add_months(1)?.sub_days(1)
    }

    /// Returns January 1 of this date's year.
    pub fn first_day_of_year(&self) -> Self {
        Date(self.0 - Days::new(u64::from(self.0.ordinal0())))
    }

    /// Returns the first day of the week containing this date.
    ///
    /// `week_starts_on` follows the zero-based convention, 0 = Sunday .. 6 = Saturday.
    /// Translate ISO cycle start days with
    /// [`to_zero_based_weekday`](crate::types::weekday::to_zero_based_weekday) first.
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_core::types::time::Date;
    ///
    /// let wednesday = Date::from_ymd(2024, 1, 17).unwrap();
    ///
    /// // Monday-start week
    /// assert_eq!(wednesday.start_of_week(1).unwrap().to_string(), "2024-01-15");
    /// // Sunday-start week
    /// assert_eq!(wednesday.start_of_week(0).unwrap().to_string(), "2024-01-14");
    /// ```
    pub fn start_of_week(&self, week_starts_on: u8) -> Result<Self, DateError> {
        if week_starts_on > 6 {
            return Err(DateError::InvalidWeekStart(week_starts_on));
        }

        let offset = (self.zero_based_weekday() + 7 - week_starts_on) % 7;
        self.sub_days(u64::from(offset))
    }

    /// Returns the last day of the week containing this date (start of week + 6 days).
    pub fn end_of_week(&self, week_starts_on: u8) -> Result<Self, DateError> {
        self.start_of_week(week_starts_on)?.add_days(6)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
