//! Sources of the reference date.
//!
//! Period calculations default to "today". What counts as today depends on
//! the viewer's timezone, so the clock resolves the current instant to a
//! calendar day in a configured IANA zone, or in the machine's local zone.
//! Tests inject a [`FixedClock`] instead.

use chrono::Utc;
use chrono_tz::Tz;

use super::error::ConfigurationError;
use super::time::Date;

/// A source of the current calendar date.
pub trait Clock {
    /// Returns today's date as seen by the viewer.
    fn today(&self) -> Date;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Wall clock resolved in a timezone.
///
/// # Examples
///
/// ```
/// use payperiod_core::types::clock::{Clock, SystemClock};
///
/// let clock = SystemClock::in_timezone(chrono_tz::Europe::Berlin);
/// let today = clock.today();
/// assert!(today.year() >= 2024);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Option<Tz>,
}

impl SystemClock {
    /// Clock reading the machine's local timezone.
    pub fn local() -> Self {
        Self { timezone: None }
    }

    /// Clock reading the given IANA timezone.
    pub fn in_timezone(timezone: Tz) -> Self {
        Self {
            timezone: Some(timezone),
        }
    }

    /// Returns the configured timezone, `None` for machine-local.
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        match &self.timezone {
            Some(tz) => Date::from_instant(Utc::now(), tz),
            None => Date::today(),
        }
    }
}

/// Clock frozen on a single date.
///
/// # Examples
///
/// ```
/// use payperiod_core::types::clock::{Clock, FixedClock};
/// use payperiod_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 17).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Date);

impl FixedClock {
    /// Creates a clock that always returns `date`.
    pub fn new(date: Date) -> Self {
        FixedClock(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// Parses an IANA timezone name such as `America/Chicago`.
///
/// # Errors
///
/// Returns `ConfigurationError::UnknownTimezone` for names chrono-tz does not know.
pub fn parse_timezone(name: &str) -> Result<Tz, ConfigurationError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigurationError::UnknownTimezone(name.to_string()))
}
