//! Weekday numbering conventions.
//!
//! Company settings store the cycle start day in ISO numbering
//! (1 = Monday .. 7 = Sunday), while [`Date::start_of_week`](crate::types::time::Date::start_of_week)
//! counts from Sunday (0 = Sunday .. 6 = Saturday). All translation between
//! the two goes through [`to_zero_based_weekday`].

use chrono::Weekday;
use std::fmt;

use super::error::ConfigurationError;

/// Maps an ISO weekday (1 = Monday .. 7 = Sunday) onto the zero-based,
/// Sunday-first convention (0 = Sunday .. 6 = Saturday).
///
/// Sunday (7) becomes 0; every other day keeps its number.
///
/// # Examples
///
/// ```
/// use payperiod_core::types::weekday::to_zero_based_weekday;
///
/// assert_eq!(to_zero_based_weekday(1), 1); // Monday
/// assert_eq!(to_zero_based_weekday(6), 6); // Saturday
/// assert_eq!(to_zero_based_weekday(7), 0); // Sunday
/// ```
#[inline]
pub fn to_zero_based_weekday(day: u8) -> u8 {
    if day == 7 {
        0
    } else {
        day
    }
}

/// Weekday a company's weekly pay period begins on, in ISO numbering.
///
/// Construction validates the 1..=7 range, so period calculations taking a
/// `CycleStartDay` never see an out-of-range weekday.
///
/// # Examples
///
/// ```
/// use payperiod_core::types::CycleStartDay;
/// use chrono::Weekday;
///
/// let day = CycleStartDay::new(7).unwrap();
/// assert_eq!(day, CycleStartDay::SUNDAY);
/// assert_eq!(day.weekday(), Weekday::Sun);
/// assert_eq!(day.zero_based(), 0);
///
/// assert!(CycleStartDay::new(0).is_err());
/// assert!(CycleStartDay::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CycleStartDay(u8);

impl CycleStartDay {
    /// Monday (1).
    pub const MONDAY: CycleStartDay = CycleStartDay(1);
    /// Tuesday (2).
    pub const TUESDAY: CycleStartDay = CycleStartDay(2);
    /// Wednesday (3).
    pub const WEDNESDAY: CycleStartDay = CycleStartDay(3);
    /// Thursday (4).
    pub const THURSDAY: CycleStartDay = CycleStartDay(4);
    /// Friday (5).
    pub const FRIDAY: CycleStartDay = CycleStartDay(5);
    /// Saturday (6).
    pub const SATURDAY: CycleStartDay = CycleStartDay(6);
    /// Sunday (7).
    pub const SUNDAY: CycleStartDay = CycleStartDay(7);

    /// Creates a cycle start day from its ISO number.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCycleStartDay` unless `day` is in 1..=7.
    pub fn new(day: u8) -> Result<Self, ConfigurationError> {
        if (1..=7).contains(&day) {
            Ok(CycleStartDay(day))
        } else {
            Err(ConfigurationError::InvalidCycleStartDay(day))
        }
    }

    /// Creates a cycle start day from a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        CycleStartDay(weekday.number_from_monday() as u8)
    }

    /// Returns the ISO number (1 = Monday .. 7 = Sunday).
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based, Sunday-first number (0 = Sunday .. 6 = Saturday).
    #[inline]
    pub fn zero_based(self) -> u8 {
        to_zero_based_weekday(self.0)
    }

    /// Returns the chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self.0 {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Returns the English day name.
    pub fn name(self) -> &'static str {
        match self.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl Default for CycleStartDay {
    fn default() -> Self {
        CycleStartDay::MONDAY
    }
}

impl TryFrom<u8> for CycleStartDay {
    type Error = ConfigurationError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        CycleStartDay::new(day)
    }
}

impl From<CycleStartDay> for u8 {
    fn from(day: CycleStartDay) -> Self {
        day.0
    }
}

impl fmt::Display for CycleStartDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_zero_based_weekday_full_table() {
        let table = [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 0)];
        for (iso, zero_based) in table {
            assert_eq!(to_zero_based_weekday(iso), zero_based, "ISO day {}", iso);
        }
    }

    #[test]
    fn test_zero_based_matches_chrono() {
        for day in 1..=7 {
            let cycle = CycleStartDay::new(day).unwrap();
            assert_eq!(
                u32::from(cycle.zero_based()),
                cycle.weekday().num_days_from_sunday()
            );
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            CycleStartDay::new(0),
            Err(ConfigurationError::InvalidCycleStartDay(0))
        );
        assert_eq!(
            CycleStartDay::new(8),
            Err(ConfigurationError::InvalidCycleStartDay(8))
        );
        assert!(CycleStartDay::try_from(255u8).is_err());
    }

    #[test]
    fn test_from_weekday_round_trip() {
        for day in 1..=7 {
            let cycle = CycleStartDay::new(day).unwrap();
            assert_eq!(CycleStartDay::from_weekday(cycle.weekday()), cycle);
        }
    }

    #[test]
    fn test_default_is_monday() {
        assert_eq!(CycleStartDay::default(), CycleStartDay::MONDAY);
        assert_eq!(u8::from(CycleStartDay::default()), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(CycleStartDay::SUNDAY.to_string(), "Sunday");
        assert_eq!(CycleStartDay::WEDNESDAY.to_string(), "Wednesday");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_range() {
        let day: CycleStartDay = serde_json::from_str("7").unwrap();
        assert_eq!(day, CycleStartDay::SUNDAY);
        assert_eq!(serde_json::to_string(&day).unwrap(), "7");

        assert!(serde_json::from_str::<CycleStartDay>("0").is_err());
        assert!(serde_json::from_str::<CycleStartDay>("9").is_err());
    }
}
