//! Payment frequency enumeration.

use payperiod_core::types::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// Cadence at which a company generates pay periods.
///
/// Each frequency anchors its periods differently:
/// - `Weekly`: 7-day windows starting on the company's cycle start day
/// - `Biweekly`: 14-day windows counted from January 1 of the reference year
/// - `Monthly`: calendar months
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::PaymentFrequency;
///
/// let freq = PaymentFrequency::Biweekly;
/// assert_eq!(freq.days_per_period(), Some(14));
/// assert_eq!(freq.name(), "biweekly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaymentFrequency {
    /// One period per week.
    #[default]
    Weekly,
    /// One period per fourteen days, reset every January 1.
    Biweekly,
    /// One period per calendar month.
    Monthly,
}

impl PaymentFrequency {
    /// All supported frequencies.
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Weekly,
        PaymentFrequency::Biweekly,
        PaymentFrequency::Monthly,
    ];

    /// Returns the fixed period length in days, `None` for `Monthly`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_models::periods::PaymentFrequency;
    ///
    /// assert_eq!(PaymentFrequency::Weekly.days_per_period(), Some(7));
    /// assert_eq!(PaymentFrequency::Biweekly.days_per_period(), Some(14));
    /// assert_eq!(PaymentFrequency::Monthly.days_per_period(), None);
    /// ```
    #[inline]
    pub fn days_per_period(&self) -> Option<u64> {
        match self {
            PaymentFrequency::Weekly => Some(7),
            PaymentFrequency::Biweekly => Some(14),
            PaymentFrequency::Monthly => None,
        }
    }

    /// Returns whether the company's cycle start day affects this frequency.
    ///
    /// Only weekly periods honour it; biweekly anchors to January 1 and
    /// monthly to the first of the month.
    #[inline]
    pub fn uses_cycle_start_day(&self) -> bool {
        matches!(self, PaymentFrequency::Weekly)
    }

    /// Returns the lowercase wire name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PaymentFrequency {
    type Err = ConfigurationError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Weekly: "weekly", "1w"
    /// - Biweekly: "biweekly", "bi-weekly", "fortnightly", "2w"
    /// - Monthly: "monthly", "1m"
    ///
    /// Parsing is strict; falling back to a default frequency is the job of
    /// [`FrequencyFallback`](super::FrequencyFallback).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "weekly" | "1w" => Ok(PaymentFrequency::Weekly),
            "biweekly" | "fortnightly" | "2w" => Ok(PaymentFrequency::Biweekly),
            "monthly" | "1m" => Ok(PaymentFrequency::Monthly),
            _ => Err(ConfigurationError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_per_period() {
        assert_eq!(PaymentFrequency::Weekly.days_per_period(), Some(7));
        assert_eq!(PaymentFrequency::Biweekly.days_per_period(), Some(14));
        assert_eq!(PaymentFrequency::Monthly.days_per_period(), None);
    }

    #[test]
    fn test_uses_cycle_start_day() {
        assert!(PaymentFrequency::Weekly.uses_cycle_start_day());
        assert!(!PaymentFrequency::Biweekly.uses_cycle_start_day());
        assert!(!PaymentFrequency::Monthly.uses_cycle_start_day());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PaymentFrequency::Weekly), "weekly");
        assert_eq!(format!("{}", PaymentFrequency::Biweekly), "biweekly");
        assert_eq!(format!("{}", PaymentFrequency::Monthly), "monthly");
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!(
            "weekly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Weekly
        );
        assert_eq!(
            "Weekly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Weekly
        );
        assert_eq!(
            "bi-weekly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Biweekly
        );
        assert_eq!(
            "BIWEEKLY".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Biweekly
        );
        assert_eq!(
            "fortnightly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Biweekly
        );
        assert_eq!(
            " monthly ".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Monthly
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "daily".parse::<PaymentFrequency>(),
            Err(ConfigurationError::UnknownFrequency("daily".to_string()))
        );
        assert!("".parse::<PaymentFrequency>().is_err());
        assert!("quarterly".parse::<PaymentFrequency>().is_err());
    }

    #[test]
    fn test_default_is_weekly() {
        assert_eq!(PaymentFrequency::default(), PaymentFrequency::Weekly);
    }

    #[test]
    fn test_name_parses_back() {
        for freq in PaymentFrequency::ALL {
            assert_eq!(freq.name().parse::<PaymentFrequency>().unwrap(), freq);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentFrequency::Biweekly).unwrap(),
            "\"biweekly\""
        );
        let freq: PaymentFrequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(freq, PaymentFrequency::Monthly);
    }
}
