//! Calculated period definition.

use payperiod_core::types::Date;
use std::fmt;

use super::error::PeriodError;
use super::frequency::PaymentFrequency;

/// Which period relative to the reference date a [`CalculatedPeriod`] is.
///
/// Descriptive only; comparisons between periods never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PeriodType {
    /// The period containing the reference date.
    Current,
    /// The period immediately before the current one.
    Previous,
    /// The period immediately after the current one.
    Next,
}

impl PeriodType {
    /// Returns the lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            PeriodType::Current => "current",
            PeriodType::Previous => "previous",
            PeriodType::Next => "next",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An inclusive pay period.
///
/// Both boundaries are calendar days in the viewer's timezone and belong to
/// the period. Serialises as
/// `{"startDate":"YYYY-MM-DD","endDate":"YYYY-MM-DD","frequency":..,"type":..}`.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{CalculatedPeriod, PaymentFrequency, PeriodType};
/// use payperiod_core::types::Date;
///
/// let period = CalculatedPeriod::new(
///     Date::from_ymd(2024, 2, 1).unwrap(),
///     Date::from_ymd(2024, 2, 29).unwrap(),
///     PaymentFrequency::Monthly,
///     PeriodType::Current,
/// )
/// .unwrap();
///
/// assert_eq!(period.days(), 29);
/// assert!(period.contains(Date::from_ymd(2024, 2, 29).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "serde", serde(try_from = "PeriodRecord"))]
pub struct CalculatedPeriod {
    /// First day of the period.
    start_date: Date,
    /// Last day of the period (inclusive).
    end_date: Date,
    /// Frequency the period was computed for.
    frequency: PaymentFrequency,
    /// Position relative to the reference date.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    period_type: PeriodType,
}

impl CalculatedPeriod {
    /// Creates a period from inclusive boundaries.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::EndBeforeStart` if `end_date` is before `start_date`.
    pub fn new(
        start_date: Date,
        end_date: Date,
        frequency: PaymentFrequency,
        period_type: PeriodType,
    ) -> Result<Self, PeriodError> {
        if end_date < start_date {
            return Err(PeriodError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self::from_bounds(start_date, end_date, frequency, period_type))
    }

    /// Creates a period from boundaries a strategy has already ordered.
    #[inline]
    pub(crate) fn from_bounds(
        start_date: Date,
        end_date: Date,
        frequency: PaymentFrequency,
        period_type: PeriodType,
    ) -> Self {
        debug_assert!(start_date <= end_date, "period must not end before it starts");
        Self {
            start_date,
            end_date,
            frequency,
            period_type,
        }
    }

    /// Returns the first day of the period.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the period.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the frequency the period was computed for.
    #[inline]
    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    /// Returns the period's position relative to the reference date.
    #[inline]
    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Returns a copy tagged with a different period type.
    #[inline]
    pub fn with_type(self, period_type: PeriodType) -> Self {
        Self {
            period_type,
            ..self
        }
    }

    /// Returns a copy ending on `end_date`, used when a period is clipped.
    #[inline]
    pub(crate) fn with_end_date(self, end_date: Date) -> Self {
        Self::from_bounds(self.start_date, end_date, self.frequency, self.period_type)
    }

    /// Returns the number of days in the period, counting both boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// use payperiod_models::periods::{CalculatedPeriod, PaymentFrequency, PeriodType};
    /// use payperiod_core::types::Date;
    ///
    /// let week = CalculatedPeriod::new(
    ///     Date::from_ymd(2024, 1, 15).unwrap(),
    ///     Date::from_ymd(2024, 1, 21).unwrap(),
    ///     PaymentFrequency::Weekly,
    ///     PeriodType::Current,
    /// )
    /// .unwrap();
    /// assert_eq!(week.days(), 7);
    /// ```
    #[inline]
    pub fn days(&self) -> i64 {
        self.end_date - self.start_date + 1
    }

    /// Returns whether `date` falls within the period, boundaries included.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Wire form of [`CalculatedPeriod`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodRecord {
    start_date: Date,
    end_date: Date,
    frequency: PaymentFrequency,
    #[serde(rename = "type")]
    period_type: PeriodType,
}

#[cfg(feature = "serde")]
impl TryFrom<PeriodRecord> for CalculatedPeriod {
    type Error = PeriodError;

    fn try_from(record: PeriodRecord) -> Result<Self, Self::Error> {
        CalculatedPeriod::new(
            record.start_date,
            record.end_date,
            record.frequency,
            record.period_type,
        )
    }
}

impl fmt::Display for CalculatedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}..{}",
            self.frequency, self.period_type, self.start_date, self.end_date
        )
    }
}
