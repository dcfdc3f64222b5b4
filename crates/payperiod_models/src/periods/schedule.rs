//! PeriodSchedule and PeriodScheduleBuilder implementation.

use payperiod_core::types::Date;

use super::calculator::current_period;
use super::config::CompanyPaymentConfig;
use super::error::ScheduleError;
use super::frequency::PaymentFrequency;
use super::period::CalculatedPeriod;

/// A contiguous run of pay periods.
///
/// Produced for period-generation jobs that materialise period rows.
/// Consecutive periods never overlap and leave no gap: each period starts
/// the day after its predecessor ends.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{CompanyPaymentConfig, PeriodScheduleBuilder};
/// use payperiod_core::types::Date;
///
/// let schedule = PeriodScheduleBuilder::new()
///     .config(CompanyPaymentConfig::monthly())
///     .from(Date::from_ymd(2024, 1, 15).unwrap())
///     .count(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule.end_date().to_string(), "2024-03-31");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSchedule {
    periods: Vec<CalculatedPeriod>,
}

impl PeriodSchedule {
    /// Creates a schedule from a list of periods.
    ///
    /// Only [`PeriodScheduleBuilder`] constructs schedules, and it always
    /// emits at least one period.
    ///
    /// # Panics
    ///
    /// Panics if periods is empty.
    pub(crate) fn new(periods: Vec<CalculatedPeriod>) -> Self {
        assert!(
            !periods.is_empty(),
            "PeriodSchedule must have at least one period"
        );
        Self { periods }
    }

    /// Returns the periods in the schedule.
    #[inline]
    pub fn periods(&self) -> &[CalculatedPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule is empty.
    ///
    /// Always false for a built schedule.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the first day of the first period.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.periods[0].start_date()
    }

    /// Returns the last day of the last period.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.periods[self.periods.len() - 1].end_date()
    }

    /// Returns the number of days covered, counting both ends.
    pub fn total_days(&self) -> i64 {
        self.periods.iter().map(|p| p.days()).sum()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &CalculatedPeriod> {
        self.periods.iter()
    }

    /// Returns the period containing the given date, if any.
    pub fn period_containing(&self, date: Date) -> Option<&CalculatedPeriod> {
        self.periods.iter().find(|p| p.contains(date))
    }

    /// Returns the index of the period containing the given date, if any.
    pub fn period_index_containing(&self, date: Date) -> Option<usize> {
        self.periods.iter().position(|p| p.contains(date))
    }
}

impl IntoIterator for PeriodSchedule {
    type Item = CalculatedPeriod;
    type IntoIter = std::vec::IntoIter<CalculatedPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.into_iter()
    }
}

/// Builder for period schedules.
///
/// Starts at the period containing `from` and walks forward until either the
/// period containing `until` has been emitted or `count` periods exist.
/// Exactly one of `until` and `count` must be set.
///
/// Every emitted period is tagged `Current`: it is the current period of its
/// own start date.
///
/// Biweekly periods reset on January 1, so the last biweekly period of a
/// year is clipped at December 31 and the year's final stored period may be
/// shorter than 14 days.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{CompanyPaymentConfig, PeriodScheduleBuilder};
/// use payperiod_core::types::Date;
///
/// let schedule = PeriodScheduleBuilder::new()
///     .config(CompanyPaymentConfig::biweekly())
///     .from(Date::from_ymd(2024, 12, 20).unwrap())
///     .until(Date::from_ymd(2025, 1, 10).unwrap())
///     .build()
///     .unwrap();
///
/// let full = schedule.periods()[0];
/// assert_eq!(full.start_date().to_string(), "2024-12-16");
/// assert_eq!(full.end_date().to_string(), "2024-12-29");
///
/// let clipped = schedule.periods()[1];
/// assert_eq!(clipped.end_date().to_string(), "2024-12-31");
/// assert_eq!(clipped.days(), 2);
///
/// assert_eq!(schedule.periods()[2].start_date().to_string(), "2025-01-01");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PeriodScheduleBuilder {
    config: Option<CompanyPaymentConfig>,
    from: Option<Date>,
    until: Option<Date>,
    count: Option<usize>,
}

impl PeriodScheduleBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the company payment configuration.
    pub fn config(mut self, config: CompanyPaymentConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the date whose period opens the schedule.
    pub fn from(mut self, date: Date) -> Self {
        self.from = Some(date);
        self
    }

    /// Sets the date whose period closes the schedule.
    pub fn until(mut self, date: Date) -> Self {
        self.until = Some(date);
        self
    }

    /// Sets the number of periods to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config or from date is missing
    /// - Neither or both of `until` and `count` are set
    /// - `until` is before `from`
    /// - `count` is zero
    /// - Date arithmetic leaves the supported calendar range
    pub fn build(self) -> Result<PeriodSchedule, ScheduleError> {
        let config = self
            .config
            .ok_or(ScheduleError::MissingField { field: "config" })?;
        let from = self
            .from
            .ok_or(ScheduleError::MissingField { field: "from" })?;

        let periods = match (self.until, self.count) {
            (Some(_), Some(_)) => return Err(ScheduleError::ConflictingBounds),
            (None, None) => {
                return Err(ScheduleError::MissingField {
                    field: "until or count",
                })
            }
            (Some(until), None) => {
                if until < from {
                    return Err(ScheduleError::InvalidDateRange { from, until });
                }
                Self::generate(&config, from, |_, last| last.end_date() >= until)?
            }
            (None, Some(0)) => return Err(ScheduleError::NoPeriods { from }),
            (None, Some(count)) => Self::generate(&config, from, |len, _| len >= count)?,
        };

        tracing::debug!(
            frequency = %config.frequency,
            %from,
            periods = periods.len(),
            "Generated period schedule"
        );

        Ok(PeriodSchedule::new(periods))
    }

    /// Walks forward from the period containing `from` until `done` holds.
    fn generate<F>(
        config: &CompanyPaymentConfig,
        from: Date,
        done: F,
    ) -> Result<Vec<CalculatedPeriod>, ScheduleError>
    where
        F: Fn(usize, &CalculatedPeriod) -> bool,
    {
        let mut periods = Vec::new();
        let mut reference = from;

        loop {
            let period = Self::materialise(config, current_period(config, reference)?)?;
            periods.push(period);

            if done(periods.len(), &period) {
                return Ok(periods);
            }
            reference = period.end_date().add_days(1)?;
        }
    }

    /// Clips a biweekly period that crosses December 31.
    fn materialise(
        config: &CompanyPaymentConfig,
        period: CalculatedPeriod,
    ) -> Result<CalculatedPeriod, ScheduleError> {
        let start = period.start_date();
        if config.frequency == PaymentFrequency::Biweekly
            && period.end_date().year() != start.year()
        {
            let year_end = Date::from_ymd(start.year(), 12, 31)?;
            return Ok(period.with_end_date(year_end));
        }
        Ok(period)
    }
}
