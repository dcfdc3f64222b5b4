//! Current, previous and next period calculation.

use payperiod_core::types::{Clock, Date, DateError, SystemClock};

use super::config::CompanyPaymentConfig;
use super::frequency::PaymentFrequency;
use super::period::{CalculatedPeriod, PeriodType};
use super::strategy::{monthly_bounds, period_bounds, BIWEEKLY_DAYS, WEEKLY_DAYS};

/// Returns the period containing `reference`.
///
/// # Errors
///
/// Only fails with `DateError::OutOfRange` at the limits of the calendar.
pub fn current_period(
    config: &CompanyPaymentConfig,
    reference: Date,
) -> Result<CalculatedPeriod, DateError> {
    let (start, end) = period_bounds(config, reference)?;
    Ok(CalculatedPeriod::from_bounds(
        start,
        end,
        config.frequency,
        PeriodType::Current,
    ))
}

/// Returns the period immediately before the one containing `reference`.
///
/// Steps back from the current period's own boundaries: 7 days for weekly,
/// 14 days for biweekly, and for monthly the calendar month before the
/// current one. The result ends the day before the current period starts.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{previous_period, CompanyPaymentConfig};
/// use payperiod_core::types::Date;
///
/// let previous = previous_period(
///     &CompanyPaymentConfig::monthly(),
///     Date::from_ymd(2024, 3, 31).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(previous.start_date().to_string(), "2024-02-01");
/// assert_eq!(previous.end_date().to_string(), "2024-02-29");
/// ```
pub fn previous_period(
    config: &CompanyPaymentConfig,
    reference: Date,
) -> Result<CalculatedPeriod, DateError> {
    let current = current_period(config, reference)?;

    let (start, end) = match config.frequency {
        PaymentFrequency::Weekly => step_back(&current, WEEKLY_DAYS)?,
        PaymentFrequency::Biweekly => step_back(&current, BIWEEKLY_DAYS)?,
        PaymentFrequency::Monthly => monthly_bounds(current.start_date().sub_months(1)?)?,
    };

    Ok(CalculatedPeriod::from_bounds(
        start,
        end,
        config.frequency,
        PeriodType::Previous,
    ))
}

/// Shifts both boundaries of `period` back by `days`.
fn step_back(period: &CalculatedPeriod, days: u64) -> Result<(Date, Date), DateError> {
    Ok((
        period.start_date().sub_days(days)?,
        period.end_date().sub_days(days)?,
    ))
}

/// Returns the period immediately after the one containing `reference`.
///
/// Re-runs the frequency's strategy on the day after the current period ends.
///
/// A biweekly period that runs past December 31 is followed by the first
/// period of the new year, which starts on January 1 and therefore overlaps it.
pub fn next_period(
    config: &CompanyPaymentConfig,
    reference: Date,
) -> Result<CalculatedPeriod, DateError> {
    let current = current_period(config, reference)?;
    let (start, end) = period_bounds(config, current.end_date().add_days(1)?)?;

    Ok(CalculatedPeriod::from_bounds(
        start,
        end,
        config.frequency,
        PeriodType::Next,
    ))
}

/// Period calculator reading "today" from a clock.
///
/// The `*_at` methods take an explicit reference date; the others use the
/// clock's current date. The calculator keeps no per-company state, so one
/// instance serves every company.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{CompanyPaymentConfig, PeriodCalculator, PeriodType};
/// use payperiod_core::types::{CycleStartDay, Date, FixedClock};
///
/// let clock = FixedClock::new(Date::from_ymd(2024, 1, 17).unwrap());
/// let calculator = PeriodCalculator::new(clock);
/// let config = CompanyPaymentConfig::weekly(CycleStartDay::MONDAY);
///
/// let next = calculator.next(&config).unwrap();
/// assert_eq!(next.period_type(), PeriodType::Next);
/// assert_eq!(next.start_date().to_string(), "2024-01-22");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PeriodCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> PeriodCalculator<C> {
    /// Creates a calculator reading today's date from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns today's date according to the clock.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Returns the period containing today.
    pub fn current(&self, config: &CompanyPaymentConfig) -> Result<CalculatedPeriod, DateError> {
        current_period(config, self.today())
    }

    /// Returns the period before the one containing today.
    pub fn previous(&self, config: &CompanyPaymentConfig) -> Result<CalculatedPeriod, DateError> {
        previous_period(config, self.today())
    }

    /// Returns the period after the one containing today.
    pub fn next(&self, config: &CompanyPaymentConfig) -> Result<CalculatedPeriod, DateError> {
        next_period(config, self.today())
    }

    /// Returns the period containing `reference`.
    pub fn current_at(
        &self,
        config: &CompanyPaymentConfig,
        reference: Date,
    ) -> Result<CalculatedPeriod, DateError> {
        current_period(config, reference)
    }

    /// Returns the period before the one containing `reference`.
    pub fn previous_at(
        &self,
        config: &CompanyPaymentConfig,
        reference: Date,
    ) -> Result<CalculatedPeriod, DateError> {
        previous_period(config, reference)
    }

    /// Returns the period after the one containing `reference`.
    pub fn next_at(
        &self,
        config: &CompanyPaymentConfig,
        reference: Date,
    ) -> Result<CalculatedPeriod, DateError> {
        next_period(config, reference)
    }

    /// Returns the period of the given type relative to `reference`.
    pub fn period_at(
        &self,
        config: &CompanyPaymentConfig,
        period_type: PeriodType,
        reference: Date,
    ) -> Result<CalculatedPeriod, DateError> {
        match period_type {
            PeriodType::Current => current_period(config, reference),
            PeriodType::Previous => previous_period(config, reference),
            PeriodType::Next => next_period(config, reference),
        }
    }
}
