//! Boundary strategies, one per payment frequency.
//!
//! Every strategy maps a reference date to the inclusive `(start, end)` of the
//! period containing it:
//! - weekly: the 7-day week starting on the cycle start day
//! - biweekly: 14-day blocks counted from January 1 of the reference year
//! - monthly: the calendar month

use payperiod_core::types::{to_zero_based_weekday, CycleStartDay, Date, DateError};
use tracing::debug;

use super::config::CompanyPaymentConfig;
use super::frequency::PaymentFrequency;

pub(crate) const WEEKLY_DAYS: u64 = 7;
pub(crate) const BIWEEKLY_DAYS: u64 = 14;

/// Returns the inclusive boundaries of the period containing `reference`.
///
/// Dispatches on `config.frequency`.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{period_bounds, CompanyPaymentConfig};
/// use payperiod_core::types::Date;
///
/// let reference = Date::from_ymd(2024, 1, 20).unwrap();
/// let (start, end) = period_bounds(&CompanyPaymentConfig::biweekly(), reference).unwrap();
/// assert_eq!(start.to_string(), "2024-01-15");
/// assert_eq!(end.to_string(), "2024-01-28");
/// ```
pub fn period_bounds(
    config: &CompanyPaymentConfig,
    reference: Date,
) -> Result<(Date, Date), DateError> {
    debug!(
        frequency = %config.frequency,
        cycle_start_day = config.cycle_start_day.get(),
        %reference,
        "Computing period bounds"
    );

    match config.frequency {
        PaymentFrequency::Weekly => weekly_bounds(reference, config.cycle_start_day),
        PaymentFrequency::Biweekly => biweekly_bounds(reference),
        PaymentFrequency::Monthly => monthly_bounds(reference),
    }
}

/// Returns the zero-based index of the biweekly period containing `reference`,
/// counted from January 1 of its year.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::biweekly_period_index;
/// use payperiod_core::types::Date;
///
/// // 19 days after January 1 → floor(19 / 14) = 1
/// assert_eq!(biweekly_period_index(Date::from_ymd(2024, 1, 20).unwrap()), 1);
/// ```
pub fn biweekly_period_index(reference: Date) -> u64 {
    let days_since_year_start = reference - reference.first_day_of_year();
    // Never negative: January 1 is on or before any date of its year
    days_since_year_start.unsigned_abs() / BIWEEKLY_DAYS
}

pub(crate) fn weekly_bounds(
    reference: Date,
    cycle_start_day: CycleStartDay,
) -> Result<(Date, Date), DateError> {
    let week_starts_on = to_zero_based_weekday(cycle_start_day.get());

    let start = reference.start_of_week(week_starts_on)?;
    let end = reference.end_of_week(week_starts_on)?;
    Ok((start, end))
}

pub(crate) fn biweekly_bounds(reference: Date) -> Result<(Date, Date), DateError> {
    let year_start = reference.first_day_of_year();
    let index = biweekly_period_index(reference);

    let start = year_start.add_days(index * BIWEEKLY_DAYS)?;
    let end = start.add_days(BIWEEKLY_DAYS - 1)?;
    Ok((start, end))
}

pub(crate) fn monthly_bounds(reference: Date) -> Result<(Date, Date), DateError> {
    Ok((reference.first_day_of_month(), reference.last_day_of_month()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_weekly_monday_start() {
        let (start, end) = weekly_bounds(d(2024, 1, 17), CycleStartDay::MONDAY).unwrap();
        assert_eq!(start, d(2024, 1, 15));
        assert_eq!(end, d(2024, 1, 21));
    }

    #[test]
    fn test_weekly_sunday_start_maps_to_zero() {
        // Sunday is 7 in settings but 0 for the week primitive
        let (start, end) = weekly_bounds(d(2024, 1, 17), CycleStartDay::SUNDAY).unwrap();
        assert_eq!(start, d(2024, 1, 14));
        assert_eq!(end, d(2024, 1, 20));
    }

    #[test]
    fn test_weekly_reference_on_start_day() {
        let (start, _) = weekly_bounds(d(2024, 1, 19), CycleStartDay::FRIDAY).unwrap();
        assert_eq!(start, d(2024, 1, 19));
    }

    #[test]
    fn test_weekly_reference_on_last_day() {
        // Thursday is the last day of a Friday-start week
        let (start, end) = weekly_bounds(d(2024, 1, 18), CycleStartDay::FRIDAY).unwrap();
        assert_eq!(start, d(2024, 1, 12));
        assert_eq!(end, d(2024, 1, 18));
    }

    #[test]
    fn test_weekly_spans_year_end() {
        let (start, end) = weekly_bounds(d(2025, 1, 1), CycleStartDay::MONDAY).unwrap();
        assert_eq!(start, d(2024, 12, 30));
        assert_eq!(end, d(2025, 1, 5));
    }

    #[test]
    fn test_biweekly_index_and_bounds() {
        assert_eq!(biweekly_period_index(d(2024, 1, 1)), 0);
        assert_eq!(biweekly_period_index(d(2024, 1, 14)), 0);
        assert_eq!(biweekly_period_index(d(2024, 1, 15)), 1);
        assert_eq!(biweekly_period_index(d(2024, 1, 20)), 1);

        let (start, end) = biweekly_bounds(d(2024, 1, 20)).unwrap();
        assert_eq!(start, d(2024, 1, 15));
        assert_eq!(end, d(2024, 1, 28));
    }

    #[test]
    fn test_biweekly_ignores_weekday() {
        // 2023-01-01 was a Sunday, 2024-01-01 a Monday
        assert_eq!(biweekly_bounds(d(2023, 1, 5)).unwrap().0, d(2023, 1, 1));
        assert_eq!(biweekly_bounds(d(2024, 1, 5)).unwrap().0, d(2024, 1, 1));
    }

    #[test]
    fn test_biweekly_final_period_of_leap_year() {
        // 366 days: index 26 starts on day 364 (Dec 30) and runs into January
        assert_eq!(biweekly_period_index(d(2024, 12, 31)), 26);
        let (start, end) = biweekly_bounds(d(2024, 12, 31)).unwrap();
        assert_eq!(start, d(2024, 12, 30));
        assert_eq!(end, d(2025, 1, 12));
    }

    #[test]
    fn test_biweekly_resets_on_january_first() {
        let (start, end) = biweekly_bounds(d(2025, 1, 5)).unwrap();
        assert_eq!(start, d(2025, 1, 1));
        assert_eq!(end, d(2025, 1, 14));
    }

    #[test]
    fn test_monthly_bounds() {
        assert_eq!(
            monthly_bounds(d(2024, 2, 15)).unwrap(),
            (d(2024, 2, 1), d(2024, 2, 29))
        );
        assert_eq!(
            monthly_bounds(d(2023, 2, 28)).unwrap(),
            (d(2023, 2, 1), d(2023, 2, 28))
        );
        assert_eq!(
            monthly_bounds(d(2024, 12, 31)).unwrap(),
            (d(2024, 12, 1), d(2024, 12, 31))
        );
    }

    #[test]
    fn test_period_bounds_dispatch() {
        let reference = d(2024, 1, 17);
        assert_eq!(
            period_bounds(&CompanyPaymentConfig::weekly(CycleStartDay::MONDAY), reference)
                .unwrap(),
            (d(2024, 1, 15), d(2024, 1, 21))
        );
        assert_eq!(
            period_bounds(&CompanyPaymentConfig::biweekly(), reference).unwrap(),
            (d(2024, 1, 15), d(2024, 1, 28))
        );
        assert_eq!(
            period_bounds(&CompanyPaymentConfig::monthly(), reference).unwrap(),
            (d(2024, 1, 1), d(2024, 1, 31))
        );
    }

    #[test]
    fn test_cycle_start_day_ignored_outside_weekly() {
        let reference = d(2024, 5, 9);
        for day in 1..=7 {
            let cycle = CycleStartDay::new(day).unwrap();
            let biweekly = CompanyPaymentConfig::new(PaymentFrequency::Biweekly, cycle);
            let monthly = CompanyPaymentConfig::new(PaymentFrequency::Monthly, cycle);

            assert_eq!(
                period_bounds(&biweekly, reference).unwrap(),
                biweekly_bounds(reference).unwrap()
            );
            assert_eq!(
                period_bounds(&monthly, reference).unwrap(),
                monthly_bounds(reference).unwrap()
            );
        }
    }
}
