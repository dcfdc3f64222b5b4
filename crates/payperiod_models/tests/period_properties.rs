//! Property-based tests for period boundaries.
//!
//! Checks the structural guarantees of every frequency over arbitrary
//! reference dates and cycle start days: periods contain their reference,
//! neighbours touch without gaps, and schedules tile their range.

use payperiod_core::types::{to_zero_based_weekday, CycleStartDay, Date};
use payperiod_models::periods::{
    biweekly_period_index, current_period, next_period, previous_period, CompanyPaymentConfig,
    PaymentFrequency, PeriodScheduleBuilder,
};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Date> {
    (1990i32..2100, 0u64..366).prop_map(|(year, offset)| {
        Date::from_ymd(year, 1, 1)
            .unwrap()
            .add_days(offset)
            .unwrap()
    })
}

fn cycle_start_day_strategy() -> impl Strategy<Value = CycleStartDay> {
    (1u8..=7).prop_map(|day| CycleStartDay::new(day).unwrap())
}

fn config_strategy() -> impl Strategy<Value = CompanyPaymentConfig> {
    (
        prop::sample::select(PaymentFrequency::ALL.to_vec()),
        cycle_start_day_strategy(),
    )
        .prop_map(|(frequency, day)| CompanyPaymentConfig::new(frequency, day))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_current_contains_reference(
        config in config_strategy(),
        reference in date_strategy(),
    ) {
        let current = current_period(&config, reference).unwrap();
        prop_assert!(current.contains(reference), "{} misses {}", current, reference);
        prop_assert!(current.start_date() <= current.end_date());
    }

    #[test]
    fn test_weekly_starts_on_cycle_day(
        day in cycle_start_day_strategy(),
        reference in date_strategy(),
    ) {
        let current = current_period(&CompanyPaymentConfig::weekly(day), reference).unwrap();

        prop_assert_eq!(
            current.start_date().zero_based_weekday(),
            to_zero_based_weekday(day.get())
        );
        prop_assert_eq!(current.days(), 7);
    }

    #[test]
    fn test_biweekly_aligned_to_year_start(reference in date_strategy()) {
        let current = current_period(&CompanyPaymentConfig::biweekly(), reference).unwrap();
        let index = biweekly_period_index(reference);

        prop_assert_eq!(
            current.start_date(),
            reference.first_day_of_year().add_days(index * 14).unwrap()
        );
        prop_assert_eq!(current.days(), 14);
        prop_assert_eq!(current.start_date().year(), reference.year());
    }

    #[test]
    fn test_monthly_is_idempotent(reference in date_strategy()) {
        let config = CompanyPaymentConfig::monthly();
        let current = current_period(&config, reference).unwrap();

        prop_assert_eq!(current.start_date().day(), 1);
        prop_assert_eq!(current_period(&config, current.start_date()).unwrap(), current);
        prop_assert_eq!(current_period(&config, current.end_date()).unwrap(), current);
    }

    #[test]
    fn test_previous_ends_day_before_current(
        config in config_strategy(),
        reference in date_strategy(),
    ) {
        let current = current_period(&config, reference).unwrap();
        let previous = previous_period(&config, reference).unwrap();

        prop_assert_eq!(previous.end_date().add_days(1).unwrap(), current.start_date());
    }

    #[test]
    fn test_next_starts_day_after_current(
        config in config_strategy(),
        reference in date_strategy(),
    ) {
        let current = current_period(&config, reference).unwrap();
        let next = next_period(&config, reference).unwrap();

        let crosses_year = current.end_date().year() != current.start_date().year();
        if config.frequency == PaymentFrequency::Biweekly && crosses_year {
            // The new year's first period restarts on January 1
            prop_assert_eq!(next.start_date(), current.end_date().first_day_of_year());
        } else {
            prop_assert_eq!(current.end_date().add_days(1).unwrap(), next.start_date());
        }
    }

    #[test]
    fn test_schedule_tiles_range(
        config in config_strategy(),
        from in date_strategy(),
        count in 1usize..60,
    ) {
        let schedule = PeriodScheduleBuilder::new()
            .config(config)
            .from(from)
            .count(count)
            .build()
            .unwrap();

        prop_assert_eq!(schedule.len(), count);
        prop_assert!(schedule.periods()[0].contains(from));
        prop_assert_eq!(
            schedule.total_days(),
            schedule.end_date() - schedule.start_date() + 1
        );

        for pair in schedule.periods().windows(2) {
            prop_assert_eq!(pair[0].end_date().add_days(1).unwrap(), pair[1].start_date());
        }

        if config.frequency == PaymentFrequency::Biweekly {
            for period in schedule.iter() {
                prop_assert_eq!(period.start_date().year(), period.end_date().year());
            }
        }
    }
}
