//! Schedule command implementation
//!
//! Lists consecutive pay periods for period-generation jobs.

use payperiod_core::types::Date;
use payperiod_models::periods::{PeriodSchedule, PeriodScheduleBuilder};
use std::str::FromStr;
use tracing::info;

use super::output::{render_periods, OutputFormat};
use crate::config::AppConfig;
use crate::Result;

/// Run the schedule command
pub fn run(
    config: &AppConfig,
    from: &str,
    until: Option<&str>,
    count: Option<usize>,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let from = Date::parse(from)?;
    let until = until.map(Date::parse).transpose()?;

    let schedule = build(config, from, until, count)?;
    info!(
        periods = schedule.len(),
        start = %schedule.start_date(),
        end = %schedule.end_date(),
        "Schedule generated"
    );

    println!("{}", render_periods(schedule.periods(), format)?);
    Ok(())
}

/// Build the schedule for the configured company
pub(crate) fn build(
    config: &AppConfig,
    from: Date,
    until: Option<Date>,
    count: Option<usize>,
) -> Result<PeriodSchedule> {
    let mut builder = PeriodScheduleBuilder::new()
        .config(config.payment_config()?)
        .from(from);

    if let Some(until) = until {
        builder = builder.until(until);
    }
    if let Some(count) = count {
        builder = builder.count(count);
    }

    Ok(builder.build()?)
}
