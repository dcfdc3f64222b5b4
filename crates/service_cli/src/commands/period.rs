//! Period command implementation
//!
//! Computes the current, previous or next pay period for the configured company.

use payperiod_core::types::Date;
use payperiod_models::periods::{CalculatedPeriod, PeriodCalculator, PeriodType};
use std::str::FromStr;
use tracing::{debug, info};

use super::output::{render_period, OutputFormat};
use crate::config::AppConfig;
use crate::Result;

/// Run the current, previous or next command
pub fn run(
    config: &AppConfig,
    period_type: PeriodType,
    date: Option<&str>,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let date = date.map(Date::parse).transpose()?;

    let period = compute(config, period_type, date)?;
    info!(%period, "Period calculated");

    println!("{}", render_period(&period, format)?);
    Ok(())
}

/// Compute the period of `period_type` around `date`, or around today
/// in the configured timezone when no date is given
pub(crate) fn compute(
    config: &AppConfig,
    period_type: PeriodType,
    date: Option<Date>,
) -> Result<CalculatedPeriod> {
    let payment = config.payment_config()?;
    let calculator = PeriodCalculator::new(config.clock()?);
    let reference = date.unwrap_or_else(|| calculator.today());

    debug!(
        frequency = %payment.frequency,
        cycle_start_day = %payment.cycle_start_day,
        %reference,
        %period_type,
        "Resolved payment configuration"
    );

    Ok(calculator.period_at(&payment, period_type, reference)?)
}
