//! Check command implementation
//!
//! Validates the effective configuration and prints the resolved settings.

use payperiod_core::types::Clock;
use payperiod_models::periods::PaymentFrequency;
use std::str::FromStr;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");

    for line in report(config)? {
        println!("{}", line);
    }

    info!("Configuration OK");
    Ok(())
}

/// Describe the effective configuration, one setting per line
pub(crate) fn report(config: &AppConfig) -> Result<Vec<String>> {
    config.validate()?;
    let payment = config.payment_config()?;
    let clock = config.clock()?;

    // resolve() has already logged the fallback
    let frequency = if PaymentFrequency::from_str(&config.frequency).is_ok() {
        payment.frequency.to_string()
    } else {
        format!(
            "{} (stored {:?} not recognised, using fallback)",
            payment.frequency, config.frequency
        )
    };

    let timezone = match clock.timezone() {
        Some(tz) => tz.name().to_string(),
        None => "local".to_string(),
    };

    Ok(vec![
        format!("frequency:         {}", frequency),
        format!(
            "cycle start day:   {} ({})",
            payment.cycle_start_day.get(),
            payment.cycle_start_day
        ),
        format!("default frequency: {}", config.default_frequency),
        format!("timezone:          {}", timezone),
        format!("today:             {}", clock.today()),
        format!("log level:         {}", config.log_level),
    ])
}
