//! Output rendering shared by the period commands
//!
//! JSON follows the `CalculatedPeriod` wire shape; tables are for people.

use payperiod_models::periods::CalculatedPeriod;
use std::str::FromStr;

use crate::{CliError, Result};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Render a single period
pub fn render_period(period: &CalculatedPeriod, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(period)?),
        OutputFormat::Table => Ok(table(std::slice::from_ref(period))),
    }
}

/// Render a list of periods
pub fn render_periods(periods: &[CalculatedPeriod], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(periods)?),
        OutputFormat::Table => Ok(table(periods)),
    }
}

fn table(periods: &[CalculatedPeriod]) -> String {
    let mut out = String::new();
    out.push_str("┌──────────┬──────────┬────────────┬────────────┬──────┐\n");
    out.push_str("│ Type     │ Freq     │ Start      │ End        │ Days │\n");
    out.push_str("├──────────┼──────────┼────────────┼────────────┼──────┤\n");
    for period in periods {
        out.push_str(&format!(
            "│ {:<8} │ {:<8} │ {} │ {} │ {:>4} │\n",
            period.period_type().name(),
            period.frequency().name(),
            period.start_date(),
            period.end_date(),
            period.days()
        ));
    }
    out.push_str("└──────────┴──────────┴────────────┴────────────┴──────┘");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use payperiod_core::types::Date;
    use payperiod_models::periods::{PaymentFrequency, PeriodType};

    fn february() -> CalculatedPeriod {
        CalculatedPeriod::new(
            Date::from_ymd(2024, 2, 1).unwrap(),
            Date::from_ymd(2024, 2, 29).unwrap(),
            PaymentFrequency::Monthly,
            PeriodType::Current,
        )
        .unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_render_period_json() {
        let json = render_period(&february(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "startDate": "2024-02-01",
                "endDate": "2024-02-29",
                "frequency": "monthly",
                "type": "current",
            })
        );
    }

    #[test]
    fn test_render_periods_json_array() {
        let json = render_periods(&[february(), february()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_render_table_row() {
        let table = render_period(&february(), OutputFormat::Table).unwrap();
        assert!(table.contains("│ current  │ monthly  │ 2024-02-01 │ 2024-02-29 │   29 │"));
        assert_eq!(table.lines().count(), 5);
    }
}
