//! Company payment configuration and settings resolution.

use payperiod_core::types::{ConfigurationError, CycleStartDay};
use tracing::warn;

use super::frequency::PaymentFrequency;

/// Payment cadence configured for one company.
///
/// `cycle_start_day` only matters for weekly periods; biweekly and monthly
/// periods ignore it.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{CompanyPaymentConfig, PaymentFrequency};
/// use payperiod_core::types::CycleStartDay;
///
/// let config = CompanyPaymentConfig::weekly(CycleStartDay::FRIDAY);
/// assert_eq!(config.frequency, PaymentFrequency::Weekly);
/// assert_eq!(config.cycle_start_day.get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompanyPaymentConfig {
    /// Pay cadence.
    pub frequency: PaymentFrequency,
    /// First weekday of a weekly period.
    pub cycle_start_day: CycleStartDay,
}

impl CompanyPaymentConfig {
    /// Creates a configuration from its parts.
    pub fn new(frequency: PaymentFrequency, cycle_start_day: CycleStartDay) -> Self {
        Self {
            frequency,
            cycle_start_day,
        }
    }

    /// Weekly periods starting on `cycle_start_day`.
    pub fn weekly(cycle_start_day: CycleStartDay) -> Self {
        Self::new(PaymentFrequency::Weekly, cycle_start_day)
    }

    /// Biweekly periods anchored on January 1.
    pub fn biweekly() -> Self {
        Self::new(PaymentFrequency::Biweekly, CycleStartDay::default())
    }

    /// Calendar-month periods.
    pub fn monthly() -> Self {
        Self::new(PaymentFrequency::Monthly, CycleStartDay::default())
    }
}

/// Payment settings as the company-settings store persists them.
///
/// Values are untyped: `frequency` may hold a string this crate does not
/// recognise, and `cycle_start_day` has not been range-checked.
/// Use [`FrequencyFallback::resolve`] to obtain a [`CompanyPaymentConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaymentSettings {
    /// Stored frequency name.
    #[cfg_attr(feature = "serde", serde(alias = "payment_frequency"))]
    pub frequency: String,
    /// Stored ISO cycle start day.
    #[cfg_attr(feature = "serde", serde(alias = "cycle_start_day"))]
    pub cycle_start_day: u8,
}

impl PaymentSettings {
    /// Creates settings from raw stored values.
    pub fn new(frequency: impl Into<String>, cycle_start_day: u8) -> Self {
        Self {
            frequency: frequency.into(),
            cycle_start_day,
        }
    }
}

/// Policy for stored frequencies that are not recognised.
///
/// An unknown frequency is not an error: the company is paid on
/// `default_frequency` instead and a warning is logged. The default policy
/// falls back to weekly.
///
/// # Examples
///
/// ```
/// use payperiod_models::periods::{FrequencyFallback, PaymentFrequency, PaymentSettings};
///
/// let fallback = FrequencyFallback::default();
/// let config = fallback.resolve(&PaymentSettings::new("quarterly", 1)).unwrap();
/// assert_eq!(config.frequency, PaymentFrequency::Weekly);
///
/// let monthly = FrequencyFallback::new(PaymentFrequency::Monthly);
/// assert_eq!(monthly.resolve_frequency("???"), PaymentFrequency::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyFallback {
    default_frequency: PaymentFrequency,
}

impl FrequencyFallback {
    /// Creates a policy substituting `default_frequency` for unknown values.
    pub fn new(default_frequency: PaymentFrequency) -> Self {
        Self { default_frequency }
    }

    /// Returns the substituted frequency.
    pub fn default_frequency(&self) -> PaymentFrequency {
        self.default_frequency
    }

    /// Parses a stored frequency, substituting the default when it is unknown.
    pub fn resolve_frequency(&self, raw: &str) -> PaymentFrequency {
        match raw.parse::<PaymentFrequency>() {
            Ok(frequency) => frequency,
            Err(_) => {
                warn!(
                    frequency = raw,
                    fallback = %self.default_frequency,
                    "Unknown payment frequency, using fallback"
                );
                self.default_frequency
            }
        }
    }

    /// Turns stored settings into a typed configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCycleStartDay` when the stored day
    /// is outside 1..=7. The frequency never fails.
    pub fn resolve(
        &self,
        settings: &PaymentSettings,
    ) -> Result<CompanyPaymentConfig, ConfigurationError> {
        let frequency = self.resolve_frequency(&settings.frequency);
        let cycle_start_day = CycleStartDay::new(settings.cycle_start_day)?;

        Ok(CompanyPaymentConfig::new(frequency, cycle_start_day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let weekly = CompanyPaymentConfig::weekly(CycleStartDay::SUNDAY);
        assert_eq!(weekly.frequency, PaymentFrequency::Weekly);
        assert_eq!(weekly.cycle_start_day, CycleStartDay::SUNDAY);

        assert_eq!(
            CompanyPaymentConfig::biweekly().frequency,
            PaymentFrequency::Biweekly
        );
        assert_eq!(
            CompanyPaymentConfig::monthly().frequency,
            PaymentFrequency::Monthly
        );
    }

    #[test]
    fn test_default_config_is_weekly_monday() {
        let config = CompanyPaymentConfig::default();
        assert_eq!(config.frequency, PaymentFrequency::Weekly);
        assert_eq!(config.cycle_start_day, CycleStartDay::MONDAY);
    }

    #[test]
    fn test_resolve_known_frequency() {
        let config = FrequencyFallback::default()
            .resolve(&PaymentSettings::new("biweekly", 3))
            .unwrap();
        assert_eq!(config.frequency, PaymentFrequency::Biweekly);
        assert_eq!(config.cycle_start_day.get(), 3);
    }

    #[test]
    fn test_unknown_frequency_falls_back_to_weekly_on_purpose() {
        let fallback = FrequencyFallback::default();
        assert_eq!(fallback.default_frequency(), PaymentFrequency::Weekly);

        for raw in ["", "daily", "semi-monthly", "WEEKLYY"] {
            let config = fallback.resolve(&PaymentSettings::new(raw, 2)).unwrap();
            assert_eq!(config.frequency, PaymentFrequency::Weekly, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_custom_fallback() {
        let fallback = FrequencyFallback::new(PaymentFrequency::Monthly);
        assert_eq!(fallback.resolve_frequency("yearly"), PaymentFrequency::Monthly);
        // Known values are never replaced
        assert_eq!(fallback.resolve_frequency("weekly"), PaymentFrequency::Weekly);
    }

    #[test]
    fn test_resolve_rejects_cycle_start_day() {
        let result = FrequencyFallback::default().resolve(&PaymentSettings::new("weekly", 0));
        assert_eq!(result, Err(ConfigurationError::InvalidCycleStartDay(0)));

        let result = FrequencyFallback::default().resolve(&PaymentSettings::new("monthly", 8));
        assert_eq!(result, Err(ConfigurationError::InvalidCycleStartDay(8)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_camel_case() {
        let config = CompanyPaymentConfig::weekly(CycleStartDay::SUNDAY);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"frequency":"weekly","cycleStartDay":7}"#);

        let back: CompanyPaymentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_settings_accept_unknown_frequency() {
        let settings: PaymentSettings =
            serde_json::from_str(r#"{"frequency":"semimonthly","cycleStartDay":4}"#).unwrap();
        assert_eq!(settings, PaymentSettings::new("semimonthly", 4));

        let snake: PaymentSettings =
            serde_json::from_str(r#"{"payment_frequency":"monthly","cycle_start_day":1}"#)
                .unwrap();
        assert_eq!(snake.frequency, "monthly");
    }
}
