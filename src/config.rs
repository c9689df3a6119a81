//! Endpoint and request settings for [`crate::Forecaster`].

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_BULLETIN_URL: &str =
    "https://raw.githubusercontent.com/SIG212/meteo-scraper/main/date_meteo.json";
pub const DEFAULT_TIMEZONE: &str = "Europe/Bucharest";
/// Shortest forecast horizon requested from the weather provider, in days.
pub const MIN_FORECAST_DAYS: u8 = 16;

/// Settings for the upstream weather and bulletin providers.
///
/// # Examples
///
/// ```
/// use massif_forecast::ForecastConfig;
/// use std::time::Duration;
///
/// let config = ForecastConfig::builder()
///     .weather_url("http://localhost:8080/v1/forecast".to_string())
///     .request_timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.timezone, "Europe/Bucharest");
/// assert_eq!(config.forecast_days, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ForecastConfig {
    /// Open-Meteo compatible `forecast` endpoint.
    #[builder(default = DEFAULT_WEATHER_URL.to_string())]
    pub weather_url: String,
    /// Location of the avalanche bulletin JSON document.
    #[builder(default = DEFAULT_BULLETIN_URL.to_string())]
    pub bulletin_url: String,
    /// IANA timezone the hourly series is expressed in.
    #[builder(default = DEFAULT_TIMEZONE.to_string())]
    pub timezone: String,
    /// Forecast horizon in days. Values below 16 are raised to 16.
    #[builder(default = MIN_FORECAST_DAYS)]
    pub forecast_days: u8,
    /// Per-request timeout. `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
}

impl ForecastConfig {
    pub(crate) fn effective_forecast_days(&self) -> u8 {
        self.forecast_days.max(MIN_FORECAST_DAYS)
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
