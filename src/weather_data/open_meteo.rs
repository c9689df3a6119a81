//! Response types of the Open-Meteo `v1/forecast` endpoint.
//!
//! Only the fields used by the aggregator are modeled. Every hourly series is
//! index-aligned with `hourly.time`; a series that was not returned at all
//! deserializes as empty, and individual `null` readings as `None`.

use serde::{Deserialize, Serialize};

/// Hourly fields requested from the provider.
pub(crate) const HOURLY_FIELDS: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "rain",
    "showers",
    "snowfall",
    "snow_depth",
    "visibility",
    "weather_code",
    "wind_speed_80m",
    "wind_speed_10m",
    "wind_gusts_10m",
    "relative_humidity_2m",
    "precipitation_probability",
    "precipitation",
];

/// Daily fields requested from the provider.
pub(crate) const DAILY_FIELDS: &[&str] = &["uv_index_max"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenMeteoResponse {
    #[serde(default)]
    pub daily: Option<DailySeries>,
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries {
    /// Calendar dates, `YYYY-MM-DD`.
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Local timestamps, `YYYY-MM-DDTHH:MM`.
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub apparent_temperature: Vec<Option<f64>>,
    /// Millimeters.
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    /// Centimeters.
    #[serde(default)]
    pub snowfall: Vec<Option<f64>>,
    /// Meters.
    #[serde(default)]
    pub snow_depth: Vec<Option<f64>>,
    /// Meters.
    #[serde(default)]
    pub visibility: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i64>>,
    #[serde(default)]
    pub wind_speed_80m: Vec<Option<f64>>,
    #[serde(default, alias = "windspeed_10m")]
    pub wind_speed_10m: Vec<Option<f64>>,
    #[serde(default, alias = "windgusts_10m")]
    pub wind_gusts_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
}

/// Reading at `index`, `None` when the series is short or the value is null.
pub(crate) fn at<T: Copy>(series: &[Option<T>], index: usize) -> Option<T> {
    series.get(index).copied().flatten()
}

impl DailySeries {
    /// Position of `date` in the daily series, falling back to the first day.
    pub fn index_or_first(&self, date: &str) -> usize {
        self.time.iter().position(|t| t == date).unwrap_or(0)
    }
}

impl HourlySeries {
    /// First hourly index on `date`, if the provider returned that day at all.
    pub fn day_start(&self, date: &str) -> Option<usize> {
        self.time.iter().position(|t| t.starts_with(date))
    }

    /// Wind speed at `index`, preferring the 80 m series over the 10 m one.
    pub fn wind_speed(&self, index: usize) -> f64 {
        at(&self.wind_speed_80m, index)
            .or_else(|| at(&self.wind_speed_10m, index))
            .unwrap_or(0.0)
    }
}
