//! Output types of the forecast aggregator.

use crate::types::massif::LatLon;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw visibility readings (meters) at fixed hours of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibilitySnapshots {
    pub h08: i32,
    pub h12: i32,
    pub h16: i32,
}

/// Daytime (08:00-20:00 local) summary of the hourly forecast for one day.
///
/// All values are already rounded: integers for temperature, wind, visibility,
/// humidity and UV; one decimal for precipitation and snowfall amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Highest temperature in °C, `None` if the window had no readings.
    pub max_temperature: Option<i32>,
    /// Highest wind speed in km/h.
    pub max_wind_speed: i32,
    /// Highest gust speed in km/h.
    pub max_wind_gusts: i32,
    /// Sum of hourly precipitation in mm.
    pub total_precipitation: f64,
    /// Highest single-hour precipitation in mm.
    pub max_hourly_precipitation: f64,
    /// Sum of hourly snowfall in cm.
    pub total_snowfall: f64,
    /// Highest snow depth in cm.
    pub max_snow_depth_cm: i32,
    /// Lowest apparent ("feels like") temperature in °C, i.e. the windchill.
    pub min_apparent_temperature: Option<i32>,
    /// WMO weather code at 12:00.
    pub midday_weather_code: i64,
    /// Highest precipitation probability in percent.
    pub max_precipitation_probability: i32,
    /// Daily maximum UV index.
    pub max_uv_index: i32,
    /// Lowest visibility in meters, `None` if the window had no hours.
    pub min_visibility: Option<i32>,
    pub visibility_snapshots: VisibilitySnapshots,
    /// Mean relative humidity in percent.
    pub average_humidity: i32,
}

/// Coarse description of the day's precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    ClearCloudy,
    Snowy,
    Rainy,
}

impl Condition {
    /// Derives the condition from the reported (rounded) precipitation and
    /// snowfall totals, so a total shown as 0 is always clear.
    pub fn from_totals(total_precipitation: f64, total_snowfall: f64) -> Self {
        if total_precipitation <= 0.0 {
            Condition::ClearCloudy
        } else if total_snowfall > total_precipitation / 2.0 {
            Condition::Snowy
        } else {
            Condition::Rainy
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::ClearCloudy => "Clear/Cloudy",
            Condition::Snowy => "Snowy",
            Condition::Rainy => "Rainy",
        };
        write!(f, "{}", label)
    }
}

/// Avalanche danger reported by the bulletin for a massif and altitude band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvalancheAssessment {
    /// European avalanche danger level, 0 to 5.
    pub level: u8,
    /// Category label as published, e.g. `"moderat"`.
    pub text: String,
    /// Free-form advisory attached to the massif, if any.
    pub message: Option<String>,
}

/// The complete result of one forecast query.
///
/// Each query produces a fresh value; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub massif_id: String,
    pub date: NaiveDate,
    /// Requested target altitude in meters.
    pub altitude: u32,
    /// Coordinates the weather provider was queried for.
    pub station: LatLon,
    /// Whether the high-altitude station was selected.
    pub high_regime: bool,
    pub summary: DailySummary,
    pub condition: Condition,
    /// Present only when the bulletin was fetched and covers this massif and band.
    pub avalanche_risk: Option<AvalancheAssessment>,
}
