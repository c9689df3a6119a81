//! Reduces the provider's multi-day hourly series to a single [`DailySummary`].

use crate::error::ForecastError;
use crate::types::summary::{Condition, DailySummary, VisibilitySnapshots};
use crate::utils::{round_to_int, round_to_tenth};
use crate::weather_data::open_meteo::{at, HourlySeries, OpenMeteoResponse};
use chrono::NaiveDate;

/// First local hour of the daytime window.
pub const WINDOW_START_HOUR: usize = 8;
/// Last local hour of the daytime window, inclusive.
pub const WINDOW_END_HOUR: usize = 20;

/// Visibility assumed for hours without a reading, in meters.
const DEFAULT_VISIBILITY: f64 = 24_000.0;
/// Humidity assumed for hours without a reading, in percent.
const DEFAULT_HUMIDITY: f64 = 50.0;

/// Running reductions over the hours of the daytime window.
#[derive(Debug, Default)]
struct WindowAccumulator {
    max_hourly_precipitation: f64,
    total_precipitation: f64,
    total_snowfall: f64,
    max_wind_speed: f64,
    max_wind_gusts: f64,
    min_apparent_temperature: Option<f64>,
    max_temperature: Option<f64>,
    min_visibility: Option<f64>,
    max_snow_depth: f64,
    humidity_sum: f64,
    humidity_count: u32,
    max_precipitation_probability: f64,
    midday_weather_code: i64,
    visibility_snapshots: [f64; 3],
}

impl WindowAccumulator {
    fn observe(&mut self, hourly: &HourlySeries, hour: usize, index: usize) {
        let precipitation = at(&hourly.precipitation, index).unwrap_or(0.0);
        self.max_hourly_precipitation = self.max_hourly_precipitation.max(precipitation);
        self.total_precipitation += precipitation;

        self.total_snowfall += at(&hourly.snowfall, index).unwrap_or(0.0);

        self.max_wind_speed = self.max_wind_speed.max(hourly.wind_speed(index));
        self.max_wind_gusts = self
            .max_wind_gusts
            .max(at(&hourly.wind_gusts_10m, index).unwrap_or(0.0));

        if let Some(apparent) = at(&hourly.apparent_temperature, index) {
            self.min_apparent_temperature =
                Some(self.min_apparent_temperature.map_or(apparent, |m| m.min(apparent)));
        }
        if let Some(temperature) = at(&hourly.temperature_2m, index) {
            self.max_temperature =
                Some(self.max_temperature.map_or(temperature, |m| m.max(temperature)));
        }

        let visibility = at(&hourly.visibility, index).unwrap_or(DEFAULT_VISIBILITY);
        self.min_visibility = Some(self.min_visibility.map_or(visibility, |m| m.min(visibility)));

        self.max_snow_depth = self
            .max_snow_depth
            .max(at(&hourly.snow_depth, index).unwrap_or(0.0));

        self.humidity_sum += at(&hourly.relative_humidity_2m, index).unwrap_or(DEFAULT_HUMIDITY);
        self.humidity_count += 1;

        self.max_precipitation_probability = self
            .max_precipitation_probability
            .max(at(&hourly.precipitation_probability, index).unwrap_or(0.0));

        match hour {
            8 => self.visibility_snapshots[0] = visibility,
            12 => {
                self.visibility_snapshots[1] = visibility;
                self.midday_weather_code = at(&hourly.weather_code, index).unwrap_or(0);
            }
            16 => self.visibility_snapshots[2] = visibility,
            _ => {}
        }
    }

    fn finish(self, uv_index: f64) -> (DailySummary, Condition) {
        let average_humidity = if self.humidity_count > 0 {
            round_to_int(self.humidity_sum / f64::from(self.humidity_count))
        } else {
            0
        };
        let [h08, h12, h16] = self.visibility_snapshots;
        let summary = DailySummary {
            max_temperature: self.max_temperature.map(round_to_int),
            max_wind_speed: round_to_int(self.max_wind_speed),
            max_wind_gusts: round_to_int(self.max_wind_gusts),
            total_precipitation: round_to_tenth(self.total_precipitation),
            max_hourly_precipitation: round_to_tenth(self.max_hourly_precipitation),
            total_snowfall: round_to_tenth(self.total_snowfall),
            max_snow_depth_cm: round_to_int(self.max_snow_depth * 100.0),
            min_apparent_temperature: self.min_apparent_temperature.map(round_to_int),
            midday_weather_code: self.midday_weather_code,
            max_precipitation_probability: round_to_int(self.max_precipitation_probability),
            max_uv_index: round_to_int(uv_index),
            min_visibility: self.min_visibility.map(round_to_int),
            visibility_snapshots: VisibilitySnapshots {
                h08: round_to_int(h08),
                h12: round_to_int(h12),
                h16: round_to_int(h16),
            },
            average_humidity,
        };
        let condition =
            Condition::from_totals(summary.total_precipitation, summary.total_snowfall);
        (summary, condition)
    }
}

/// Summarizes the daytime window of `date`.
///
/// The daily UV index falls back to the first forecast day when `date` is not
/// in the daily series, whereas a missing hourly day is an error: without it
/// there is nothing to aggregate.
///
/// # Errors
///
/// Returns [`ForecastError::DateNotAvailable`] if no hourly timestamp falls on `date`.
pub fn summarize_day(
    response: &OpenMeteoResponse,
    date: NaiveDate,
) -> Result<(DailySummary, Condition), ForecastError> {
    let day = date.format("%Y-%m-%d").to_string();

    let uv_index = response
        .daily
        .as_ref()
        .and_then(|daily| at(&daily.uv_index_max, daily.index_or_first(&day)))
        .unwrap_or(0.0);

    let hourly = &response.hourly;
    let day_start = hourly
        .day_start(&day)
        .ok_or(ForecastError::DateNotAvailable(date))?;

    let mut accumulator = WindowAccumulator::default();
    for hour in WINDOW_START_HOUR..=WINDOW_END_HOUR {
        let index = day_start + hour;
        if index >= hourly.time.len() {
            break;
        }
        accumulator.observe(hourly, hour, index);
    }
    Ok(accumulator.finish(uv_index))
}
