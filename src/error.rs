use crate::stations::error::{ReferenceDataError, ResolveStationError};
use crate::weather_data::error::WeatherDataError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    UnknownMassif(#[from] ResolveStationError),

    #[error("Weather forecast unavailable")]
    WeatherUnavailable(#[from] WeatherDataError),

    #[error("No hourly forecast available for {0}")]
    DateNotAvailable(NaiveDate),

    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
