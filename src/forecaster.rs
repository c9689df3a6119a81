//! The main entry point: resolves the station, fetches the forecast and the
//! avalanche bulletin, and reduces them to a [`Forecast`].

use crate::checklist::Checklist;
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::risk::report::RiskReport;
use crate::source::{ForecastSource, HttpSource, WeatherRequest};
use crate::stations::reference_data::ReferenceData;
use crate::stations::resolve_station::StationResolver;
use crate::types::summary::Forecast;
use crate::weather_data::aggregator::summarize_day;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A forecast together with its risk classification and gear checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub forecast: Forecast,
    pub risk: RiskReport,
    pub checklist: Checklist,
}

/// Produces daily mountain forecasts for the massifs of a [`ReferenceData`] table.
///
/// Create one with [`Forecaster::new()`] for the public providers and the
/// built-in Carpathian table, or with [`Forecaster::with_config()`] to point at
/// other endpoints. Every query fetches fresh data; nothing is cached.
///
/// # Examples
///
/// ```rust,no_run
/// # use massif_forecast::{Forecaster, ForecastError};
/// # use chrono::NaiveDate;
/// # async fn run() -> Result<(), ForecastError> {
/// let forecaster = Forecaster::new()?;
/// let forecast = forecaster
///     .forecast()
///     .massif("bucegi")
///     .date(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())
///     .altitude(2200)
///     .call()
///     .await?;
/// println!("Windchill: {:?}", forecast.summary.min_apparent_temperature);
/// # Ok(())
/// # }
/// ```
pub struct Forecaster<S = HttpSource> {
    source: S,
    resolver: StationResolver,
}

impl Forecaster<HttpSource> {
    /// Creates a forecaster using the default endpoints and the built-in
    /// Carpathian reference table.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::HttpClient`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ForecastError> {
        Self::with_config(ForecastConfig::default())
    }

    /// Creates a forecaster with custom endpoint settings.
    pub fn with_config(config: ForecastConfig) -> Result<Self, ForecastError> {
        let source = HttpSource::new(config)?;
        Ok(Self::with_source(
            source,
            Arc::new(ReferenceData::carpathians()),
        ))
    }

    /// Creates a forecaster whose massif table is read from a JSON file
    /// instead of the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::ReferenceData`] if the file cannot be read or
    /// does not describe a consistent table, and [`ForecastError::HttpClient`]
    /// if the HTTP client cannot be built.
    pub async fn from_reference_file(
        config: ForecastConfig,
        path: &Path,
    ) -> Result<Self, ForecastError> {
        let reference = ReferenceData::load(path).await?;
        let source = HttpSource::new(config)?;
        Ok(Self::with_source(source, Arc::new(reference)))
    }
}

#[bon]
impl<S: ForecastSource> Forecaster<S> {
    /// Creates a forecaster over any [`ForecastSource`] and reference table.
    pub fn with_source(source: S, reference: Arc<ReferenceData>) -> Self {
        Self {
            source,
            resolver: StationResolver::new(reference),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        self.resolver.reference()
    }

    /// Fetches and summarizes the forecast for one massif, date and altitude.
    ///
    /// The weather forecast and the avalanche bulletin are requested
    /// concurrently. A failed bulletin request is logged and leaves
    /// `avalanche_risk` empty; a failed weather request fails the query.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.massif(&str)`: **Required.** Massif id, e.g. `"bucegi"`.
    /// * `.date(NaiveDate)`: **Required.** Local calendar day to summarize.
    /// * `.altitude(u32)`: **Required.** Target altitude in meters.
    ///
    /// # Errors
    ///
    /// * [`ForecastError::UnknownMassif`] if the massif is not in the reference table.
    /// * [`ForecastError::WeatherUnavailable`] if the weather request or its parsing fails.
    /// * [`ForecastError::DateNotAvailable`] if the hourly series does not cover `date`.
    #[builder]
    pub async fn forecast(
        &self,
        massif: &str,
        date: NaiveDate,
        altitude: u32,
    ) -> Result<Forecast, ForecastError> {
        let station = self.resolver.resolve(massif, altitude)?;
        let request = WeatherRequest {
            location: station.location,
            elevation: altitude,
        };
        debug!(
            "Forecast for {} at {}m on {} uses the {} station {:?}",
            massif,
            altitude,
            date,
            if station.high_regime { "high" } else { "low" },
            station.location
        );

        let (weather, bulletin) = tokio::join!(
            self.source.fetch_weather(&request),
            self.source.fetch_bulletin()
        );
        let bulletin = match bulletin {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Avalanche bulletin unavailable, continuing without it: {}", e);
                None
            }
        };
        let weather = weather?;

        let (summary, condition) = summarize_day(&weather, date)?;

        let avalanche_risk = match (self.reference().bulletin_key(massif), &bulletin) {
            (Some(key), Some(document)) => document.assessment(key, altitude),
            _ => None,
        };
        info!(
            "Forecast ready for {} on {}: {}, avalanche level {:?}",
            massif,
            date,
            condition,
            avalanche_risk.as_ref().map(|a| a.level)
        );

        Ok(Forecast {
            massif_id: massif.to_string(),
            date,
            altitude,
            station: station.location,
            high_regime: station.high_regime,
            summary,
            condition,
            avalanche_risk,
        })
    }

    /// Like [`Forecaster::forecast`], additionally classifying the result and
    /// selecting the gear to pack.
    ///
    /// Takes the same builder arguments and returns the same errors.
    #[builder]
    pub async fn advise(
        &self,
        massif: &str,
        date: NaiveDate,
        altitude: u32,
    ) -> Result<Advisory, ForecastError> {
        let forecast = self
            .forecast()
            .massif(massif)
            .date(date)
            .altitude(altitude)
            .call()
            .await?;
        let profile = self.resolver.profile(massif)?;
        let risk = RiskReport::assess(&forecast, profile);
        let checklist = Checklist::for_forecast(&forecast);
        Ok(Advisory {
            forecast,
            risk,
            checklist,
        })
    }
}
