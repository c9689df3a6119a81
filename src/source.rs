//! The upstream data providers consumed by [`crate::Forecaster`].

use crate::avalanche::bulletin::BulletinDocument;
use crate::avalanche::error::BulletinError;
use crate::avalanche::fetcher::BulletinFetcher;
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::types::massif::LatLon;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::fetcher::WeatherFetcher;
use crate::weather_data::open_meteo::OpenMeteoResponse;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;

/// Station and elevation to request a weather forecast for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRequest {
    pub location: LatLon,
    /// Elevation in meters used by the provider for downscaling.
    pub elevation: u32,
}

/// Supplies weather forecasts and the avalanche bulletin.
///
/// [`HttpSource`] talks to the real providers; tests substitute canned data.
pub trait ForecastSource {
    fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> impl Future<Output = Result<OpenMeteoResponse, WeatherDataError>> + Send;

    fn fetch_bulletin(
        &self,
    ) -> impl Future<Output = Result<BulletinDocument, BulletinError>> + Send;
}

/// Fetches from the HTTP endpoints named in a [`ForecastConfig`].
pub struct HttpSource {
    weather: WeatherFetcher,
    bulletin: BulletinFetcher,
}

impl HttpSource {
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ForecastError::HttpClient)?;
        let bulletin = BulletinFetcher::new(client.clone(), config.bulletin_url.clone());
        Ok(Self {
            weather: WeatherFetcher::new(client, Arc::new(config)),
            bulletin,
        })
    }
}

impl ForecastSource for HttpSource {
    async fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<OpenMeteoResponse, WeatherDataError> {
        self.weather.fetch(request).await
    }

    async fn fetch_bulletin(&self) -> Result<BulletinDocument, BulletinError> {
        self.bulletin.fetch().await
    }
}
