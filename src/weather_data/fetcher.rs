use crate::config::ForecastConfig;
use crate::source::WeatherRequest;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::open_meteo::{OpenMeteoResponse, DAILY_FIELDS, HOURLY_FIELDS};
use log::{debug, info, warn};
use reqwest::Client;
use std::sync::Arc;

/// Downloads hourly and daily forecasts from an Open-Meteo compatible endpoint.
pub struct WeatherFetcher {
    client: Client,
    config: Arc<ForecastConfig>,
}

impl WeatherFetcher {
    pub fn new(client: Client, config: Arc<ForecastConfig>) -> Self {
        Self { client, config }
    }

    fn query_params(&self, request: &WeatherRequest) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", request.location.0.to_string()),
            ("longitude", request.location.1.to_string()),
            ("elevation", request.elevation.to_string()),
            ("daily", DAILY_FIELDS.join(",")),
            ("hourly", HOURLY_FIELDS.join(",")),
            ("timezone", self.config.timezone.clone()),
            ("wind_speed_unit", "kmh".to_string()),
            ("precipitation_unit", "mm".to_string()),
            (
                "forecast_days",
                self.config.effective_forecast_days().to_string(),
            ),
        ]
    }

    /// Fetches the forecast for the station and elevation in `request`.
    ///
    /// A non-success status or a body that does not match [`OpenMeteoResponse`]
    /// is an error; there is no retry.
    pub async fn fetch(
        &self,
        request: &WeatherRequest,
    ) -> Result<OpenMeteoResponse, WeatherDataError> {
        let http_request = self
            .client
            .get(&self.config.weather_url)
            .query(&self.query_params(request))
            .build()
            .map_err(|e| WeatherDataError::RequestBuild(self.config.weather_url.clone(), e))?;
        let url = http_request.url().to_string();
        info!("Downloading weather forecast from {}", url);

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url, e)
                });
            }
        };

        let forecast = response
            .json::<OpenMeteoResponse>()
            .await
            .map_err(|e| WeatherDataError::Decode {
                url: url.clone(),
                source: e,
            })?;
        debug!(
            "Received {} hourly readings from {}",
            forecast.hourly.time.len(),
            url
        );
        Ok(forecast)
    }
}
