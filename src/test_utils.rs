//! Fixtures shared by the unit tests.

use crate::avalanche::bulletin::BulletinDocument;
use crate::avalanche::error::BulletinError;
use crate::source::{ForecastSource, WeatherRequest};
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::open_meteo::{DailySeries, HourlySeries, OpenMeteoResponse};
use chrono::{Duration, NaiveDate};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds Open-Meteo payloads covering whole days starting at 00:00.
pub(crate) struct PayloadBuilder {
    start: NaiveDate,
    days: usize,
    hourly: HourlySeries,
    daily: DailySeries,
}

impl PayloadBuilder {
    pub(crate) fn new(start: NaiveDate, days: usize) -> Self {
        let time = (0..days * 24)
            .map(|i| {
                let day = start + Duration::days((i / 24) as i64);
                format!("{}T{:02}:00", day.format("%Y-%m-%d"), i % 24)
            })
            .collect();
        Self {
            start,
            days,
            hourly: HourlySeries {
                time,
                ..Default::default()
            },
            daily: DailySeries {
                time: (0..days)
                    .map(|d| {
                        (start + Duration::days(d as i64))
                            .format("%Y-%m-%d")
                            .to_string()
                    })
                    .collect(),
                uv_index_max: Vec::new(),
            },
        }
    }

    /// Drops every hour from `len` onward.
    pub(crate) fn truncate(mut self, len: usize) -> Self {
        self.hourly.time.truncate(len);
        self
    }

    /// Fills a series from the hour of day (0-23) of each timestamp.
    pub(crate) fn hourly(self, field: &str, value: impl Fn(usize) -> Option<f64>) -> Self {
        self.hourly_abs(field, |i| value(i % 24))
    }

    /// Fills a series from the absolute index of each timestamp.
    pub(crate) fn hourly_abs(mut self, field: &str, value: impl Fn(usize) -> Option<f64>) -> Self {
        let values = (0..self.hourly.time.len()).map(value).collect();
        let series = match field {
            "temperature_2m" => &mut self.hourly.temperature_2m,
            "apparent_temperature" => &mut self.hourly.apparent_temperature,
            "precipitation" => &mut self.hourly.precipitation,
            "snowfall" => &mut self.hourly.snowfall,
            "snow_depth" => &mut self.hourly.snow_depth,
            "visibility" => &mut self.hourly.visibility,
            "wind_speed_80m" => &mut self.hourly.wind_speed_80m,
            "wind_speed_10m" => &mut self.hourly.wind_speed_10m,
            "wind_gusts_10m" => &mut self.hourly.wind_gusts_10m,
            "relative_humidity_2m" => &mut self.hourly.relative_humidity_2m,
            "precipitation_probability" => &mut self.hourly.precipitation_probability,
            other => panic!("unknown hourly field {other}"),
        };
        *series = values;
        self
    }

    pub(crate) fn hourly_code(mut self, value: impl Fn(usize) -> Option<i64>) -> Self {
        self.hourly.weather_code = (0..self.hourly.time.len()).map(|i| value(i % 24)).collect();
        self
    }

    pub(crate) fn daily_uv(mut self, values: &[f64]) -> Self {
        assert_eq!(values.len(), self.days, "one UV value per day starting {}", self.start);
        self.daily.uv_index_max = values.iter().copied().map(Some).collect();
        self
    }

    pub(crate) fn build(self) -> OpenMeteoResponse {
        OpenMeteoResponse {
            daily: Some(self.daily),
            hourly: self.hourly,
        }
    }
}

/// Starts a local HTTP server answering every request with `status` and
/// `body`, and returns its base URL.
pub(crate) async fn serve_http(status: u16, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let body = body.clone();
            tokio::spawn(async move {
                let mut buffer = vec![0u8; 16 * 1024];
                let mut read = 0;
                while read < buffer.len() {
                    match stream.read(&mut buffer[read..]).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            read += n;
                            if buffer[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }
                let response = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });
    format!("http://{}", address)
}

pub(crate) fn bulletin(json: &str) -> BulletinDocument {
    serde_json::from_str(json).unwrap()
}

/// In-memory [`ForecastSource`] returning canned payloads.
pub(crate) struct StaticSource {
    weather: Result<OpenMeteoResponse, String>,
    bulletin: Option<BulletinDocument>,
    pub(crate) requests: Mutex<Vec<WeatherRequest>>,
    pub(crate) bulletin_calls: AtomicUsize,
}

impl StaticSource {
    pub(crate) fn new(weather: OpenMeteoResponse, bulletin: Option<BulletinDocument>) -> Self {
        Self {
            weather: Ok(weather),
            bulletin,
            requests: Mutex::new(Vec::new()),
            bulletin_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose weather payload does not parse.
    pub(crate) fn malformed_weather(bulletin: Option<BulletinDocument>) -> Self {
        Self {
            weather: Err(r#"{ "daily": {} }"#.to_string()),
            bulletin,
            requests: Mutex::new(Vec::new()),
            bulletin_calls: AtomicUsize::new(0),
        }
    }
}

impl ForecastSource for StaticSource {
    async fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<OpenMeteoResponse, WeatherDataError> {
        self.requests.lock().unwrap().push(*request);
        match &self.weather {
            Ok(response) => Ok(response.clone()),
            Err(body) => Ok(serde_json::from_str(body)?),
        }
    }

    async fn fetch_bulletin(&self) -> Result<BulletinDocument, BulletinError> {
        self.bulletin_calls.fetch_add(1, Ordering::SeqCst);
        match &self.bulletin {
            Some(document) => Ok(document.clone()),
            None => Ok(serde_json::from_str("<html>503 Service Unavailable</html>")?),
        }
    }
}
