mod avalanche;
mod checklist;
mod config;
mod error;
mod forecaster;
mod risk;
mod source;
mod stations;
mod types;
mod utils;
mod weather_data;

#[cfg(test)]
mod test_utils;

pub use error::ForecastError;
pub use forecaster::*;

pub use config::*;
pub use source::*;

pub use types::massif::*;
pub use types::season::Season;
pub use types::summary::*;
pub use types::weather_code::WeatherCode;

pub use stations::reference_data::ReferenceData;
pub use stations::resolve_station::{ResolvedStation, StationResolver};

pub use weather_data::aggregator::{summarize_day, WINDOW_END_HOUR, WINDOW_START_HOUR};
pub use weather_data::fetcher::WeatherFetcher;
pub use weather_data::open_meteo::{DailySeries, HourlySeries, OpenMeteoResponse};

pub use avalanche::bulletin::*;
pub use avalanche::fetcher::BulletinFetcher;

pub use risk::avalanche::{avalanche_tier, AvalancheOutlook};
pub use risk::factors::*;
pub use risk::report::*;
pub use risk::tier::Tier;

pub use checklist::*;

pub use avalanche::error::BulletinError;
pub use stations::error::{ReferenceDataError, ResolveStationError};
pub use weather_data::error::WeatherDataError;
