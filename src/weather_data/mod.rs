pub mod aggregator;
pub mod error;
pub mod fetcher;
pub mod open_meteo;
