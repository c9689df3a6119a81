pub mod massif;
pub mod season;
pub mod summary;
pub mod weather_code;
