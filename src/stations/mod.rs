pub mod error;
pub mod reference_data;
pub mod resolve_station;
