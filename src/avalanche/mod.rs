pub mod bulletin;
pub mod error;
pub mod fetcher;
