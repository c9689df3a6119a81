use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse reference data JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Massif '{0}' is listed more than once")]
    DuplicateMassif(String),

    #[error("Station coordinates reference unknown massif '{0}'")]
    OrphanStation(String),

    #[error("Bulletin key mapping references unknown massif '{0}'")]
    OrphanBulletinKey(String),
}

/// The massif cannot be resolved to a weather station.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveStationError {
    #[error("Unknown massif '{0}'")]
    UnknownMassif(String),

    #[error("No station coordinates configured for massif '{0}'")]
    MissingCoordinates(String),
}
