use thiserror::Error;

/// Failure to obtain the avalanche bulletin. Never fatal to a forecast.
#[derive(Debug, Error)]
pub enum BulletinError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read bulletin body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed avalanche bulletin")]
    JsonParse(#[from] serde_json::Error),
}
