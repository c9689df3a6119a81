use thiserror::Error;

/// Failure to obtain a usable weather payload.
#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Failed to build weather request for {0}")]
    RequestBuild(String, #[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse weather payload from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed weather payload")]
    JsonParse(#[from] serde_json::Error),
}
