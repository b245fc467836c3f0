use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DeviceError {
    #[error("Invalid device url: {0}")]
    InvalidUrl(String),
    #[error("Failed to create the http client")]
    Client(#[source] reqwest::Error),
    #[error("Device did not respond within {0:?}")]
    Timeout(Duration),
    #[error("Device request failed")]
    Request(#[source] reqwest::Error),
    #[error("Device responded with status {0}")]
    Status(StatusCode),
    #[error("Device returned an empty response")]
    EmptyResponse,
    #[error("Device returned a malformed response")]
    Decode(#[from] serde_json::Error),
}
