use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures while determining who this host is
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("{0}")]
    Hostname(std::io::Error),
    #[error("hostname is not valid UTF-8: {0:?}")]
    InvalidHostname(std::ffi::OsString),
    #[error("{0}")]
    Interfaces(std::io::Error),
    #[error("no host IP address available")]
    NoHostIp,
}

/// Failures while reading or writing the request history file
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Error reading history file: {0}")]
    Read(std::io::Error),
    #[error("Error parsing history: {0}")]
    Parse(serde_json::Error),
    #[error("Error serializing history: {0}")]
    Serialize(serde_json::Error),
    #[error("Error creating directory structure: {0}")]
    CreateDir(std::io::Error),
    #[error("Error writing history file: {0}")]
    Write(std::io::Error),
}

/// Request-level failures that end handling with a 500
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("{0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
