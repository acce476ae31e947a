use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to a record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timed out: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_timeout() {
            StoreError::Timeout {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            StoreError::Http {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        StoreError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        StoreError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: impl ToString) -> Self {
        StoreError::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        StoreError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::Api { status: 404, .. }
        )
    }

    /// Failures that may succeed when tried again later
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Http { .. } | StoreError::Timeout { .. } => true,
            StoreError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        StoreError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        StoreError::from_json(err)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
