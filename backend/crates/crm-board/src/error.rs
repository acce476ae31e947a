use crm_core::{CoreError, LeadId};
use crm_store::StoreError;

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// An update call of a batch that did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpdate {
    pub id: LeadId,
    pub message: String,
}

impl fmt::Display for FailedUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Failed to read the ordering of stage '{stage}': {source} {location}")]
    Fetch {
        stage: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("{} updates failed, {succeeded} succeeded ({}) {location}", .failed.len(), join(.failed))]
    PartialFailure {
        failed: Vec<FailedUpdate>,
        succeeded: usize,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

fn join(failed: &[FailedUpdate]) -> String {
    failed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BoardError {
    #[track_caller]
    pub fn fetch(stage: impl Into<String>, source: StoreError) -> Self {
        Self::Fetch {
            stage: stage.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn partial_failure(failed: Vec<FailedUpdate>, succeeded: usize) -> Self {
        Self::PartialFailure {
            failed,
            succeeded,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the store may now hold a half-applied move
    pub fn left_store_inconsistent(&self) -> bool {
        matches!(self, Self::PartialFailure { succeeded, .. } if *succeeded > 0)
    }
}

impl From<CoreError> for BoardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for BoardError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;
