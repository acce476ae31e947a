use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown stage: {stage} {location}")]
    UnknownStage {
        stage: String,
        location: ErrorLocation,
    },

    #[error("No lead at position {position} in stage {stage} ({len} leads) {location}")]
    PositionOutOfRange {
        stage: String,
        position: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Duplicate stage value: {value} {location}")]
    DuplicateStage {
        value: String,
        location: ErrorLocation,
    },

    #[error("At least one stage must be configured {location}")]
    EmptyStages { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_stage<S: Into<String>>(stage: S) -> Self {
        CoreError::UnknownStage {
            stage: stage.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn position_out_of_range<S: Into<String>>(stage: S, position: usize, len: usize) -> Self {
        CoreError::PositionOutOfRange {
            stage: stage.into(),
            position,
            len,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
