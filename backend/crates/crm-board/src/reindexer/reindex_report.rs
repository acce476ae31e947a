use crate::{BoardError, BoardResult, FailedUpdate};

use crm_core::Lead;

/// Outcome of one persisted batch, after every update call settled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReindexReport {
    /// Records as the store returned them
    pub updated: Vec<Lead>,
    pub failed: Vec<FailedUpdate>,
}

impl ReindexReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total update calls issued
    pub fn issued(&self) -> usize {
        self.updated.len() + self.failed.len()
    }

    /// The report itself when nothing failed, a partial failure otherwise.
    #[track_caller]
    pub fn into_result(self) -> BoardResult<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(BoardError::partial_failure(self.failed, self.updated.len()))
        }
    }
}
