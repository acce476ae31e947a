use crate::{CoreError, LeadStage, Result as CoreResult};

use std::collections::HashSet;
use std::panic::Location;

use error_location::ErrorLocation;

/// Ordered list of the board's valid stages.
///
/// The first stage doubles as the fallback for leads whose stage is not
/// configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    stages: Vec<LeadStage>,
}

impl StageSet {
    #[track_caller]
    pub fn new(stages: Vec<LeadStage>) -> CoreResult<Self> {
        if stages.is_empty() {
            return Err(CoreError::EmptyStages {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut seen = HashSet::new();
        for stage in &stages {
            if stage.value.trim().is_empty() {
                return Err(CoreError::validation("stage value cannot be blank"));
            }
            if !seen.insert(stage.value.as_str()) {
                return Err(CoreError::DuplicateStage {
                    value: stage.value.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(Self { stages })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.stages.iter().any(|s| s.value == value)
    }

    pub fn fallback(&self) -> &LeadStage {
        // Non-empty by construction
        &self.stages[0]
    }

    /// Display label for a stage value, or the value itself when unknown.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.stages
            .iter()
            .find(|s| s.value == value)
            .map(|s| s.label.as_str())
            .unwrap_or(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeadStage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
