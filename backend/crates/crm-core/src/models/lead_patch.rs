use serde::{Deserialize, Serialize};

/// Partial update of a lead's board placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

impl LeadPatch {
    pub fn index(index: i32) -> Self {
        Self {
            stage: None,
            index: Some(index),
        }
    }

    pub fn stage_and_index(stage: impl Into<String>, index: i32) -> Self {
        Self {
            stage: Some(stage.into()),
            index: Some(index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stage.is_none() && self.index.is_none()
    }
}
