use serde::{Deserialize, Serialize};

/// One pipeline column: the value stored on leads and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStage {
    pub value: String,
    pub label: String,
}

impl LeadStage {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
