use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A lead that has not been stored yet.
///
/// When `index` is absent the store appends the lead to the end of its stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LeadDraft {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            index: None,
            fields: Map::new(),
        }
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}
