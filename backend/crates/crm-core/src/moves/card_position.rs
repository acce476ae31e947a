use serde::{Deserialize, Serialize};

/// Where a card sits on the board: its column and its displayed position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPosition {
    pub stage: String,
    pub position: usize,
}

impl CardPosition {
    pub fn new(stage: impl Into<String>, position: usize) -> Self {
        Self {
            stage: stage.into(),
            position,
        }
    }
}
