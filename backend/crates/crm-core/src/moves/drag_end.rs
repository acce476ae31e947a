use crate::CardPosition;

use serde::{Deserialize, Serialize};

/// Drag-and-drop completion reported by the board view.
///
/// `destination` is `None` when the card was dropped outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub source: CardPosition,
    pub destination: Option<CardPosition>,
}

impl DragEnd {
    pub fn new(source: CardPosition, destination: Option<CardPosition>) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Dropped where it started, or dropped nowhere.
    pub fn is_noop(&self) -> bool {
        match self.destination {
            None => true,
            Some(ref destination) => *destination == self.source,
        }
    }
}
