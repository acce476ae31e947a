use crate::{CardPosition, Lead};

use serde::{Deserialize, Serialize};

/// A stage and a stored index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageIndex {
    pub stage: String,
    pub index: i32,
}

/// A stage and an optional stored index; `None` appends after the last lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSlot {
    pub stage: String,
    pub index: Option<i32>,
}

/// A move expressed in the store's index space.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadMove {
    pub lead: Lead,
    pub source: StageIndex,
    pub destination: StageSlot,
}

impl LeadMove {
    pub fn new(lead: Lead, destination: StageSlot) -> Self {
        let source = StageIndex {
            stage: lead.stage.clone(),
            index: lead.index,
        };
        Self {
            lead,
            source,
            destination,
        }
    }

    pub fn is_same_stage(&self) -> bool {
        self.source.stage == self.destination.stage
    }

    pub fn is_noop(&self) -> bool {
        self.is_same_stage() && self.destination.index == Some(self.source.index)
    }
}

/// A drag resolved against the current buckets, keeping both the displayed
/// positions (for the optimistic reorder) and the store-index move (for
/// persistence).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDrag {
    pub lead_move: LeadMove,
    pub source: CardPosition,
    pub destination: CardPosition,
}
