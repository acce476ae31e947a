use crate::BoardResult;

use crm_config::BoardConfig;
use crm_core::{LeadStage, StageSet};
use crm_store::ListFilter;

/// Runtime knobs of a board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSettings {
    /// Records per page when reading from the store
    pub page_size: u32,
    /// Persist one move at a time
    pub serialize_moves: bool,
    /// Restricts which leads the board shows; moves still reindex whole stages
    pub filter: ListFilter,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl BoardSettings {
    pub fn from_config(config: &BoardConfig) -> Self {
        Self {
            page_size: config.page_size,
            serialize_moves: config.serialize_moves,
            filter: ListFilter::new(),
        }
    }

    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The configured stages, in column order.
    pub fn stage_set(config: &BoardConfig) -> BoardResult<StageSet> {
        let stages = config
            .stages
            .iter()
            .map(|stage| LeadStage::new(stage.value.clone(), stage.label.clone()))
            .collect();
        Ok(StageSet::new(stages)?)
    }
}
