use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PAGE_SIZE, DEFAULT_SERIALIZE_MOVES, DEFAULT_STAGES,
    MAX_PAGE_SIZE, MIN_PAGE_SIZE, StageConfig,
};

use std::collections::HashSet;

use serde::Deserialize;

/// Pipeline board settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Stages in column order; the first one receives leads with an unknown stage
    pub stages: Vec<StageConfig>,
    /// Records requested per page when reading a stage's ordering
    pub page_size: u32,
    /// Hold each move's persistence until the previous move's batch settled
    pub serialize_moves: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STAGES
                .iter()
                .map(|(value, label)| StageConfig {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            page_size: DEFAULT_PAGE_SIZE,
            serialize_moves: DEFAULT_SERIALIZE_MOVES,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.stages.is_empty() {
            return Err(ConfigError::board("board.stages must not be empty"));
        }

        let mut seen = HashSet::new();
        for stage in &self.stages {
            if stage.value.trim().is_empty() {
                return Err(ConfigError::board("board.stages values must not be blank"));
            }
            if !seen.insert(stage.value.as_str()) {
                return Err(ConfigError::board(format!(
                    "board.stages contains '{}' more than once",
                    stage.value
                )));
            }
        }

        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::board(format!(
                "board.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        Ok(())
    }
}
