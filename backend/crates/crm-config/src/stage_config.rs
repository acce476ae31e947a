use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageConfig {
    pub value: String,
    pub label: String,
}
