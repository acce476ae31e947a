use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a lead as the record store reports it.
///
/// The custom service serializes its BigInt keys as strings while other
/// providers use plain integers, so both shapes are accepted and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for LeadId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LeadId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LeadId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
