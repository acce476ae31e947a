use serde::Serialize;

/// Column header figures: lead count and total requested loan amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: String,
    pub label: String,
    pub count: usize,
    pub total_amount: i64,
}
