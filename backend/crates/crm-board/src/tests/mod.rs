
use crm_core::{Lead, LeadStage, StageSet};

pub(crate) fn test_stages() -> StageSet {
    StageSet::new(vec![
        LeadStage::new("new", "New"),
        LeadStage::new("contacted", "Contacted"),
        LeadStage::new("won", "Won"),
    ])
    .unwrap()
}

/// `count` leads of `stage` at indices `0..count`, numbered from `first_id`.
pub(crate) fn seeded(stage: &str, first_id: i64, count: usize) -> Vec<Lead> {
    (0..count)
        .map(|i| Lead::new(first_id + i as i64, stage, i as i32))
        .collect()
}

pub(crate) fn indices(leads: &[Lead]) -> Vec<i32> {
    leads.iter().map(|lead| lead.index).collect()
}
