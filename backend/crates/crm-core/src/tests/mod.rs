mod board;

use crate::{Lead, LeadStage, StageSet};

/// Stage set used across the tests: three columns, `new` first.
pub(crate) fn test_stages() -> StageSet {
    StageSet::new(vec![
        LeadStage::new("new", "New"),
        LeadStage::new("contacted", "Contacted"),
        LeadStage::new("won", "Won"),
    ])
    .unwrap()
}

/// Leads named by their ids, indexed in the order given.
pub(crate) fn stage_of(stage: &str, ids: &[&str]) -> Vec<Lead> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| Lead::new(*id, stage, index as i32))
        .collect()
}

pub(crate) fn ids(leads: &[Lead]) -> Vec<String> {
    leads.iter().map(|lead| lead.id.to_string()).collect()
}

pub(crate) fn indices(leads: &[Lead]) -> Vec<i32> {
    leads.iter().map(|lead| lead.index).collect()
}
