pub mod lead;
pub mod lead_draft;
pub mod lead_id;
pub mod lead_patch;
pub mod lead_stage;
pub mod stage_set;

mod amount;
