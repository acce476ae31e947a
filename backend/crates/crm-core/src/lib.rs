pub mod board;
pub mod error;
pub mod models;
pub mod moves;
pub mod reindex;

pub use board::stage_buckets::{StageBucket, StageBuckets};
pub use board::stage_summary::StageSummary;
pub use error::{CoreError, Result};
pub use models::lead::Lead;
pub use models::lead_draft::LeadDraft;
pub use models::lead_id::LeadId;
pub use models::lead_patch::LeadPatch;
pub use models::lead_stage::LeadStage;
pub use models::stage_set::StageSet;
pub use moves::card_position::CardPosition;
pub use moves::drag_end::DragEnd;
pub use moves::lead_move::{LeadMove, ResolvedDrag, StageIndex, StageSlot};
pub use reindex::contiguity::is_contiguous;
pub use reindex::reindex_batch::{PlannedUpdate, ReindexBatch};

#[cfg(test)]
mod tests;
