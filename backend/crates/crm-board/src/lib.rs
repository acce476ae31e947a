//! Kanban board over the lead record store.
//!
//! [`LeadBoard`] keeps the stage buckets the user sees, applies drag-end
//! events to them optimistically and hands each move to a
//! [`StageReindexer`], which rewrites the stored `stage`/`index` values with
//! one update call per affected lead.

mod board;
mod error;
mod metrics;
mod reindexer;

#[cfg(test)]
mod tests;

pub use board::board_settings::BoardSettings;
pub use board::lead_board::LeadBoard;
pub use error::{BoardError, BoardResult, FailedUpdate};
pub use metrics::BoardMetrics;
pub use reindexer::reindex_report::ReindexReport;
pub use reindexer::stage_reindexer::StageReindexer;
