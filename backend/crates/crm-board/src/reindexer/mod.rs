pub(crate) mod reindex_report;
pub(crate) mod stage_reindexer;
