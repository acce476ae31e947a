pub mod contiguity;
pub mod reindex_batch;
