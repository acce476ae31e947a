pub mod stage_buckets;
pub mod stage_summary;
