use metrics::counter;

/// Metrics collector for board operations
#[derive(Clone)]
pub struct BoardMetrics {
    prefix: &'static str,
}

impl BoardMetrics {
    pub fn new() -> Self {
        Self { prefix: "crm_board" }
    }

    /// Record a drag applied to the local buckets
    pub fn move_applied(&self, kind: &str) {
        counter!(format!("{}.moves.applied", self.prefix)).increment(1);
        counter!(format!("{}.moves.applied.{}", self.prefix, kind)).increment(1);
    }

    /// Record a move whose every update call succeeded
    pub fn move_persisted(&self) {
        counter!(format!("{}.moves.persisted", self.prefix)).increment(1);
    }

    /// Record update calls sent for one batch
    pub fn updates_issued(&self, count: usize) {
        counter!(format!("{}.updates.issued", self.prefix)).increment(count as u64);
    }

    /// Record update calls that failed
    pub fn updates_failed(&self, count: usize) {
        counter!(format!("{}.updates.failed", self.prefix)).increment(count as u64);
    }

    /// Record a failed ordering read
    pub fn fetch_failed(&self) {
        counter!(format!("{}.fetch.failed", self.prefix)).increment(1);
    }

    /// Record a board refetch
    pub fn refetched(&self, changed: bool) {
        counter!(format!("{}.refetches", self.prefix)).increment(1);
        if changed {
            counter!(format!("{}.refetches.changed", self.prefix)).increment(1);
        }
    }
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self::new()
    }
}
