use crate::{BoardMetrics, BoardResult, BoardSettings, ReindexReport, StageReindexer};

use crm_core::{DragEnd, LeadMove, StageBuckets, StageSet, StageSummary, is_contiguous};
use crm_store::{ListFilter, RecordStore, Sort};

use std::sync::Arc;

use log::{debug, warn};

/// The kanban view of the leads: one bucket per stage, kept in step with the
/// store by optimistic updates and refetches.
pub struct LeadBoard<S> {
    stages: StageSet,
    buckets: StageBuckets,
    filter: ListFilter,
    page_size: u32,
    reindexer: StageReindexer<S>,
    metrics: BoardMetrics,
}

impl<S: RecordStore> LeadBoard<S> {
    /// Read the leads matching `settings.filter` and build the buckets.
    pub async fn load(store: Arc<S>, stages: StageSet, settings: BoardSettings) -> BoardResult<Self> {
        let reindexer = StageReindexer::new(store, &settings);
        let mut board = Self {
            buckets: StageBuckets::empty(&stages),
            stages,
            filter: settings.filter,
            page_size: settings.page_size,
            reindexer,
            metrics: BoardMetrics::new(),
        };
        board.refetch().await?;
        Ok(board)
    }

    /// Re-read the store and replace the buckets when they differ.
    ///
    /// Returns whether the board changed.
    pub async fn refetch(&mut self) -> BoardResult<bool> {
        let leads = self
            .reindexer
            .store()
            .list_all(&self.filter, &Sort::by_index(), self.page_size)
            .await?;
        let buckets = StageBuckets::from_leads(leads, &self.stages);

        // Only a complete view can tell whether a stage's indices are sound
        if self.filter.is_empty() {
            for bucket in buckets.iter().filter(|bucket| !is_contiguous(&bucket.leads)) {
                warn!(
                    "Stage '{}' has non-contiguous indices ({} leads)",
                    bucket.stage,
                    bucket.leads.len()
                );
            }
        }

        let changed = buckets != self.buckets;
        if changed {
            self.buckets = buckets;
        }
        self.metrics.refetched(changed);
        Ok(changed)
    }

    /// Validate a drag and apply it to the buckets immediately.
    ///
    /// Returns the move to persist, or `None` when the drag changes nothing.
    /// Invalid drags fail before the buckets are touched.
    pub fn apply_drag_end(&mut self, event: &DragEnd) -> BoardResult<Option<LeadMove>> {
        let Some(drag) = self.buckets.resolve_drag(event)? else {
            return Ok(None);
        };

        self.buckets = self.buckets.apply_drag(&drag)?;

        let lead_move = drag.lead_move;
        let kind = if lead_move.is_same_stage() {
            "same_stage"
        } else {
            "cross_stage"
        };
        self.metrics.move_applied(kind);
        debug!(
            "Applied {} drag of lead {} to {}[{}]",
            kind, lead_move.lead.id, drag.destination.stage, drag.destination.position
        );

        Ok(Some(lead_move))
    }

    pub async fn persist(&self, lead_move: &LeadMove) -> BoardResult<ReindexReport> {
        self.reindexer.persist(lead_move).await
    }

    /// Apply a drag, persist it, then refetch whatever the outcome.
    ///
    /// A persistence error is returned after the refetch, so the buckets
    /// already show the store's actual state.
    pub async fn handle_drag_end(&mut self, event: &DragEnd) -> BoardResult<Option<ReindexReport>> {
        let Some(lead_move) = self.apply_drag_end(event)? else {
            return Ok(None);
        };

        let persisted = self.persist(&lead_move).await;
        if let Err(ref e) = persisted {
            warn!(
                "Move of lead {} failed, reloading the board: {}",
                lead_move.lead.id, e
            );
        }

        let refetched = self.refetch().await;
        let report = persisted?;
        refetched?;
        Ok(Some(report))
    }

    pub fn buckets(&self) -> &StageBuckets {
        &self.buckets
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn summaries(&self) -> Vec<StageSummary> {
        self.buckets.summaries(&self.stages)
    }

    /// Handle for persisting moves outside the board's own event flow.
    pub fn reindexer(&self) -> &StageReindexer<S> {
        &self.reindexer
    }
}
