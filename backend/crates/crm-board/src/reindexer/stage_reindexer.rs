use crate::{BoardError, BoardMetrics, BoardResult, BoardSettings, FailedUpdate, ReindexReport};

use crm_core::{Lead, LeadMove, ReindexBatch};
use crm_store::{ListFilter, RecordStore, Sort, UpdateParams};

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;

/// Persists board moves as batches of single-record updates.
///
/// Clones share the store and the move guard. While `serialize_moves` is on,
/// a move holds the guard from the ordering fetch until its last update has
/// settled, so two moves of the same process never interleave. Moves made by
/// other clients of the store are not coordinated.
pub struct StageReindexer<S> {
    store: Arc<S>,
    move_guard: Arc<Mutex<()>>,
    page_size: u32,
    serialize_moves: bool,
    metrics: BoardMetrics,
}

impl<S> Clone for StageReindexer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            move_guard: Arc::clone(&self.move_guard),
            page_size: self.page_size,
            serialize_moves: self.serialize_moves,
            metrics: self.metrics.clone(),
        }
    }
}

impl<S: RecordStore> StageReindexer<S> {
    pub fn new(store: Arc<S>, settings: &BoardSettings) -> Self {
        Self {
            store,
            move_guard: Arc::new(Mutex::new(())),
            page_size: settings.page_size,
            serialize_moves: settings.serialize_moves,
            metrics: BoardMetrics::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Write `lead_move` to the store.
    ///
    /// The affected stages are read fresh from the store, never taken from
    /// the board, because the board may only show part of a stage. Fails
    /// with [`BoardError::Fetch`] before any write when a read fails, and
    /// with [`BoardError::PartialFailure`] once every update has settled if
    /// any of them failed.
    pub async fn persist(&self, lead_move: &LeadMove) -> BoardResult<ReindexReport> {
        if lead_move.is_noop() {
            return Ok(ReindexReport::default());
        }

        let _guard = if self.serialize_moves {
            Some(self.move_guard.lock().await)
        } else {
            None
        };

        let batch = self.plan(lead_move).await.inspect_err(|e| {
            error!(
                "Aborting move of lead {}, nothing was written: {}",
                lead_move.lead.id, e
            );
        })?;
        debug!(
            "Lead {} {}[{}] -> {}[{:?}]: {} updates planned",
            lead_move.lead.id,
            lead_move.source.stage,
            lead_move.source.index,
            lead_move.destination.stage,
            lead_move.destination.index,
            batch.len()
        );

        let report = self.execute(batch).await;
        if report.is_complete() {
            self.metrics.move_persisted();
            info!(
                "Persisted move of lead {} to stage '{}' ({} updates)",
                lead_move.lead.id,
                lead_move.destination.stage,
                report.issued()
            );
        } else {
            warn!(
                "Move of lead {} left {} of {} updates unapplied",
                lead_move.lead.id,
                report.failed.len(),
                report.issued()
            );
        }

        report.into_result()
    }

    /// Read the affected orderings and plan the batch, without writing.
    pub async fn plan(&self, lead_move: &LeadMove) -> BoardResult<ReindexBatch> {
        if lead_move.is_same_stage() {
            let ordering = self.fetch_ordering(&lead_move.source.stage).await?;
            return Ok(ReindexBatch::plan(lead_move, &ordering, &[]));
        }

        let (source, destination) = tokio::join!(
            self.fetch_ordering(&lead_move.source.stage),
            self.fetch_ordering(&lead_move.destination.stage),
        );
        Ok(ReindexBatch::plan(lead_move, &source?, &destination?))
    }

    async fn fetch_ordering(&self, stage: &str) -> BoardResult<Vec<Lead>> {
        self.store
            .list_all(&ListFilter::stage(stage), &Sort::by_index(), self.page_size)
            .await
            .map_err(|source| {
                self.metrics.fetch_failed();
                BoardError::fetch(stage, source)
            })
    }

    /// Issue every update at once and wait for all of them to settle.
    async fn execute(&self, batch: ReindexBatch) -> ReindexReport {
        let updates = batch.into_updates();
        self.metrics.updates_issued(updates.len());

        let calls = updates.into_iter().map(|planned| async move {
            let params = UpdateParams::new(
                planned.id.clone(),
                planned.patch,
                Some(planned.previous),
            );
            let result = self.store.update(&params).await;
            (planned.id, result)
        });

        let mut report = ReindexReport::default();
        for (id, result) in join_all(calls).await {
            match result {
                Ok(lead) => report.updated.push(lead),
                Err(e) => {
                    warn!("Update of lead {} failed: {}", id, e);
                    report.failed.push(FailedUpdate {
                        id,
                        message: e.to_string(),
                    });
                }
            }
        }

        self.metrics.updates_failed(report.failed.len());
        report
    }
}
