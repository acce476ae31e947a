use crm_core::{Lead, LeadDraft, LeadId};
use crm_store::{
    ListPage, ListParams, MemoryRecordStore, RecordStore, StoreError, StoreResult, UpdateParams,
};

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Store call as seen by [`FlakyStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List(String),
    Update(LeadId),
}

/// In-memory store that yields before every call and fails on request.
pub struct FlakyStore {
    inner: MemoryRecordStore,
    failing_updates: Mutex<HashSet<LeadId>>,
    failing_lists: AtomicUsize,
    calls: Mutex<Vec<StoreCall>>,
}

impl FlakyStore {
    pub fn new(leads: impl IntoIterator<Item = Lead>) -> Self {
        Self {
            inner: MemoryRecordStore::with_leads(leads),
            failing_updates: Mutex::new(HashSet::new()),
            failing_lists: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every update of `id` fails from now on.
    pub fn fail_updates_of(&self, id: impl Into<LeadId>) {
        self.failing_updates.lock().unwrap().insert(id.into());
    }

    /// The next `count` list calls fail.
    pub fn fail_next_lists(&self, count: usize) {
        self.failing_lists.store(count, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, StoreCall::Update(_)))
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub async fn snapshot(&self) -> Vec<Lead> {
        self.inner.snapshot().await
    }

    /// Stored leads of `stage`, ordered by index.
    pub async fn stage(&self, stage: &str) -> Vec<Lead> {
        let mut leads: Vec<Lead> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|lead| lead.stage == stage)
            .collect();
        leads.sort_by_key(|lead| lead.index);
        leads
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_list_failure(&self) -> bool {
        self.failing_lists
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn list(&self, params: &ListParams) -> StoreResult<ListPage> {
        tokio::task::yield_now().await;
        let stage = params
            .filter
            .0
            .get("stage")
            .and_then(|value| value.as_str())
            .unwrap_or("*")
            .to_string();
        self.record(StoreCall::List(stage));

        if self.take_list_failure() {
            return Err(StoreError::api(503, "service unavailable"));
        }
        self.inner.list(params).await
    }

    async fn get(&self, id: &LeadId) -> StoreResult<Lead> {
        self.inner.get(id).await
    }

    async fn create(&self, draft: &LeadDraft) -> StoreResult<Lead> {
        self.inner.create(draft).await
    }

    async fn update(&self, params: &UpdateParams) -> StoreResult<Lead> {
        tokio::task::yield_now().await;
        self.record(StoreCall::Update(params.id.clone()));

        if self.failing_updates.lock().unwrap().contains(&params.id) {
            return Err(StoreError::api(500, format!("update of {} rejected", params.id)));
        }
        self.inner.update(params).await
    }

    async fn delete(&self, id: &LeadId) -> StoreResult<()> {
        self.inner.delete(id).await
    }
}
