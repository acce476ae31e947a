use crate::{ListFilter, ListPage, ListParams, Pagination, Sort, StoreResult};

use crm_core::{Lead, LeadDraft, LeadId, LeadPatch};

use async_trait::async_trait;

/// Single-record update request.
///
/// `previous_data` is the record as the caller last saw it; stores may use
/// it for change detection.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    pub id: LeadId,
    pub data: LeadPatch,
    pub previous_data: Option<Lead>,
}

impl UpdateParams {
    pub fn new(id: LeadId, data: LeadPatch, previous_data: Option<Lead>) -> Self {
        Self {
            id,
            data,
            previous_data,
        }
    }
}

/// CRUD access to lead records.
///
/// Every call is an independent operation; nothing groups several updates
/// into one atomic unit.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list(&self, params: &ListParams) -> StoreResult<ListPage>;

    async fn get(&self, id: &LeadId) -> StoreResult<Lead>;

    async fn create(&self, draft: &LeadDraft) -> StoreResult<Lead>;

    async fn update(&self, params: &UpdateParams) -> StoreResult<Lead>;

    async fn delete(&self, id: &LeadId) -> StoreResult<()>;

    /// Read every matching record, `page_size` records per request, until
    /// the reported total is reached.
    async fn list_all(
        &self,
        filter: &ListFilter,
        sort: &Sort,
        page_size: u32,
    ) -> StoreResult<Vec<Lead>> {
        let per_page = page_size.max(1);
        let mut page = 1;
        let mut leads = Vec::new();

        loop {
            let params = ListParams::new(
                filter.clone(),
                sort.clone(),
                Pagination::new(page, per_page),
            );
            let result = self.list(&params).await?;
            let received = result.data.len();
            leads.extend(result.data);

            // A short page is not the end: backends may cap the page size
            if received == 0 || leads.len() as u64 >= result.total {
                break;
            }
            page += 1;
        }

        Ok(leads)
    }
}
