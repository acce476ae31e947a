//! Record store access for leads.
//!
//! [`RecordStore`] is the contract the board relies on: list, get, create,
//! update and delete single records, with no multi-record transaction.
//! [`HttpRecordStore`] speaks the CRM custom service's REST dialect and
//! [`MemoryRecordStore`] keeps everything in process.

mod error;
mod http;
mod list_params;
mod memory;
mod record_store;


pub use error::{StoreError, StoreResult};
pub use http::http_record_store::HttpRecordStore;
pub use http::sort_mapper::map_sort_field;
pub use list_params::{ListFilter, ListPage, ListParams, Pagination, Sort, SortOrder};
pub use memory::memory_record_store::MemoryRecordStore;
pub use record_store::{RecordStore, UpdateParams};
