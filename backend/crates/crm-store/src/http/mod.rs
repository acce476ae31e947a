pub(crate) mod http_record_store;
pub(crate) mod sort_mapper;
