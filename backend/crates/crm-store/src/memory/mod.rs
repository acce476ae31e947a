pub(crate) mod memory_record_store;
