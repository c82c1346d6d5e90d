/// In-memory query engine over loaded records
mod in_memory_record_source;

pub use in_memory_record_source::InMemoryRecordSource;
