/// Mock implementations for testing
mod mock_record_source;

pub use mock_record_source::{FailingRead, MockRecordSource};
