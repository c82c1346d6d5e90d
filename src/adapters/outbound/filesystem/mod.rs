/// Filesystem adapters: the scan records file and output files
mod file_writer;
mod json_record_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_record_source::JsonFileRecordSource;
