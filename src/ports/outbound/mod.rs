/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the record store, the output destination and the console.
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_source;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_source::RecordSource;
