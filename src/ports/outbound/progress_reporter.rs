/// ProgressReporter port for user-facing status messages
///
/// Diagnostics go through `tracing`; this port carries the short status lines
/// a CLI user expects to see on stderr.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
