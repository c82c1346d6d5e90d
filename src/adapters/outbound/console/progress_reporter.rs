use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting status to stderr
///
/// Writes to stderr so status lines never mix with the JSON payload on stdout.
/// A quiet reporter swallows everything except errors.
#[derive(Debug, Default)]
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}
