use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the grid response was produced
    Success = 0,
    /// Application error (record source failure, timeout, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while translating, executing or presenting a grid redraw.
///
/// Uses thiserror to derive Display and Error traits; callers usually
/// carry these inside `anyhow::Error` and downcast when they need the variant.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid sort column index {index}: the request declares {column_count} column(s)\n\n💡 Hint: Sort indexes refer to positions in the request's column list")]
    InvalidColumn { index: usize, column_count: usize },

    #[error("Unknown column: {name}\n\n💡 Hint: Run `scan-grid columns` to list the available column names")]
    UnknownColumn { name: String },

    #[error("Record source did not answer draw {draw} within {millis}ms\n\n💡 Hint: Increase read_timeout_secs or check the record source")]
    ReadTimeout { draw: u64, millis: u128 },

    #[error("Scan records file not found: {path}\n\n💡 Hint: Pass --records or set `records` in scan-grid.config.yml")]
    RecordsFileNotFound { path: PathBuf },

    #[error("Failed to parse scan records file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a JSON array of flattened file records")]
    RecordsParseError { path: PathBuf, details: String },

    #[error("Invalid grid request: {details}")]
    InvalidRequest { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
