use crate::shared::error::GridError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest scan export we are willing to load into memory (100 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks an input file before it is read into memory.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target.
///
/// # Arguments
/// * `path` - File to inspect
/// * `description` - Human-readable name used in error messages (e.g. "scan records")
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// - The metadata cannot be read (usually: the file does not exist)
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn inspect_input_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| GridError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(GridError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} file is a symbolic link", description),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(GridError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} path is not a regular file", description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(GridError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} file is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the scan export or filter it before loading".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}
