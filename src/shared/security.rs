use crate::shared::error::LicenceError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an input file (licence list or expression document)
///
/// The published SPDX `licenses.json` is well under 1 MB.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Validates that a path exists and is a regular file, not a symlink
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file for error messages
///
/// # Errors
/// Returns an error if the metadata cannot be read, the path is a symbolic
/// link, or the path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| LicenceError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(LicenceError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the path of the target file instead of the link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(LicenceError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(())
}

/// Validates that a file is no larger than [`MAX_FILE_SIZE`]
pub fn validate_file_size(path: &Path, size: u64) -> Result<()> {
    if size > MAX_FILE_SIZE {
        return Err(LicenceError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                size, MAX_FILE_SIZE
            ),
            hint: "Check that the path points to the intended file".to_string(),
        }
        .into());
    }
    Ok(())
}
