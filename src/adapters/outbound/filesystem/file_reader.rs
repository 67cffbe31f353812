use crate::adapters::outbound::licence_list::parse_spdx_licence_list;
use crate::ports::outbound::{LicenceListRelease, LicenceSourceReader};
use crate::shared::error::LicenceError;
use crate::shared::security::{validate_file_size, validate_regular_file};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading licence inputs from disk
///
/// Implements the LicenceSourceReader port for both the SPDX Licence List
/// and licence expression documents.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting symlinks, non-regular files and
    /// oversized files
    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        let size = fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| LicenceError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        validate_file_size(path, size)?;

        tracing::debug!(path = %path.display(), size, "reading {}", file_description);
        fs::read_to_string(path).map_err(|e| {
            LicenceError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenceSourceReader for FileSystemReader {
    fn read_licence_list(&self, path: &Path) -> Result<LicenceListRelease> {
        if !path.exists() {
            return Err(LicenceError::LicenceListNotFound {
                path: path.to_path_buf(),
                suggestion: "Download licenses.json from https://spdx.org/licenses/licenses.json \
                             and pass it with --licence-list, or set licence_list in the config file"
                    .to_string(),
            }
            .into());
        }
        let content = self.safe_read_file(path, "licence list")?;
        parse_spdx_licence_list(&content, path)
    }

    fn read_expressions(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path, "licence expression document")
    }
}
