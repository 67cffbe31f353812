use crate::ports::outbound::OutputPresenter;
use crate::shared::error::LicenceError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(LicenceError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_not_symlink(&self) -> Result<()> {
        let Ok(metadata) = fs::symlink_metadata(&self.output_path) else {
            return Ok(());
        };
        if metadata.is_symlink() {
            return Err(LicenceError::SecurityError {
                path: self.output_path.clone(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Write to a regular file path instead".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_not_symlink()?;

        fs::write(&self.output_path, content).map_err(|e| LicenceError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        tracing::info!(path = %self.output_path.display(), "report written");
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
