use super::licence_list::LicenceListRelease;
use crate::shared::Result;
use std::path::Path;

/// LicenceSourceReader port for reading licence inputs
///
/// This port abstracts where the SPDX Licence List and licence expression
/// documents come from, so the application layer can be tested without
/// touching the file system.
pub trait LicenceSourceReader {
    /// Reads and decodes the SPDX Licence List (`licenses.json`)
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, rejected by
    /// security checks, or not a licence list
    fn read_licence_list(&self, path: &Path) -> Result<LicenceListRelease>;

    /// Reads a licence expression document (JSON licence trees)
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or rejected by
    /// security checks
    fn read_expressions(&self, path: &Path) -> Result<String>;
}

impl<R: LicenceSourceReader + ?Sized> LicenceSourceReader for &R {
    fn read_licence_list(&self, path: &Path) -> Result<LicenceListRelease> {
        (**self).read_licence_list(path)
    }

    fn read_expressions(&self, path: &Path) -> Result<String> {
        (**self).read_expressions(path)
    }
}
