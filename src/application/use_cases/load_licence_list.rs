use crate::ports::outbound::{LicenceListStore, LicenceSourceReader};
use crate::shared::Result;
use std::path::Path;

/// LoadLicenceListUseCase - fills the licence list used for classification
///
/// Combines the published SPDX Licence List (when a path is given) with
/// identifiers the caller wants treated as listed.
///
/// # Type Parameters
/// * `R` - LicenceSourceReader implementation
/// * `S` - LicenceListStore implementation receiving the identifiers
pub struct LoadLicenceListUseCase<R: LicenceSourceReader, S: LicenceListStore> {
    reader: R,
    store: S,
}

impl<R: LicenceSourceReader, S: LicenceListStore> LoadLicenceListUseCase<R, S> {
    pub fn new(reader: R, store: S) -> Self {
        Self { reader, store }
    }

    /// Loads the list into the store
    ///
    /// # Arguments
    /// * `path` - Location of `licenses.json`; without one the store keeps
    ///   its current release
    /// * `additional_licences` - Identifiers added on top of the list
    pub fn execute(&self, path: Option<&Path>, additional_licences: &[String]) -> Result<()> {
        match path {
            Some(path) => self.store.replace_all(self.reader.read_licence_list(path)?),
            None => tracing::warn!(
                "no SPDX Licence List configured; only additional licences count as listed"
            ),
        }

        for id in additional_licences {
            self.store.insert(id);
        }

        let version = self.store.version();
        tracing::info!(
            licences = self.store.len(),
            version = version.as_deref().unwrap_or("none"),
            "licence list ready"
        );
        Ok(())
    }
}
