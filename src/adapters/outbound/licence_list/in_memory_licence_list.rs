use crate::ports::outbound::{LicenceList, LicenceListRelease, LicenceListStore};
use dashmap::DashSet;
use std::sync::{PoisonError, RwLock};

/// Identifiers and version of the release currently served
#[derive(Debug, Default)]
struct IndexedRelease {
    ids: DashSet<String>,
    version: Option<String>,
}

impl IndexedRelease {
    fn build(release: LicenceListRelease) -> Self {
        let ids = DashSet::with_capacity(release.licence_ids.len());
        for id in &release.licence_ids {
            ids.insert(normalize(id));
        }
        Self {
            ids,
            version: release.version,
        }
    }
}

/// InMemoryLicenceList adapter holding SPDX licence identifiers
///
/// Identifiers are matched case-insensitively, as SPDX identifiers are.
/// Single identifiers are added or removed in place while other threads
/// query the list. A whole new release is indexed off to the side and
/// swapped in under the write lock, so a lookup sees either the old release
/// or the new one with its matching version.
#[derive(Debug, Default)]
pub struct InMemoryLicenceList {
    current: RwLock<IndexedRelease>,
}

impl InMemoryLicenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_release(LicenceListRelease::new(
            None,
            ids.into_iter().map(|id| id.as_ref().to_string()),
        ))
    }

    pub fn from_release(release: LicenceListRelease) -> Self {
        Self {
            current: RwLock::new(IndexedRelease::build(release)),
        }
    }

    /// Removes an identifier; returns `false` if it was not present
    pub fn remove(&self, id: &str) -> bool {
        self.with_current(|release| release.ids.remove(&normalize(id)).is_some())
    }

    /// Runs `f` against the current release, holding it for the whole call
    ///
    /// A poisoned lock still holds a complete release, since releases are
    /// only ever replaced whole.
    fn with_current<T>(&self, f: impl FnOnce(&IndexedRelease) -> T) -> T {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}

impl LicenceList for InMemoryLicenceList {
    fn is_known(&self, id: &str) -> bool {
        self.with_current(|release| release.ids.contains(&normalize(id)))
    }
}

impl LicenceListStore for InMemoryLicenceList {
    fn replace_all(&self, release: LicenceListRelease) {
        let indexed = IndexedRelease::build(release);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = indexed;
    }

    fn insert(&self, id: &str) -> bool {
        self.with_current(|release| release.ids.insert(normalize(id)))
    }

    fn version(&self) -> Option<String> {
        self.with_current(|release| release.version.clone())
    }

    fn len(&self) -> usize {
        self.with_current(|release| release.ids.len())
    }
}

fn normalize(id: &str) -> String {
    id.to_ascii_lowercase()
}
