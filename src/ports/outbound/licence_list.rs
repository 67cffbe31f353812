/// LicenceList port for checking identifiers against the SPDX Licence List
///
/// Implementations answer from whatever index they maintain. Callers
/// ask again on every check, so an implementation that updates its index
/// is observed immediately.
///
/// Implementations must be `Send + Sync`; lookups may run concurrently.
pub trait LicenceList: Send + Sync {
    /// Returns whether `id` is a known SPDX licence identifier
    ///
    /// # Arguments
    /// * `id` - Licence identifier, e.g. `MIT` or `GPL-2.0-or-later`
    fn is_known(&self, id: &str) -> bool;
}

/// LicenceListStore port for licence lists that can be updated in place
///
/// Updates must be safe while other threads call [`LicenceList::is_known`].
pub trait LicenceListStore: LicenceList {
    /// Replaces every identifier and the version with those of `release`
    ///
    /// Readers see either the previous release or the new one, never a
    /// mixture of the two.
    fn replace_all(&self, release: LicenceListRelease);

    /// Adds an identifier to the current release; returns `false` if it was
    /// already present
    fn insert(&self, id: &str) -> bool;

    /// Release of the SPDX Licence List currently held, if known
    fn version(&self) -> Option<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One published release of the SPDX Licence List
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenceListRelease {
    /// `licenseListVersion`, e.g. `3.25`
    pub version: Option<String>,
    /// Every `licenseId` of the release, deprecated ones included
    pub licence_ids: Vec<String>,
}

impl LicenceListRelease {
    pub fn new<I, S>(version: Option<String>, licence_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version,
            licence_ids: licence_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl<L: LicenceList + ?Sized> LicenceList for std::sync::Arc<L> {
    fn is_known(&self, id: &str) -> bool {
        (**self).is_known(id)
    }
}

impl<L: LicenceList + ?Sized> LicenceList for &L {
    fn is_known(&self, id: &str) -> bool {
        (**self).is_known(id)
    }
}

impl<S: LicenceListStore + ?Sized> LicenceListStore for std::sync::Arc<S> {
    fn replace_all(&self, release: LicenceListRelease) {
        (**self).replace_all(release)
    }

    fn insert(&self, id: &str) -> bool {
        (**self).insert(id)
    }

    fn version(&self) -> Option<String> {
        (**self).version()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: LicenceListStore + ?Sized> LicenceListStore for &S {
    fn replace_all(&self, release: LicenceListRelease) {
        (**self).replace_all(release)
    }

    fn insert(&self, id: &str) -> bool {
        (**self).insert(id)
    }

    fn version(&self) -> Option<String> {
        (**self).version()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
