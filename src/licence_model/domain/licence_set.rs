use super::any_licence::{AnyLicence, LicenceExpression};
use super::value::Meta;
use serde::{Deserialize, Serialize};

const AND_SEPARATOR: &str = " and ";
const OR_SEPARATOR: &str = " or ";

/// ConjunctiveLicenceSet - licences that all apply ("A and B")
///
/// Members keep their order for rendering. A member may be absent (`None`)
/// when the document it came from was only partially readable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConjunctiveLicenceSet {
    members: Vec<Option<AnyLicence>>,
}

/// DisjunctiveLicenceSet - licences to choose from ("A or B")
///
/// Same shape as [`ConjunctiveLicenceSet`], rendered with `or`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisjunctiveLicenceSet {
    members: Vec<Option<AnyLicence>>,
}

impl ConjunctiveLicenceSet {
    pub fn new(members: Vec<AnyLicence>) -> Self {
        Self::from_sparse(members.into_iter().map(Some).collect())
    }

    /// Creates a set that may contain absent members
    pub fn from_sparse(members: Vec<Option<AnyLicence>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Option<AnyLicence>] {
        &self.members
    }

    /// Iterates over the members that are present
    pub fn iter(&self) -> impl Iterator<Item = &AnyLicence> {
        self.members.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl DisjunctiveLicenceSet {
    pub fn new(members: Vec<AnyLicence>) -> Self {
        Self::from_sparse(members.into_iter().map(Some).collect())
    }

    /// Creates a set that may contain absent members
    pub fn from_sparse(members: Vec<Option<AnyLicence>>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Option<AnyLicence>] {
        &self.members
    }

    /// Iterates over the members that are present
    pub fn iter(&self) -> impl Iterator<Item = &AnyLicence> {
        self.members.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl LicenceExpression for ConjunctiveLicenceSet {
    fn licence_id(&self) -> String {
        join(&self.members, AND_SEPARATOR)
    }

    fn meta(&self) -> Option<&Meta> {
        first_meta(&self.members)
    }
}

impl LicenceExpression for DisjunctiveLicenceSet {
    fn licence_id(&self) -> String {
        join(&self.members, OR_SEPARATOR)
    }

    fn meta(&self) -> Option<&Meta> {
        first_meta(&self.members)
    }
}

impl FromIterator<AnyLicence> for ConjunctiveLicenceSet {
    fn from_iter<I: IntoIterator<Item = AnyLicence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<AnyLicence> for DisjunctiveLicenceSet {
    fn from_iter<I: IntoIterator<Item = AnyLicence>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ConjunctiveLicenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.licence_id())
    }
}

impl std::fmt::Display for DisjunctiveLicenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.licence_id())
    }
}

/// Joins the identifiers of the present members with `separator`, wrapped
/// in parentheses. Absent members are skipped; no members yields `()`.
fn join(members: &[Option<AnyLicence>], separator: &str) -> String {
    let ids: Vec<String> = members.iter().flatten().map(|m| m.licence_id()).collect();
    format!("({})", ids.join(separator))
}

/// Metadata of the first present member
fn first_meta(members: &[Option<AnyLicence>]) -> Option<&Meta> {
    members.iter().flatten().next().and_then(|m| m.meta())
}
