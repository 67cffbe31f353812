use super::extracted_licence::ExtractedLicence;
use super::licence::Licence;
use super::licence_set::{ConjunctiveLicenceSet, DisjunctiveLicenceSet};
use super::value::{Meta, ValueStr};
use crate::ports::outbound::LicenceList;
use serde::{Deserialize, Serialize};

/// LicenceExpression - capability shared by every licence variant
pub trait LicenceExpression {
    /// Canonical identifier of the expression
    ///
    /// Leaves return their identifier unchanged; sets return the fully
    /// parenthesized rendering of their members.
    fn licence_id(&self) -> String;

    /// Provenance of the expression
    ///
    /// Leaves return the metadata of their identifier; sets return that of
    /// their first present member.
    fn meta(&self) -> Option<&Meta>;
}

/// AnyLicence - a node of a licence expression tree
///
/// Leaves are [`Licence`] and [`ExtractedLicence`]; inner nodes are the
/// two set kinds, which own their members.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyLicence {
    Licence(Licence),
    Extracted(ExtractedLicence),
    Conjunctive(ConjunctiveLicenceSet),
    Disjunctive(DisjunctiveLicenceSet),
}

impl AnyLicence {
    pub fn is_leaf(&self) -> bool {
        matches!(self, AnyLicence::Licence(_) | AnyLicence::Extracted(_))
    }

    /// Collects the leaves of the tree, depth-first and left to right
    ///
    /// Absent set members are skipped.
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<Leaf<'a>>) {
        match self {
            AnyLicence::Licence(l) => leaves.push(Leaf::Licence(l)),
            AnyLicence::Extracted(l) => leaves.push(Leaf::Extracted(l)),
            AnyLicence::Conjunctive(set) => set.iter().for_each(|m| m.collect_leaves(leaves)),
            AnyLicence::Disjunctive(set) => set.iter().for_each(|m| m.collect_leaves(leaves)),
        }
    }
}

/// Leaf - a borrowed leaf of a licence tree
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
    Licence(&'a Licence),
    Extracted(&'a ExtractedLicence),
}

impl<'a> Leaf<'a> {
    pub fn id(&self) -> &'a ValueStr {
        match *self {
            Leaf::Licence(l) => l.id(),
            Leaf::Extracted(l) => l.id(),
        }
    }

    pub fn is_reference(&self) -> bool {
        match self {
            Leaf::Licence(l) => l.is_reference(),
            Leaf::Extracted(l) => l.is_reference(),
        }
    }

    pub fn in_list<L: LicenceList + ?Sized>(&self, list: &L) -> bool {
        match self {
            Leaf::Licence(l) => l.in_list(list),
            Leaf::Extracted(l) => l.in_list(list),
        }
    }
}

impl LicenceExpression for Leaf<'_> {
    fn licence_id(&self) -> String {
        match self {
            Leaf::Licence(l) => l.licence_id(),
            Leaf::Extracted(l) => l.licence_id(),
        }
    }

    fn meta(&self) -> Option<&Meta> {
        match self {
            Leaf::Licence(l) => l.meta(),
            Leaf::Extracted(l) => l.meta(),
        }
    }
}

impl LicenceExpression for AnyLicence {
    fn licence_id(&self) -> String {
        match self {
            AnyLicence::Licence(l) => l.licence_id(),
            AnyLicence::Extracted(l) => l.licence_id(),
            AnyLicence::Conjunctive(s) => s.licence_id(),
            AnyLicence::Disjunctive(s) => s.licence_id(),
        }
    }

    fn meta(&self) -> Option<&Meta> {
        match self {
            AnyLicence::Licence(l) => l.meta(),
            AnyLicence::Extracted(l) => l.meta(),
            AnyLicence::Conjunctive(s) => s.meta(),
            AnyLicence::Disjunctive(s) => s.meta(),
        }
    }
}

impl std::fmt::Display for AnyLicence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.licence_id())
    }
}

impl From<Licence> for AnyLicence {
    fn from(licence: Licence) -> Self {
        AnyLicence::Licence(licence)
    }
}

impl From<ExtractedLicence> for AnyLicence {
    fn from(licence: ExtractedLicence) -> Self {
        AnyLicence::Extracted(licence)
    }
}

impl From<ConjunctiveLicenceSet> for AnyLicence {
    fn from(set: ConjunctiveLicenceSet) -> Self {
        AnyLicence::Conjunctive(set)
    }
}

impl From<DisjunctiveLicenceSet> for AnyLicence {
    fn from(set: DisjunctiveLicenceSet) -> Self {
        AnyLicence::Disjunctive(set)
    }
}
