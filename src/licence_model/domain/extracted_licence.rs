use super::any_licence::LicenceExpression;
use super::value::{Meta, Value, ValueStr};
use crate::licence_model::policies::is_licence_ref;
use crate::ports::outbound::LicenceList;
use serde::{Deserialize, Serialize};

/// ExtractedLicence - licence text found in a document that is not on the
/// SPDX Licence List, recorded under its own identifier
///
/// A name is expected when the identifier is not on the list, but that rule
/// belongs to document validation; any combination of fields is representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedLicence {
    id: ValueStr,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    names: Vec<ValueStr>,
    text: ValueStr,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cross_references: Vec<ValueStr>,
    #[serde(default, skip_serializing_if = "ValueStr::is_empty")]
    comment: ValueStr,
}

impl ExtractedLicence {
    pub fn new(id: ValueStr, text: ValueStr) -> Self {
        Self {
            id,
            names: Vec::new(),
            text,
            cross_references: Vec::new(),
            comment: ValueStr::default(),
        }
    }

    pub fn with_name(mut self, name: ValueStr) -> Self {
        self.names.push(name);
        self
    }

    pub fn with_cross_reference(mut self, url: ValueStr) -> Self {
        self.cross_references.push(url);
        self
    }

    pub fn with_comment(mut self, comment: ValueStr) -> Self {
        self.comment = comment;
        self
    }

    pub fn id(&self) -> &ValueStr {
        &self.id
    }

    pub fn names(&self) -> &[ValueStr] {
        &self.names
    }

    pub fn text(&self) -> &ValueStr {
        &self.text
    }

    pub fn cross_references(&self) -> &[ValueStr] {
        &self.cross_references
    }

    /// The comment, or `None` when the document supplied none
    pub fn comment(&self) -> Option<&ValueStr> {
        (!self.comment.is_empty()).then_some(&self.comment)
    }

    /// Returns whether the identifier is a Licence Reference
    pub fn is_reference(&self) -> bool {
        is_licence_ref(self.id.v())
    }

    /// Asks the list about the identifier; not cached
    pub fn in_list<L: LicenceList + ?Sized>(&self, list: &L) -> bool {
        list.is_known(self.id.v())
    }
}

impl LicenceExpression for ExtractedLicence {
    fn licence_id(&self) -> String {
        self.id.v().to_string()
    }

    fn meta(&self) -> Option<&Meta> {
        self.id.m()
    }
}

impl std::fmt::Display for ExtractedLicence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
