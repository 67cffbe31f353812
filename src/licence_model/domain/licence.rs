use super::any_licence::LicenceExpression;
use super::value::{Meta, Value, ValueStr};
use crate::licence_model::policies::is_licence_ref;
use crate::ports::outbound::LicenceList;
use serde::{Deserialize, Serialize};

/// Licence value object wrapping a single licence identifier
///
/// The identifier is either expected to be on the SPDX Licence List
/// (e.g. `MIT`) or is a Licence Reference (`LicenseRef-...`). Nothing is
/// validated at construction; use [`Licence::is_reference`] and
/// [`Licence::in_list`] to classify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Licence {
    id: ValueStr,
}

impl Licence {
    pub fn new(id: impl Into<String>, meta: Option<Meta>) -> Self {
        Self {
            id: ValueStr::new(id, meta),
        }
    }

    pub fn id(&self) -> &ValueStr {
        &self.id
    }

    /// Returns whether the licence is a Licence Reference rather than an
    /// identifier that is supposed to be on the SPDX Licence List
    ///
    /// Does not check the list itself; use [`Licence::in_list`] for that.
    pub fn is_reference(&self) -> bool {
        is_licence_ref(self.id.v())
    }

    /// Checks whether the licence is on the SPDX Licence List
    ///
    /// Every call asks the list again, so the answer always reflects the
    /// list's current contents.
    pub fn in_list<L: LicenceList + ?Sized>(&self, list: &L) -> bool {
        list.is_known(self.id.v())
    }
}

impl LicenceExpression for Licence {
    fn licence_id(&self) -> String {
        self.id.v().to_string()
    }

    fn meta(&self) -> Option<&Meta> {
        self.id.m()
    }
}

impl std::fmt::Display for Licence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
