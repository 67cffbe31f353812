//! spdx-licences - SPDX licence value model
//!
//! Models SPDX licence identifiers and expressions: simple licences,
//! Licence References, extracted licence text, and conjunctive/disjunctive
//! combinations nested to any depth. Every expression renders to a
//! canonical, fully parenthesized string and can be classified against the
//! SPDX Licence List.
//!
//! # Architecture
//!
//! - **Licence model** (`licence_model`): the value types and classification rules
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interfaces to the licence list, files, and output
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and utilities
//!
//! # Example
//!
//! ```
//! use spdx_licences::prelude::*;
//!
//! let inner = ConjunctiveLicenceSet::new(vec![
//!     Licence::new("Apache-2.0", None).into(),
//!     Licence::new("GPL-2.0", None).into(),
//! ]);
//! let expression = DisjunctiveLicenceSet::new(vec![
//!     Licence::new("MIT", Some(Meta::line(3))).into(),
//!     inner.into(),
//! ]);
//! assert_eq!(expression.licence_id(), "(MIT or (Apache-2.0 and GPL-2.0))");
//! assert_eq!(expression.meta(), Some(&Meta::line(3)));
//!
//! let list = InMemoryLicenceList::from_ids(["MIT", "Apache-2.0"]);
//! assert!(Licence::new("MIT", None).in_list(&list));
//! assert!(Licence::new("LicenseRef-foo", None).is_reference());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod licence_model;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::licence_list::{
        parse_spdx_licence_list, InMemoryLicenceList,
    };
    pub use crate::application::dto::{
        ClassificationReport, ClassificationRequest, LeafSource, LicenceKind, OutputFormat,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{
        ClassifyLicencesUseCase, LoadExpressionsUseCase, LoadLicenceListUseCase,
    };
    pub use crate::licence_model::domain::{
        AnyLicence, ConjunctiveLicenceSet, DisjunctiveLicenceSet, ExtractedLicence, Leaf, Licence,
        LicenceExpression, Meta, Value, ValueStr,
    };
    pub use crate::licence_model::policies::is_licence_ref;
    pub use crate::ports::outbound::{
        LicenceList, LicenceListRelease, LicenceListStore, LicenceSourceReader, OutputPresenter,
        ReportFormatter,
    };
    pub use crate::shared::error::{ExitCode, LicenceError};
    pub use crate::shared::Result;
}
