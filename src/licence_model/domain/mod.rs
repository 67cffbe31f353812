pub mod any_licence;
pub mod extracted_licence;
pub mod licence;
pub mod licence_set;
pub mod value;

pub use any_licence::{AnyLicence, Leaf, LicenceExpression};
pub use extracted_licence::ExtractedLicence;
pub use licence::Licence;
pub use licence_set::{ConjunctiveLicenceSet, DisjunctiveLicenceSet};
pub use value::{Meta, Value, ValueStr};
