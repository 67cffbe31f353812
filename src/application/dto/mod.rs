/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results out to the
/// formatters, keeping the licence model free of presentation concerns.
mod classification_report;
mod classification_request;
mod output_format;

pub use classification_report::{
    ClassificationReport, ClassificationSummary, ExpressionReport, LeafClassification, LeafSource,
    LicenceKind,
};
pub use classification_request::ClassificationRequest;
pub use output_format::OutputFormat;
