use crate::application::dto::ClassificationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering classification reports
pub trait ReportFormatter {
    /// Formats the report as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ClassificationReport) -> Result<String>;
}
