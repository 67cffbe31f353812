use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Maps the application-level output format to a formatter adapter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the given format
    ///
    /// # Arguments
    /// * `format` - The output format
    /// * `licence_list_version` - SPDX Licence List release, recorded by
    ///   formats that carry metadata
    ///
    /// # Examples
    /// ```
    /// use spdx_licences::application::dto::OutputFormat;
    /// use spdx_licences::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, None);
    /// ```
    pub fn create(
        format: OutputFormat,
        licence_list_version: Option<String>,
    ) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => {
                Box::new(JsonFormatter::with_licence_list_version(licence_list_version))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}
