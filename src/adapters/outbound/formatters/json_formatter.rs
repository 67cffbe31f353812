use crate::application::dto::{ClassificationReport, ClassificationSummary, ExpressionReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    tool: Tool,
    #[serde(skip_serializing_if = "Option::is_none")]
    licence_list_version: Option<&'a str>,
    summary: &'a ClassificationSummary,
    expressions: &'a [ExpressionReport],
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

/// JsonFormatter adapter producing a pretty-printed JSON report
pub struct JsonFormatter {
    licence_list_version: Option<String>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            licence_list_version: None,
        }
    }

    /// Records which SPDX Licence List release the report was checked against
    pub fn with_licence_list_version(licence_list_version: Option<String>) -> Self {
        Self {
            licence_list_version,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ClassificationReport) -> Result<String> {
        let json = JsonReport {
            tool: Tool {
                name: TOOL_NAME,
                version: TOOL_VERSION,
            },
            licence_list_version: self.licence_list_version.as_deref(),
            summary: &report.summary,
            expressions: &report.expressions,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}
