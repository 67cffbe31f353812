use crate::application::dto::{ClassificationReport, ExpressionReport, LeafSource, LicenceKind};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for leaf classifications
const TABLE_HEADER: &str = "| Licence | Kind | Source | Line |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|------|--------|------|\n";

/// MarkdownFormatter adapter for a human-readable classification report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn kind_label(kind: LicenceKind) -> &'static str {
        match kind {
            LicenceKind::Reference => "Licence Reference",
            LicenceKind::Listed => "SPDX Licence List",
            LicenceKind::Unknown => "⚠️ Unknown",
        }
    }

    fn render_summary(&self, output: &mut String, report: &ClassificationReport) {
        let summary = &report.summary;
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Expressions: {}\n", summary.expressions));
        output.push_str(&format!("- Licences: {}\n", summary.leaves));
        output.push_str(&format!("- On the SPDX Licence List: {}\n", summary.listed));
        output.push_str(&format!("- Licence References: {}\n", summary.references));
        output.push_str(&format!("- Unknown: {}\n\n", summary.unknown));
    }

    fn render_expression(&self, output: &mut String, index: usize, expression: &ExpressionReport) {
        output.push_str(&format!(
            "### {}. `{}`\n\n",
            index + 1,
            expression.expression.replace('`', "'")
        ));

        if expression.leaves.is_empty() {
            output.push_str("*No licences in this expression.*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for leaf in &expression.leaves {
            let source = match leaf.source {
                LeafSource::Licence => "licence",
                LeafSource::Extracted => "extracted",
            };
            let line = leaf.line.map(|l| l.to_string()).unwrap_or_default();
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&leaf.id),
                Self::kind_label(leaf.kind),
                source,
                line
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ClassificationReport) -> Result<String> {
        let mut output = String::from("# Licence Classification Report\n\n");
        self.render_summary(&mut output, report);

        output.push_str("## Expressions\n\n");
        for (index, expression) in report.expressions.iter().enumerate() {
            self.render_expression(&mut output, index, expression);
        }

        let unknown = report.unknown_ids();
        if !unknown.is_empty() {
            output.push_str("## Unknown Licences\n\n");
            output.push_str(
                "These identifiers are neither Licence References nor on the SPDX Licence List.\n\n",
            );
            for id in unknown {
                output.push_str(&format!("- `{}`\n", id.replace('`', "'")));
            }
            output.push('\n');
        }

        Ok(output)
    }
}
