use crate::application::dto::{
    ClassificationReport, ClassificationRequest, ExpressionReport, LeafClassification, LeafSource,
    LicenceKind,
};
use crate::licence_model::domain::{AnyLicence, Leaf, LicenceExpression};
use crate::ports::outbound::LicenceList;

/// ClassifyLicencesUseCase - classifies every leaf of licence trees
///
/// Each leaf is a Licence Reference, an identifier on the SPDX Licence
/// List, or unknown. The list is consulted for every leaf; nothing is
/// cached between leaves or between calls.
///
/// # Type Parameters
/// * `L` - LicenceList implementation
pub struct ClassifyLicencesUseCase<L: LicenceList> {
    licence_list: L,
}

impl<L: LicenceList> ClassifyLicencesUseCase<L> {
    pub fn new(licence_list: L) -> Self {
        Self { licence_list }
    }

    pub fn execute(&self, request: ClassificationRequest) -> ClassificationReport {
        let expressions: Vec<ExpressionReport> = request
            .expressions
            .iter()
            .map(|expression| self.classify_expression(expression))
            .collect();

        let report = ClassificationReport::new(expressions);
        tracing::info!(
            expressions = report.summary.expressions,
            leaves = report.summary.leaves,
            unknown = report.summary.unknown,
            "classified licence expressions"
        );
        report
    }

    fn classify_expression(&self, expression: &AnyLicence) -> ExpressionReport {
        let leaves = expression
            .leaves()
            .into_iter()
            .map(|leaf| self.classify_leaf(leaf))
            .collect();

        ExpressionReport {
            expression: expression.licence_id(),
            leaves,
        }
    }

    /// References win over the list: `LicenseRef-` identifiers are never
    /// looked up
    fn classify_leaf(&self, leaf: Leaf<'_>) -> LeafClassification {
        let kind = if leaf.is_reference() {
            LicenceKind::Reference
        } else if leaf.in_list(&self.licence_list) {
            LicenceKind::Listed
        } else {
            LicenceKind::Unknown
        };
        let source = match leaf {
            Leaf::Licence(_) => LeafSource::Licence,
            Leaf::Extracted(_) => LeafSource::Extracted,
        };

        let id = leaf.licence_id();
        tracing::debug!(id = %id, kind = %kind, "classified licence");

        LeafClassification {
            line: leaf.meta().map(|m| m.line_start()),
            id,
            kind,
            source,
        }
    }
}
