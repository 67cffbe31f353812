use serde::Serialize;

/// How a licence identifier relates to the SPDX Licence List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenceKind {
    /// A Licence Reference (`LicenseRef-...`) to text supplied by the document
    Reference,
    /// An identifier on the SPDX Licence List
    Listed,
    /// Neither a reference nor on the list
    Unknown,
}

impl std::fmt::Display for LicenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenceKind::Reference => write!(f, "reference"),
            LicenceKind::Listed => write!(f, "listed"),
            LicenceKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Which leaf variant a classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafSource {
    Licence,
    Extracted,
}

/// Classification of a single leaf of a licence tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafClassification {
    pub id: String,
    pub kind: LicenceKind,
    pub source: LeafSource,
    /// First line of the identifier in its source document, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Classification of one licence expression tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionReport {
    /// Canonical rendering of the tree
    pub expression: String,
    /// Leaves in depth-first, left-to-right order
    pub leaves: Vec<LeafClassification>,
}

impl ExpressionReport {
    pub fn has_unknown(&self) -> bool {
        self.leaves.iter().any(|l| l.kind == LicenceKind::Unknown)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub expressions: usize,
    pub leaves: usize,
    pub references: usize,
    pub listed: usize,
    pub unknown: usize,
}

/// ClassificationReport - result of the classification use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationReport {
    pub expressions: Vec<ExpressionReport>,
    pub summary: ClassificationSummary,
}

impl ClassificationReport {
    /// Builds a report, deriving the summary from the expression reports
    pub fn new(expressions: Vec<ExpressionReport>) -> Self {
        let mut summary = ClassificationSummary {
            expressions: expressions.len(),
            ..Default::default()
        };
        for leaf in expressions.iter().flat_map(|e| &e.leaves) {
            summary.leaves += 1;
            match leaf.kind {
                LicenceKind::Reference => summary.references += 1,
                LicenceKind::Listed => summary.listed += 1,
                LicenceKind::Unknown => summary.unknown += 1,
            }
        }
        Self {
            expressions,
            summary,
        }
    }

    pub fn has_unknown(&self) -> bool {
        self.summary.unknown > 0
    }

    /// Identifiers classified as unknown, in report order, without duplicates
    pub fn unknown_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for leaf in self.expressions.iter().flat_map(|e| &e.leaves) {
            if leaf.kind == LicenceKind::Unknown && !ids.contains(&leaf.id.as_str()) {
                ids.push(&leaf.id);
            }
        }
        ids
    }
}
