use crate::licence_model::domain::AnyLicence;
use crate::ports::outbound::LicenceSourceReader;
use crate::shared::error::LicenceError;
use crate::shared::Result;
use std::path::Path;

/// LoadExpressionsUseCase - reads licence trees from a JSON document
///
/// The document holds either a single tree or an array of trees; each node
/// is tagged with `"type"` (`licence`, `extracted`, `conjunctive`,
/// `disjunctive`).
///
/// # Type Parameters
/// * `R` - LicenceSourceReader implementation
pub struct LoadExpressionsUseCase<R: LicenceSourceReader> {
    reader: R,
}

impl<R: LicenceSourceReader> LoadExpressionsUseCase<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn execute(&self, path: &Path) -> Result<Vec<AnyLicence>> {
        let content = self.reader.read_expressions(path)?;
        let expressions = parse_expressions(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            expressions = expressions.len(),
            "loaded licence expressions"
        );
        Ok(expressions)
    }
}

fn parse_expressions(content: &str, path: &Path) -> Result<Vec<AnyLicence>> {
    let parse_error = |e: serde_json::Error| LicenceError::ExpressionParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
    let expressions: Vec<AnyLicence> = if value.is_array() {
        serde_json::from_value(value).map_err(parse_error)?
    } else {
        vec![serde_json::from_value(value).map_err(parse_error)?]
    };
    Ok(expressions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::licence_model::domain::LicenceExpression;
    use crate::ports::outbound::LicenceListRelease;

    struct InlineReader(&'static str);

    impl LicenceSourceReader for InlineReader {
        fn read_licence_list(&self, _path: &Path) -> Result<LicenceListRelease> {
            anyhow::bail!("not used")
        }

        fn read_expressions(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_load_single_tree() {
        let use_case = LoadExpressionsUseCase::new(InlineReader(
            r#"{"type": "disjunctive", "members": [
                {"type": "licence", "id": "MIT"},
                {"type": "licence", "id": "Apache-2.0"}
            ]}"#,
        ));
        let expressions = use_case.execute(Path::new("tree.json")).unwrap();
        assert_eq!(expressions.len(), 1);
        assert_eq!(expressions[0].licence_id(), "(MIT or Apache-2.0)");
    }

    #[test]
    fn test_load_array_of_trees() {
        let use_case = LoadExpressionsUseCase::new(InlineReader(
            r#"[
                {"type": "licence", "id": "MIT"},
                {"type": "conjunctive", "members": []}
            ]"#,
        ));
        let expressions = use_case.execute(Path::new("trees.json")).unwrap();
        let ids: Vec<String> = expressions.iter().map(|e| e.licence_id()).collect();
        assert_eq!(ids, vec!["MIT", "()"]);
    }

    #[test]
    fn test_load_unknown_node_type() {
        let use_case =
            LoadExpressionsUseCase::new(InlineReader(r#"{"type": "exclusive", "members": []}"#));
        let err = format!("{}", use_case.execute(Path::new("bad.json")).unwrap_err());
        assert!(err.contains("Failed to parse licence expressions"));
        assert!(err.contains("bad.json"));
        assert!(err.contains("exclusive"));
    }

    #[test]
    fn test_load_invalid_json() {
        let use_case = LoadExpressionsUseCase::new(InlineReader("(MIT OR Apache-2.0)"));
        assert!(use_case.execute(Path::new("expr.txt")).is_err());
    }
}
