//! Configuration file support for spdx-licences.
//!
//! Provides YAML-based configuration through `spdx-licences.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::LicenceError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "spdx-licences.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to the SPDX `licenses.json`; relative paths are resolved
    /// against the directory holding the config file.
    pub licence_list: Option<PathBuf>,
    /// Identifiers treated as listed in addition to the SPDX Licence List.
    pub additional_licences: Option<Vec<String>>,
    pub format: Option<String>,
    pub strict: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, already validated on load.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(licence_list) = config.licence_list.take() {
        config.licence_list = Some(resolve_relative_to(path, licence_list));
    }

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn resolve_relative_to(config_path: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_path.parent() {
        Some(dir) if dir != Path::new("") => dir.join(target),
        _ => target,
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref additional) = config.additional_licences {
        for (i, id) in additional.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(LicenceError::Validation {
                    message: format!(
                        "additional_licences[{}] must not be empty.\n\n\
                         💡 Hint: Each entry must be a licence identifier (e.g., \"Internal-1.0\").",
                        i
                    ),
                }
                .into());
            }
        }
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format)
            .map_err(|message| LicenceError::Validation { message })?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
licence_list: data/licenses.json
additional_licences:
  - Internal-1.0
  - Vendor-EULA
format: markdown
strict: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.licence_list,
            Some(dir.path().join("data/licenses.json"))
        );
        assert_eq!(
            config.additional_licences.as_deref(),
            Some(&["Internal-1.0".to_string(), "Vendor-EULA".to_string()][..])
        );
        assert_eq!(config.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(config.strict, Some(true));
    }

    #[test]
    fn test_absolute_licence_list_path_kept() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "licence_list: /opt/spdx/licenses.json\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.licence_list,
            Some(PathBuf::from("/opt/spdx/licenses.json"))
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_additional_licence_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "additional_licences:\n  - \"  \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("additional_licences[0] must not be empty"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: spdx\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid format: spdx"));
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: json\ncheck_cve: true\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("check_cve"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.licence_list.is_none());
        assert!(config.additional_licences.is_none());
        assert!(config.output_format().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
