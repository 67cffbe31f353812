use crate::ports::outbound::LicenceListRelease;
use crate::shared::error::LicenceError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// The published SPDX Licence List (`licenses.json`)
///
/// Only the fields needed for identifier lookup are decoded; the rest of
/// each entry is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxLicenceListDocument {
    #[serde(default)]
    license_list_version: Option<String>,
    licenses: Vec<SpdxLicenceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpdxLicenceEntry {
    license_id: String,
    #[serde(default)]
    is_deprecated_license_id: bool,
}

/// Parses `licenses.json` content into a [`LicenceListRelease`]
///
/// Deprecated identifiers are kept: older documents still use them.
///
/// # Arguments
/// * `content` - JSON content of the licence list
/// * `path` - Where the content came from, for error messages
pub fn parse_spdx_licence_list(content: &str, path: &Path) -> Result<LicenceListRelease> {
    let document: SpdxLicenceListDocument =
        serde_json::from_str(content).map_err(|e| LicenceError::LicenceListParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let deprecated = document
        .licenses
        .iter()
        .filter(|l| l.is_deprecated_license_id)
        .count();
    tracing::debug!(
        version = ?document.license_list_version,
        licences = document.licenses.len(),
        deprecated,
        "parsed SPDX Licence List"
    );

    Ok(LicenceListRelease::new(
        document.license_list_version,
        document.licenses.into_iter().map(|l| l.license_id),
    ))
}
