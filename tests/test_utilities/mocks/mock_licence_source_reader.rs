use spdx_licences::prelude::*;
use std::path::Path;

/// Mock LicenceSourceReader for testing
pub struct MockLicenceSourceReader {
    pub licence_list: Option<String>,
    pub expressions: Option<String>,
}

impl MockLicenceSourceReader {
    pub fn new() -> Self {
        Self {
            licence_list: None,
            expressions: None,
        }
    }

    pub fn with_licence_list(mut self, content: &str) -> Self {
        self.licence_list = Some(content.to_string());
        self
    }

    pub fn with_expressions(mut self, content: &str) -> Self {
        self.expressions = Some(content.to_string());
        self
    }
}

impl Default for MockLicenceSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenceSourceReader for MockLicenceSourceReader {
    fn read_licence_list(&self, path: &Path) -> Result<LicenceListRelease> {
        match &self.licence_list {
            Some(content) => parse_spdx_licence_list(content, path),
            None => anyhow::bail!("Mock licence list not found: {}", path.display()),
        }
    }

    fn read_expressions(&self, path: &Path) -> Result<String> {
        match &self.expressions {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock expressions not found: {}", path.display()),
        }
    }
}
