//! package.json parser
//!
//! Handles:
//! - author (string or person object)
//! - dependencies, in declaration order
//!
//! Strict mode additionally rejects versions that are not `v1.2.3`-shaped.

use crate::domain::Manifest;
use crate::error::ManifestError;
use std::path::Path;

/// Parser for package.json-style manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonParser {
    strict: bool,
}

impl PackageJsonParser {
    /// Creates a parser; `strict` enables version shape validation
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Parse manifest content read from `path`
    pub fn parse(&self, content: &str, path: &Path) -> Result<Manifest, ManifestError> {
        let mut manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;
        manifest.source = path.to_path_buf();

        if self.strict {
            if let Some((name, version)) = manifest
                .dependencies()
                .find(|(_, version)| !version.is_well_formed())
            {
                return Err(ManifestError::malformed_version_spec(
                    path,
                    name,
                    version.as_str(),
                ));
            }
        }

        Ok(manifest)
    }
}
