//! Manifest loading
//!
//! This module provides functionality to:
//! - Read a manifest file from disk
//! - Parse it into a [`Manifest`] with typed errors
//! - Load an ordered list of manifests, stopping at the first failure

mod package_json;

pub use package_json::PackageJsonParser;

use crate::domain::Manifest;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Loads manifests from disk with a fixed parser configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader {
    parser: PackageJsonParser,
}

impl ManifestLoader {
    /// Creates a loader; `strict` rejects malformed version specs
    pub fn new(strict: bool) -> Self {
        Self {
            parser: PackageJsonParser::new(strict),
        }
    }

    /// Read and parse a single manifest
    pub fn load(&self, path: &Path) -> Result<Manifest, ManifestError> {
        tracing::debug!("reading manifest {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::from_io(path, e))?;
        self.parser.parse(&content, path)
    }

    /// Read and parse every manifest in order
    pub fn load_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Manifest>, ManifestError> {
        paths.iter().map(|path| self.load(path.as_ref())).collect()
    }
}

/// Parse a manifest file path with the default (lenient) parser
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    ManifestLoader::default().load(path)
}

/// Parse several manifest file paths in order with the default parser
pub fn load_manifests(paths: &[PathBuf]) -> Result<Vec<Manifest>, ManifestError> {
    ManifestLoader::default().load_all(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_manifest() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "package-1.json",
            r#"{ "author": "alice", "dependencies": { "lodash": "v4.1.0" } }"#,
        );

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.source, path);
        assert_eq!(manifest.author_name(), Some("alice"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_manifest(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_manifest(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ManifestError::ReadError { .. } | ManifestError::NotFound { .. }
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ \"dependencies\": ");
        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::JsonParseError { .. }));
    }

    #[test]
    fn test_load_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.json", r#"{ "author": "alice" }"#);
        let second = write(&dir, "b.json", r#"{ "author": "bob" }"#);

        let manifests = load_manifests(&[second.clone(), first.clone()]).unwrap();
        let authors: Vec<_> = manifests.iter().map(|m| m.author_name()).collect();
        assert_eq!(authors, vec![Some("bob"), Some("alice")]);
    }

    #[test]
    fn test_load_all_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.json", "{}");
        let missing = dir.path().join("missing.json");

        let err = load_manifests(&[good, missing.clone()]).unwrap_err();
        match err {
            ManifestError::NotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_loader() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "ranged.json", r#"{ "dependencies": { "a": "~1.0.0" } }"#);

        assert!(ManifestLoader::default().load(&path).is_ok());
        let err = ManifestLoader::new(true).load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::MalformedVersionSpec { .. }));
    }
}
