//! CSV report writer
//!
//! Rows are `", "`-joined and `\n`-terminated. Fields are written as-is:
//! package names come from manifest keys and are assumed comma-free.

use crate::domain::{DependencyRecord, MergedSet};
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const FIELD_SEPARATOR: &str = ", ";

/// Column layout of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// `author, package name, version`
    #[default]
    Author,
    /// `package_name, version`
    Plain,
}

impl ReportMode {
    /// Header line without the trailing newline
    pub fn header(&self) -> &'static str {
        match self {
            ReportMode::Author => "author, package name, version",
            ReportMode::Plain => "package_name, version",
        }
    }

    /// One data row without the trailing newline
    pub fn row(&self, record: &DependencyRecord) -> String {
        match self {
            ReportMode::Author => [
                record.author_or_empty(),
                record.name.as_str(),
                record.version.as_str(),
            ]
            .join(FIELD_SEPARATOR),
            ReportMode::Plain => {
                [record.name.as_str(), record.version.as_str()].join(FIELD_SEPARATOR)
            }
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Author => write!(f, "author"),
            ReportMode::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "author" => Ok(ReportMode::Author),
            "plain" => Ok(ReportMode::Plain),
            other => Err(format!(
                "invalid report mode '{}': expected 'author' or 'plain'",
                other
            )),
        }
    }
}

/// Writes a [`MergedSet`] as CSV
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReporter {
    mode: ReportMode,
}

impl CsvReporter {
    /// Create a reporter for the given column layout
    pub fn new(mode: ReportMode) -> Self {
        Self { mode }
    }

    /// Write the header and one row per record
    pub fn write(&self, merged: &MergedSet, writer: &mut dyn Write) -> std::io::Result<()> {
        writer.write_all(self.render(merged).as_bytes())
    }

    /// Render the whole report into a string
    pub fn render(&self, merged: &MergedSet) -> String {
        let mut out = String::new();
        out.push_str(self.mode.header());
        out.push('\n');
        for record in merged {
            out.push_str(&self.mode.row(record));
            out.push('\n');
        }
        out
    }
}

/// Create or truncate `path` and write the report; returns the number of rows
pub fn write_report(
    path: &Path,
    merged: &MergedSet,
    mode: ReportMode,
) -> Result<usize, ReportError> {
    tracing::debug!("writing {} rows to {}", merged.len(), path.display());

    let file = File::create(path).map_err(|e| ReportError::write_error(path, e))?;
    let mut writer = BufWriter::new(file);
    CsvReporter::new(mode)
        .write(merged, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| ReportError::write_error(path, e))?;

    Ok(merged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Manifest;
    use crate::merge::merge;
    use tempfile::TempDir;

    fn sample_set() -> MergedSet {
        let manifests = [
            Manifest::new("1.json")
                .with_author("bob")
                .with_dependency("lodash", "v4.2.0")
                .with_dependency("react", "v18.0.0"),
            Manifest::new("2.json").with_dependency("zod", "v3.22.4"),
        ];
        merge(&manifests).merged
    }

    #[test]
    fn test_headers() {
        assert_eq!(ReportMode::Author.header(), "author, package name, version");
        assert_eq!(ReportMode::Plain.header(), "package_name, version");
    }

    #[test]
    fn test_render_author_mode() {
        let rendered = CsvReporter::new(ReportMode::Author).render(&sample_set());
        assert_eq!(
            rendered,
            "author, package name, version\n\
             bob, lodash, v4.2.0\n\
             bob, react, v18.0.0\n\
             , zod, v3.22.4\n"
        );
    }

    #[test]
    fn test_render_plain_mode() {
        let rendered = CsvReporter::new(ReportMode::Plain).render(&sample_set());
        assert_eq!(
            rendered,
            "package_name, version\n\
             lodash, v4.2.0\n\
             react, v18.0.0\n\
             zod, v3.22.4\n"
        );
    }

    #[test]
    fn test_write_matches_render() {
        let reporter = CsvReporter::new(ReportMode::Author);
        let mut buf = Vec::new();
        reporter.write(&sample_set(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), reporter.render(&sample_set()));
    }

    #[test]
    fn test_render_empty_set_has_header_only() {
        let rendered = CsvReporter::default().render(&MergedSet::new());
        assert_eq!(rendered, "author, package name, version\n");
    }

    #[test]
    fn test_write_report_overwrites_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.csv");
        std::fs::write(&path, "stale content that is longer than the report\n".repeat(10))
            .unwrap();

        let rows = write_report(&path, &sample_set(), ReportMode::Plain).unwrap();
        assert_eq!(rows, 3);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("package_name, version\n"));
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("output.csv");
        let err = write_report(&path, &sample_set(), ReportMode::Author).unwrap_err();
        assert!(err.to_string().contains("output.csv"));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("author".parse::<ReportMode>(), Ok(ReportMode::Author));
        assert_eq!("Plain".parse::<ReportMode>(), Ok(ReportMode::Plain));
        assert!("fancy".parse::<ReportMode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&ReportMode::Plain).unwrap();
        assert_eq!(json, "\"plain\"");
        let parsed: ReportMode = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(parsed, ReportMode::Author);
    }
}
