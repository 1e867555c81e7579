//! Dependency information structures

use super::VersionSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The winning declaration of a dependency after merging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Package name
    pub name: String,
    /// Highest version seen so far
    pub version: VersionSpec,
    /// Author of the manifest that declared `version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl DependencyRecord {
    /// Creates a new record without an author
    pub fn new(name: impl Into<String>, version: impl Into<VersionSpec>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            author: None,
        }
    }

    /// Sets the author for this record (builder pattern)
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns the author, or an empty string when none was declared
    pub fn author_or_empty(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)?;
        if let Some(author) = &self.author {
            write!(f, " ({})", author)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = DependencyRecord::new("lodash", "v4.17.21");
        assert_eq!(record.name, "lodash");
        assert_eq!(record.version.as_str(), "v4.17.21");
        assert!(record.author.is_none());
    }

    #[test]
    fn test_record_with_author() {
        let record = DependencyRecord::new("react", "v18.0.0").with_author("bob");
        assert_eq!(record.author.as_deref(), Some("bob"));
        assert_eq!(record.author_or_empty(), "bob");
    }

    #[test]
    fn test_author_or_empty_without_author() {
        let record = DependencyRecord::new("react", "v18.0.0");
        assert_eq!(record.author_or_empty(), "");
    }

    #[test]
    fn test_record_display() {
        let record = DependencyRecord::new("lodash", "v4.2.0");
        assert_eq!(format!("{}", record), "lodash@v4.2.0");

        let record = record.with_author("bob");
        assert_eq!(format!("{}", record), "lodash@v4.2.0 (bob)");
    }

    #[test]
    fn test_serde_record_skips_missing_author() {
        let record = DependencyRecord::new("lodash", "v4.2.0");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"lodash","version":"v4.2.0"}"#);

        let parsed: DependencyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
