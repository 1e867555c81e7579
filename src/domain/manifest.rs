//! Package manifest schema
//!
//! Only two fields matter:
//! - `author`: a plain string or an npm person object (`{ "name": .. }`)
//! - `dependencies`: package name → version string, in declaration order
//!
//! Every other field (`name`, `version`, `devDependencies`, ..) is ignored.

use super::VersionSpec;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Manifest author, as a string or a person object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    /// `"author": "alice"` or `"author": "alice <a@x.io> (https://x.io)"`
    Name(String),
    /// `"author": { "name": "alice", "email": "a@x.io" }`
    Person {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Author {
    /// Returns the text recorded in reports
    pub fn name(&self) -> &str {
        match self {
            Author::Name(name) => name,
            Author::Person { name, .. } => name,
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dependencies in the order the manifest declares them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredDependencies(Vec<(String, VersionSpec)>);

impl DeclaredDependencies {
    /// Returns true if nothing is declared
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(name, version)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionSpec)> {
        self.0.iter().map(|(name, version)| (name.as_str(), version))
    }

    fn push(&mut self, name: String, version: VersionSpec) {
        self.0.push((name, version));
    }
}

impl<'de> Deserialize<'de> for DeclaredDependencies {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = DeclaredDependencies;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of package names to version strings")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut deps = DeclaredDependencies::default();
                while let Some((name, version)) = map.next_entry::<String, VersionSpec>()? {
                    deps.push(name, version);
                }
                Ok(deps)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

impl FromIterator<(String, VersionSpec)> for DeclaredDependencies {
    fn from_iter<I: IntoIterator<Item = (String, VersionSpec)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A parsed package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// File the manifest was read from
    #[serde(skip)]
    pub source: PathBuf,
    /// Declared author
    pub author: Option<Author>,
    /// Declared dependencies; `None` when the field is absent or null
    pub dependencies: Option<DeclaredDependencies>,
}

impl Manifest {
    /// Creates an empty manifest for the given source path
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Sets the author (builder pattern)
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(Author::Name(author.into()));
        self
    }

    /// Appends a dependency (builder pattern)
    pub fn with_dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<VersionSpec>,
    ) -> Self {
        self.dependencies
            .get_or_insert_with(DeclaredDependencies::default)
            .push(name.into(), version.into());
        self
    }

    /// Returns the source path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the author text, if any
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(Author::name)
    }

    /// Returns true if at least one dependency is declared
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|deps| !deps.is_empty())
    }

    /// Iterates declared dependencies; empty when the field is missing
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &VersionSpec)> {
        self.dependencies.iter().flat_map(|deps| deps.iter())
    }
}
