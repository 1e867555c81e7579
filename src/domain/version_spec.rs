//! Version specifications as declared in manifests
//!
//! Only the `v`-prefixed dotted form is understood:
//! - `v1.2.3`, `v18.0.0`, `v2.0`
//!
//! Range operators, pre-release tags and build metadata are not parsed.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Shape accepted in strict mode
static WELL_FORMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+(?:\.\d+)*$").unwrap());

/// A version string such as `v1.2.3`, kept exactly as written
///
/// Not `Ord`: comparison skips non-numeric components, so it is not a total
/// order for malformed specs. Use [`VersionSpec::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionSpec {
    raw: String,
}

impl VersionSpec {
    /// Creates a new VersionSpec from its raw text
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the raw version string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the spec has the `v1.2.3` shape
    pub fn is_well_formed(&self) -> bool {
        WELL_FORMED_RE.is_match(&self.raw)
    }

    /// Returns the numeric components, leading zeros stripped
    ///
    /// An empty or blank component reads as `"0"`; `None` marks a component
    /// that is not a number.
    pub fn components(&self) -> Vec<Option<&str>> {
        self.numeric_part().split('.').map(numeric_component).collect()
    }

    /// Compares two specs component by component, left to right
    ///
    /// Components are compared as unbounded non-negative integers. A missing
    /// trailing component counts as `0`. A pair involving a non-numeric
    /// component never decides and the walk moves on. If no index decides,
    /// the specs are equal.
    pub fn compare(&self, other: &VersionSpec) -> Ordering {
        let left = self.components();
        let right = other.components();
        let len = left.len().max(right.len());

        for i in 0..len {
            let a = left.get(i).copied().unwrap_or(Some("0"));
            let b = right.get(i).copied().unwrap_or(Some("0"));

            if let (Some(a), Some(b)) = (a, b) {
                match compare_digits(a, b) {
                    Ordering::Equal => continue,
                    decided => return decided,
                }
            }
        }

        Ordering::Equal
    }

    /// Returns true if this spec is strictly newer than `other`
    pub fn is_newer_than(&self, other: &VersionSpec) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// The text after one leading non-digit character (normally `v`)
    fn numeric_part(&self) -> &str {
        let mut chars = self.raw.chars();
        match chars.next() {
            Some(c) if !c.is_ascii_digit() => chars.as_str(),
            _ => &self.raw,
        }
    }
}

/// Normalizes one dotted component to its digits without leading zeros
fn numeric_component(part: &str) -> Option<&str> {
    let part = part.trim();
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match part.trim_start_matches('0') {
        "" => Some("0"),
        digits => Some(digits),
    }
}

/// Orders two normalized digit strings by numeric value
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for VersionSpec {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for VersionSpec {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Compares two raw version strings
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    VersionSpec::new(a).compare(&VersionSpec::new(b))
}
