//! Dependency merging
//!
//! Folds manifests, in order, into a [`MergedSet`] that keeps the highest
//! version seen for every dependency name. Each step is recorded as a
//! [`MergeEvent`] so callers can report what happened.

use crate::domain::{DependencyRecord, Manifest, MergedSet, VersionSpec};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Something that happened while merging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MergeEvent {
    /// Manifest declared no dependencies
    Skipped { source: PathBuf },
    /// First declaration of a dependency
    Added { name: String, version: VersionSpec },
    /// A later manifest declared a strictly newer version
    Upgraded {
        name: String,
        from: VersionSpec,
        to: VersionSpec,
    },
}

impl fmt::Display for MergeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeEvent::Skipped { source } => {
                write!(f, "no dependencies found for {}", source.display())
            }
            MergeEvent::Added { name, version } => write!(f, "new {}: {}", name, version),
            MergeEvent::Upgraded { name, from, to } => {
                write!(f, "upgraded {}: {} -> {}", name, from, to)
            }
        }
    }
}

/// Result of merging a sequence of manifests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Winning record per dependency name
    pub merged: MergedSet,
    /// Events in the order they occurred
    pub events: Vec<MergeEvent>,
    /// Number of manifests folded
    pub manifests_read: usize,
    /// Number of manifests without dependencies
    pub manifests_skipped: usize,
}

impl MergeOutcome {
    /// Number of upgrade events
    pub fn upgrade_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Upgraded { .. }))
            .count()
    }

    /// Fold one manifest into the outcome
    fn absorb(mut self, manifest: &Manifest) -> Self {
        self.manifests_read += 1;

        if !manifest.has_dependencies() {
            tracing::info!("no dependencies found for {}", manifest.source().display());
            self.manifests_skipped += 1;
            self.events.push(MergeEvent::Skipped {
                source: manifest.source().to_path_buf(),
            });
            return self;
        }

        let author = manifest.author_name();
        for (name, version) in manifest.dependencies() {
            if let Some(event) = offer(&mut self.merged, name, version, author) {
                self.events.push(event);
            }
        }

        self
    }
}

/// Offer one declaration to the set; returns the event it caused, if any
fn offer(
    merged: &mut MergedSet,
    name: &str,
    version: &VersionSpec,
    author: Option<&str>,
) -> Option<MergeEvent> {
    match merged.get_mut(name) {
        Some(existing) => {
            if !version.is_newer_than(&existing.version) {
                return None;
            }
            tracing::info!("upgraded {}: {} -> {}", name, existing.version, version);
            let from = std::mem::replace(&mut existing.version, version.clone());
            existing.author = author.map(str::to_string);
            Some(MergeEvent::Upgraded {
                name: name.to_string(),
                from,
                to: version.clone(),
            })
        }
        None => {
            tracing::info!("new {}: {}", name, version);
            merged.insert(DependencyRecord {
                name: name.to_string(),
                version: version.clone(),
                author: author.map(str::to_string),
            });
            Some(MergeEvent::Added {
                name: name.to_string(),
                version: version.clone(),
            })
        }
    }
}

/// Merge manifests in order, keeping the highest version per dependency
pub fn merge<'a, I>(manifests: I) -> MergeOutcome
where
    I: IntoIterator<Item = &'a Manifest>,
{
    manifests
        .into_iter()
        .fold(MergeOutcome::default(), MergeOutcome::absorb)
}
