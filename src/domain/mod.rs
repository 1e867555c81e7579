//! Core domain models for depmerge
//!
//! This module contains the fundamental types used throughout the application:
//! - Version specifications and their ordering
//! - Manifest schema (author and ordered dependencies)
//! - Dependency records and the merged set of winners

mod dependency;
mod manifest;
mod merged_set;
mod version_spec;

pub use dependency::DependencyRecord;
pub use manifest::{Author, DeclaredDependencies, Manifest};
pub use merged_set::MergedSet;
pub use version_spec::{compare_versions, VersionSpec};
