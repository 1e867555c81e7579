//! depmerge - Manifest dependency merging library
//!
//! This library provides the core functionality for merging the dependencies
//! declared across several package manifests:
//! - Loading manifests (author and ordered dependencies)
//! - Comparing `v`-prefixed dotted versions
//! - Keeping the highest version per dependency
//! - Writing the result as a CSV report

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod merge;
pub mod orchestrator;
pub mod output;
