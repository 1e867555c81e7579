//! Deduplicated set of winning dependency records

use super::DependencyRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Dependency name → winning record, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedSet {
    records: Vec<DependencyRecord>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl MergedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct dependencies
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no dependency has been recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if `name` has a record
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the winning record for `name`
    pub fn get(&self, name: &str) -> Option<&DependencyRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Iterates records in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, DependencyRecord> {
        self.records.iter()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut DependencyRecord> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    /// Appends a record for a name not seen before
    pub(crate) fn insert(&mut self, record: DependencyRecord) {
        debug_assert!(!self.contains(&record.name));
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
    }
}

impl<'a> IntoIterator for &'a MergedSet {
    type Item = &'a DependencyRecord;
    type IntoIter = std::slice::Iter<'a, DependencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
