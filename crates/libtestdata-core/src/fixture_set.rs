use crate::FixtureRecord;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

/// The result of a single scan: every fixture under a root, ordered
/// lexicographically by relative path.
///
/// A `FixtureSet` is never persisted. Rescan to observe filesystem changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixtureSet {
    root: PathBuf,
    records: Vec<FixtureRecord>,
}
impl FixtureSet {
    pub(crate) fn new(root: PathBuf, records: Vec<FixtureRecord>) -> Self {
        Self { root, records }
    }

    /// The directory this set was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn records(&self) -> &[FixtureRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FixtureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn identifiers(&self) -> BTreeSet<&str> {
        self.records.iter().map(FixtureRecord::identifier).collect()
    }

    pub fn get(&self, identifier: &str) -> Option<&FixtureRecord> {
        self.records.iter().find(|record| record.identifier() == identifier)
    }

    /// Absolute (or root-relative, if the root was relative) path of a
    /// fixture in this set.
    pub fn path_of(&self, record: &FixtureRecord) -> PathBuf {
        record.resolve(&self.root)
    }
}

impl<'a> IntoIterator for &'a FixtureSet {
    type Item = &'a FixtureRecord;
    type IntoIter = std::slice::Iter<'a, FixtureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
