use super::PackageName;
use std::collections::BTreeMap;

/// Mapping from package name to its direct dependency names
///
/// Keys iterate in ascending order, so anything rendered from the map is a
/// pure function of its contents. A key with an empty list means the package
/// is known and has no dependencies; a missing key means it is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureMap {
    entries: BTreeMap<PackageName, Vec<PackageName>>,
}

impl ClosureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` unless it is already a key. Returns whether it was added.
    pub fn insert(&mut self, name: PackageName, dependencies: Vec<PackageName>) -> bool {
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, dependencies);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&[PackageName]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
