use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Commits selected by a history walk, keyed by hash
///
/// Iteration is in lexicographic hash order, so anything rendered from the
/// graph is deterministic regardless of traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    commits: BTreeMap<ObjectId, CommitRecord>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a commit; returns `false` if its hash was already present
    pub fn insert(&mut self, commit: CommitRecord) -> bool {
        match self.commits.entry(commit.oid().clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(commit);
                true
            }
        }
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&CommitRecord> {
        self.commits.get(oid)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn commits(&self) -> impl Iterator<Item = &CommitRecord> {
        self.commits.values()
    }

    /// `(parent, child)` pairs whose endpoints are both in the graph
    ///
    /// Ordered by child hash, then by the child's parent declaration order.
    /// A parent listed twice by the same child yields one edge.
    pub fn edges(&self) -> Vec<(&ObjectId, &ObjectId)> {
        let mut edges = Vec::new();

        for commit in self.commits.values() {
            for (position, parent) in commit.parents().iter().enumerate() {
                if !self.contains(parent) || commit.parents()[..position].contains(parent) {
                    continue;
                }
                edges.push((parent, commit.oid()));
            }
        }

        edges
    }
}
