use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::log::cutoff::Cutoff;
use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::collections::HashSet;
use tracing::{debug, info};

/// Worklist traversal of the parent graph with a cutoff filter
///
/// `load` turns a hash into a parsed commit; the repository passes its
/// database, tests pass an in-memory map.
pub struct RevList<L>
where
    L: Fn(&ObjectId) -> Result<CommitRecord>,
{
    load: L,
    cutoff: Cutoff,
}

impl<L> RevList<L>
where
    L: Fn(&ObjectId) -> Result<CommitRecord>,
{
    pub fn new(load: L, cutoff: Cutoff) -> Self {
        RevList { load, cutoff }
    }

    /// Visit every commit reachable from `seeds` exactly once
    ///
    /// A commit is kept iff its own committer timestamp passes the cutoff;
    /// parents are expanded whether or not the commit was kept. Any load or
    /// parse error aborts the whole walk.
    pub fn walk(&self, seeds: impl IntoIterator<Item = ObjectId>) -> Result<CommitGraph> {
        let mut worklist = seeds.into_iter().collect::<Vec<_>>();
        let mut visited = HashSet::new();
        let mut graph = CommitGraph::new();

        while let Some(oid) = worklist.pop() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            let commit = (self.load)(&oid)?;
            let included = self.cutoff.admits(commit.committer_timestamp());
            debug!(
                oid = %oid,
                timestamp = commit.committer_timestamp(),
                included,
                "visited commit"
            );

            worklist.extend(
                commit
                    .parents()
                    .iter()
                    .rev()
                    .filter(|parent| !visited.contains(*parent))
                    .cloned(),
            );

            if included {
                graph.insert(commit);
            }
        }

        info!(
            visited = visited.len(),
            included = graph.len(),
            cutoff = self.cutoff.timestamp(),
            "history walk complete"
        );

        Ok(graph)
    }
}
