//! Commit history traversal
//!
//! - `rev_list`: Worklist walk over the parent graph
//! - `commit_graph`: The set of commits a walk selected, plus their edges
//! - `cutoff`: The strict time boundary commits are filtered against
//!
//! ## Algorithm
//!
//! The walk pops hashes off a stack seeded from one or more refs, skips
//! anything already visited, loads and parses the rest, keeps the commits
//! older than the cutoff and pushes every parent. The visited set bounds the
//! work to the objects reachable from the seeds, so merges and shared
//! ancestors are read once.

pub mod commit_graph;
pub mod cutoff;
pub mod rev_list;

use crate::areas::repository::Repository;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::log::cutoff::Cutoff;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::path::Path;

/// Walk the history of a repository starting from the given commits
pub fn walk_repository(
    repository: &Repository,
    seeds: impl IntoIterator<Item = ObjectId>,
    cutoff: Cutoff,
) -> Result<CommitGraph> {
    RevList::new(|oid| repository.database().load_commit(oid), cutoff).walk(seeds)
}

/// Walk the history reachable from one ref file
///
/// `ref_path` is resolved against `<repo_root>/.git` when relative, so both
/// `refs/heads/master` and an absolute path work.
pub fn walk(
    repo_root: impl AsRef<Path>,
    ref_path: impl AsRef<Path>,
    cutoff: Cutoff,
) -> Result<CommitGraph> {
    let repository = Repository::open(repo_root)?;
    let ref_path = repository.path().join(".git").join(ref_path);
    let head = repository.refs().read_ref_file(&ref_path)?;

    walk_repository(&repository, [head], cutoff)
}
