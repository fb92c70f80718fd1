//! Commit history graphs read straight from a git object store
//!
//! The crate reads loose objects from `.git/objects`, parses commits, walks
//! the parent graph from one or more refs keeping the commits older than a
//! cutoff, and emits the result as Graphviz DOT.
//!
//! - `areas`: The on-disk repository (object database, refs)
//! - `artifacts`: Objects, history traversal and graph output
//! - `commands`: User-facing operations composed from the above
//! - `errors`: The error taxonomy shared by every layer below `commands`

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
