//! Command implementations
//!
//! Commands compose the object database, refs, the history walk and the graph
//! emitter into complete operations. They report failures with `anyhow`,
//! adding the path or ref being worked on as context.

pub mod porcelain;
