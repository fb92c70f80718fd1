//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `graph`: Walk history up to a cutoff, write it as DOT, optionally render it

pub mod graph;
