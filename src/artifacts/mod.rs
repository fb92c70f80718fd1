//! Git data structures and algorithms
//!
//! - `graph`: DOT emission and the external renderer
//! - `log`: Commit history traversal and filtering
//! - `objects`: Object ids, raw loose objects and the commit parser

pub mod graph;
pub mod log;
pub mod objects;
