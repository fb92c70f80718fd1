//! Graph output
//!
//! - `dot`: Graphviz DOT text for a commit graph
//! - `renderer`: Optional call-out to a `dot`-compatible executable

pub mod dot;
pub mod renderer;
