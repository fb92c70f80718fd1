//! Graphviz DOT emitter
//!
//! Commits become nodes, parent links become `parent -> child` edges. Node
//! ids are full hashes so two commits sharing an abbreviation never merge;
//! labels show the abbreviation and the first line of the message.
//!
//! ```text
//! digraph G {
//!   rankdir=TB;
//!   node [shape=box];
//!   "<hash>" [label="<short>\n<subject>"];
//!   "<parent-hash>" -> "<child-hash>";
//! }
//! ```

use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::CommitRecord;
use derive_new::new;

/// Layout direction of the emitted graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RankDir {
    /// Oldest commits at the top
    #[default]
    #[value(name = "TB")]
    TopBottom,
    /// Oldest commits on the left
    #[value(name = "LR")]
    LeftRight,
}

impl RankDir {
    pub fn as_str(&self) -> &str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// What goes into the DOT output beyond hashes and subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DotOptions {
    /// Add the committer date (UTC) to each label
    pub show_dates: bool,
    /// Add the author name to each label
    pub show_authors: bool,
    pub rank_dir: RankDir,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            show_dates: false,
            show_authors: false,
            rank_dir: RankDir::TopBottom,
        }
    }
}

#[derive(Debug, Clone, Copy, new)]
pub struct DotEmitter {
    options: DotOptions,
}

impl DotEmitter {
    /// Render the graph; edges to commits outside the graph are dropped
    pub fn emit(&self, graph: &CommitGraph) -> String {
        let mut dot = String::new();
        dot.push_str("digraph G {\n");
        dot.push_str(&format!("  rankdir={};\n", self.options.rank_dir.as_str()));
        dot.push_str("  node [shape=box];\n");

        for commit in graph.commits() {
            dot.push_str(&format!(
                "  \"{}\" [label=\"{}\"];\n",
                commit.oid(),
                escape_dot(&self.label(commit))
            ));
        }

        for (parent, child) in graph.edges() {
            dot.push_str(&format!("  \"{parent}\" -> \"{child}\";\n"));
        }

        dot.push_str("}\n");
        dot
    }

    fn label(&self, commit: &CommitRecord) -> String {
        let mut lines = vec![commit.oid().to_short_oid().to_string()];

        if !commit.short_message().is_empty() {
            lines.push(commit.short_message().to_string());
        }
        if self.options.show_dates {
            lines.extend(commit.committer().utc_timestamp());
        }
        if self.options.show_authors && !commit.author().name().is_empty() {
            lines.push(commit.author().name().to_string());
        }

        lines.join("\n")
    }
}

/// Escape a string for use in a double-quoted DOT attribute
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
