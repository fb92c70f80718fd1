use crate::areas::repository::Repository;
use crate::artifacts::graph::dot::{DotEmitter, DotOptions};
use crate::artifacts::graph::renderer::{RenderOutcome, Renderer};
use crate::artifacts::log::cutoff::Cutoff;
use crate::artifacts::log::walk_repository;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub cutoff: Cutoff,
    /// Branch to start from; the branch HEAD points to when `None`
    pub branch: Option<String>,
    /// Start from every branch under `refs/heads`
    pub all_branches: bool,
    pub output_path: PathBuf,
    /// Renderer executable; rendering is skipped when `None`
    pub renderer: Option<PathBuf>,
    /// Image written by the renderer; the output path with `.png` when `None`
    pub image_path: Option<PathBuf>,
    pub dot: DotOptions,
    /// Also write the DOT text to the command's writer
    pub echo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub seeds: Vec<ObjectId>,
    pub commits: usize,
    pub edges: usize,
    pub output_path: PathBuf,
    pub render: Option<RenderOutcome>,
}

impl Repository {
    /// Commits the walk starts from
    pub fn graph_seeds(
        &self,
        branch: Option<&str>,
        all_branches: bool,
    ) -> anyhow::Result<Vec<ObjectId>> {
        if all_branches {
            let branches = self.refs().list_branches()?;
            if !branches.is_empty() {
                return branches
                    .iter()
                    .map(|branch| {
                        self.refs()
                            .read_branch(branch)
                            .with_context(|| format!("unable to resolve branch {branch}"))
                    })
                    .collect();
            }
        }

        let branch = match branch {
            Some(branch) => Some(branch.to_string()),
            None => self.refs().current_branch()?,
        };

        let head = match branch {
            Some(branch) => self
                .refs()
                .read_branch(&branch)
                .with_context(|| format!("unable to resolve branch {branch}"))?,
            None => self.refs().read_head()?,
        };

        Ok(vec![head])
    }

    /// Walk, emit and write the commit graph, then hand it to the renderer
    ///
    /// The output file is only created once the whole walk has succeeded, and
    /// it is written to a temporary sibling first and renamed into place, so a
    /// failed run never leaves a partial graph on disk.
    pub fn graph(
        &self,
        opts: &GraphOptions,
        writer: &mut impl Write,
    ) -> anyhow::Result<GraphSummary> {
        let seeds = self.graph_seeds(opts.branch.as_deref(), opts.all_branches)?;
        let graph = walk_repository(self, seeds.clone(), opts.cutoff)?;
        let dot = DotEmitter::new(opts.dot).emit(&graph);

        Self::write_graph(&opts.output_path, &dot)?;
        info!(
            path = %opts.output_path.display(),
            commits = graph.len(),
            "graph written"
        );

        if opts.echo {
            write!(writer, "{dot}")?;
        }

        let render = opts.renderer.as_ref().map(|tool| {
            let image_path = opts
                .image_path
                .clone()
                .unwrap_or_else(|| opts.output_path.with_extension("png"));
            Renderer::new(tool.clone()).render(&opts.output_path, &image_path)
        });

        Ok(GraphSummary {
            seeds,
            commits: graph.len(),
            edges: graph.edges().len(),
            output_path: opts.output_path.clone(),
            render,
        })
    }

    fn write_graph(path: &Path, dot: &str) -> anyhow::Result<()> {
        let file_name = path
            .file_name()
            .context(format!("Invalid output path {}", path.display()))?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(format!(".tmp-{}", std::process::id()));
        let temp_path = path.with_file_name(temp_name);

        std::fs::write(&temp_path, dot).context(format!(
            "Unable to write graph file {}",
            temp_path.display()
        ))?;

        // rename the temp file to the output file to make it atomic
        if let Err(e) = std::fs::rename(&temp_path, path) {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "unable to remove temp graph file"
                );
            }
            return Err(e)
                .with_context(|| format!("Unable to rename graph file to {}", path.display()));
        }

        Ok(())
    }
}
