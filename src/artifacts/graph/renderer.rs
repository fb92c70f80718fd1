//! External graph renderer
//!
//! A `dot`-compatible executable is run as `<tool> -Tpng <dot-file> -o <image>`.
//! The renderer is optional: a missing tool, a non-executable path or a
//! failed run is reported as an outcome, never as an error, because the DOT
//! file has already been written by then.

use derive_new::new;
use is_executable::IsExecutable;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(PathBuf),
    ToolMissing(PathBuf),
    ToolNotExecutable(PathBuf),
    Failed { status: Option<i32>, stderr: String },
    SpawnFailed(String),
}

#[derive(Debug, Clone, new)]
pub struct Renderer {
    tool: PathBuf,
}

impl Renderer {
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn render(&self, dot_path: &Path, image_path: &Path) -> RenderOutcome {
        if !self.tool.exists() {
            warn!(tool = %self.tool.display(), "renderer not found");
            return RenderOutcome::ToolMissing(self.tool.clone());
        }
        if !self.tool.is_executable() {
            warn!(tool = %self.tool.display(), "renderer is not executable");
            return RenderOutcome::ToolNotExecutable(self.tool.clone());
        }

        debug!(
            tool = %self.tool.display(),
            input = %dot_path.display(),
            output = %image_path.display(),
            "running renderer"
        );
        let output = Command::new(&self.tool)
            .arg("-Tpng")
            .arg(dot_path)
            .arg("-o")
            .arg(image_path)
            .output();

        match output {
            Ok(output) if output.status.success() => {
                RenderOutcome::Rendered(image_path.to_path_buf())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                warn!(status = ?output.status.code(), %stderr, "renderer failed");
                RenderOutcome::Failed {
                    status: output.status.code(),
                    stderr,
                }
            }
            Err(e) => {
                warn!(error = %e, "unable to spawn renderer");
                RenderOutcome::SpawnFailed(e.to_string())
            }
        }
    }
}
