use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::{GraphError, Result};
use std::path::Path;

/// Read-only view of a repository on disk
///
/// Built from an explicit root; holds no mutable state, so any number of
/// walks can borrow it.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Fails with `InvalidRepository` when `<path>/.git/objects` is not a
    /// directory, before anything else is read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let git_path = path.join(".git");
        let objects_path = git_path.join("objects");

        if !objects_path.is_dir() {
            return Err(GraphError::InvalidRepository(objects_path));
        }

        Ok(Repository {
            path: path.into(),
            database: Database::new(objects_path.into_boxed_path()),
            refs: Refs::new(git_path.into_boxed_path()),
        })
    }

    /// Recompute object hashes on every read
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.database = self.database.with_verification(verify);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
