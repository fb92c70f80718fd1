//! Git references (branches, HEAD)
//!
//! References are human-readable names pointing to commits. They are stored
//! as text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references (typically HEAD)
//!
//! Only reading is supported.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GraphError, Result};
use derive_new::new;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
static SYMREF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ref: (.+)$").expect("valid symref regex"));

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Symbolic chains longer than this are treated as a loop
const MAX_SYMREF_DEPTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    SymRef(String),
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read(path: &Path) -> Result<SymRefOrOid> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GraphError::RefNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(GraphError::io(path, e)),
        };
        let content = content.trim();

        if let Some(symref_match) = SYMREF_REGEX.captures(content) {
            return Ok(SymRefOrOid::SymRef(symref_match[1].to_string()));
        }

        ObjectId::try_parse(content)
            .map(SymRefOrOid::Oid)
            .map_err(|_| GraphError::InvalidRef {
                path: path.to_path_buf(),
                content: content.to_string(),
            })
    }
}

/// Git references reader, rooted at the `.git` directory
#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Resolve a ref file to the object id it names, following `ref:` links
    pub fn read_ref_file(&self, path: &Path) -> Result<ObjectId> {
        let mut path = path.to_path_buf();

        for _ in 0..MAX_SYMREF_DEPTH {
            match SymRefOrOid::read(&path)? {
                SymRefOrOid::Oid(oid) => return Ok(oid),
                SymRefOrOid::SymRef(target) => path = self.path.join(target),
            }
        }

        Err(GraphError::InvalidRef {
            path,
            content: "symbolic reference loop".to_string(),
        })
    }

    /// Resolve `refs/heads/<branch>`
    pub fn read_branch(&self, branch: &str) -> Result<ObjectId> {
        self.read_ref_file(&self.branch_path(branch))
    }

    pub fn read_head(&self) -> Result<ObjectId> {
        self.read_ref_file(&self.head_path())
    }

    /// Branch HEAD points to, or `None` when HEAD is detached
    pub fn current_branch(&self) -> Result<Option<String>> {
        match SymRefOrOid::read(&self.head_path())? {
            SymRefOrOid::SymRef(target) => Ok(target
                .strip_prefix("refs/heads/")
                .map(|branch| branch.to_string())),
            SymRefOrOid::Oid(_) => Ok(None),
        }
    }

    /// All branch names under `refs/heads`, sorted
    pub fn list_branches(&self) -> Result<Vec<String>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&heads_path).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| heads_path.clone());
                GraphError::io(path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(&heads_path) {
                let name = relative
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                branches.push(name);
            }
        }

        branches.sort();
        Ok(branches)
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn heads_path(&self) -> PathBuf {
        self.path.join("refs").join("heads")
    }

    pub fn branch_path(&self, branch: &str) -> PathBuf {
        branch
            .split('/')
            .fold(self.heads_path(), |path, part| path.join(part))
    }
}
