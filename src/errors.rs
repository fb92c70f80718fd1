//! Error taxonomy for reading the object store and walking history
//!
//! Every variant is fatal to the current invocation: a missing ref, a missing
//! or corrupt object, or a malformed commit all mean the store cannot yield a
//! trustworthy graph, so nothing is retried and no partial result is returned.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("ref not found: {}", .0.display())]
    RefNotFound(PathBuf),

    #[error("invalid ref {}: {content:?} is not an object id", .path.display())]
    InvalidRef { path: PathBuf, content: String },

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    #[error("malformed commit {oid}: {reason}")]
    MalformedCommit { oid: ObjectId, reason: String },

    #[error("not a git repository (missing {})", .0.display())]
    InvalidRepository(PathBuf),

    #[error("invalid object id: {0:?}")]
    InvalidObjectId(String),

    #[error("invalid cutoff date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GraphError {
    pub(crate) fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Self {
        GraphError::CorruptObject {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(oid: &ObjectId, reason: impl Into<String>) -> Self {
        GraphError::MalformedCommit {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}
