//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They come from ref files and from the `tree`/`parent` lines of commits and
//! are never recomputed here, except by the optional integrity check.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::errors::{GraphError, Result};
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// Always 40 lowercase hex characters once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GraphError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Convert to file system path relative to the objects directory
    ///
    /// `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> &str {
        &self.0[..SHORT_OBJECT_ID_LENGTH]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
