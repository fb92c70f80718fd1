//! Loose object store reader
//!
//! Objects live under `.git/objects/<first-2-chars>/<remaining-38-chars>`,
//! each one zlib-compressed. Packfiles are not read.

use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::raw_object::RawObject;
use crate::errors::{GraphError, Result};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    verify: bool,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            path,
            verify: false,
        }
    }

    /// Recompute the SHA-1 of every object read and reject mismatches
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, object_id: &ObjectId) -> Result<RawObject> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_id, object_path)?;

        if self.verify {
            Self::verify_checksum(object_id, &object_content)?;
        }

        Ok(RawObject::new(object_id.clone(), object_content))
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> Result<CommitRecord> {
        let (object_type, content) = self.load(object_id)?.split()?;

        match object_type {
            ObjectType::Commit => CommitRecord::parse(object_id.clone(), &content),
            other => Err(GraphError::malformed(
                object_id,
                format!("expected a commit object, found a {other}"),
            )),
        }
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> Result<Bytes> {
        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GraphError::ObjectNotFound(object_id.clone()));
            }
            Err(e) => return Err(GraphError::io(object_path, e)),
        };

        Self::decompress(object_id, object_content.into())
    }

    fn decompress(object_id: &ObjectId, data: Bytes) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|e| GraphError::corrupt(object_id, format!("unable to decompress: {e}")))?;

        Ok(decompressed_content.into())
    }

    fn verify_checksum(object_id: &ObjectId, content: &[u8]) -> Result<()> {
        let mut hasher = Sha1::new();
        hasher.update(content);
        let actual = format!("{:x}", hasher.finalize());

        if actual != object_id.as_ref() {
            return Err(GraphError::corrupt(
                object_id,
                format!("checksum mismatch, content hashes to {actual}"),
            ));
        }

        Ok(())
    }
}
