//! Decompressed loose object
//!
//! On disk (after inflating) every object is `<type> <size>\0<content>`.
//! A `RawObject` keeps those bytes as read and splits the prefix on demand.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{GraphError, Result};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct RawObject {
    oid: ObjectId,
    data: Bytes,
}

impl RawObject {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// The full inflated bytes, type prefix included
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Split the `<type> <size>\0` prefix from the content
    ///
    /// Fails with `CorruptObject` if the prefix is missing or unparseable, or
    /// if the declared size does not match the number of content bytes.
    pub fn split(&self) -> Result<(ObjectType, Bytes)> {
        let nul = self
            .data
            .iter()
            .position(|&b| b == b'\0')
            .ok_or_else(|| GraphError::corrupt(&self.oid, "missing object header"))?;

        let header = std::str::from_utf8(&self.data[..nul])
            .map_err(|_| GraphError::corrupt(&self.oid, "object header is not valid UTF-8"))?;
        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| GraphError::corrupt(&self.oid, format!("bad object header {header:?}")))?;

        let object_type = ObjectType::try_from(object_type)
            .map_err(|reason| GraphError::corrupt(&self.oid, reason))?;
        let size = size
            .parse::<usize>()
            .map_err(|_| GraphError::corrupt(&self.oid, format!("bad object size {size:?}")))?;

        let content = self.data.slice(nul + 1..);
        if content.len() != size {
            return Err(GraphError::corrupt(
                &self.oid,
                format!("declared size {size}, found {} bytes", content.len()),
            ));
        }

        Ok((object_type, content))
    }
}
