//! Git object types and operations
//!
//! Git stores all content as objects identified by SHA-1 hashes. Only commits
//! are interpreted here; the other kinds are recognized by name so that a
//! non-commit object can be reported precisely.
//!
//! All objects share the loose encoding `<type> <size>\0<content>`,
//! zlib-compressed on disk.

pub mod commit;
pub mod object_id;
pub mod object_type;
pub mod raw_object;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash used in graph node ids and labels
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
