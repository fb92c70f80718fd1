//! Core repository components
//!
//! - `database`: Loose object reader (zlib-compressed objects by hash)
//! - `refs`: Reference resolution (branches, HEAD)
//! - `repository`: Read-only handle tying the two to one repository root

pub mod database;
pub mod refs;
pub mod repository;
