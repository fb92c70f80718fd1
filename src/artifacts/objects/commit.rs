//! Git commit object
//!
//! Commits are the only object kind this crate interprets. They contain:
//! - A tree object ID (directory snapshot, never followed here)
//! - Parent commit ID(s) (the edges of the history graph)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! Content after the `commit <size>\0` prefix:
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The header is a sequence of `key SP value` lines ended by one blank line.
//! Lines starting with a space continue the previous header (multi-line
//! `gpgsig` and `mergetag` values) and are skipped with it.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GraphError, Result};

/// Author or committer information
///
/// The timestamp is kept as epoch seconds (UTC) exactly as stored; the
/// timezone offset is kept as text for display only. Author lines are read
/// leniently, so either may be absent there. Committer lines always carry a
/// timestamp.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Signature {
    name: String,
    email: String,
    timestamp: Option<i64>,
    tz_offset: Option<String>,
}

impl Signature {
    /// Parse a signature, keeping whatever name and email it holds even when
    /// the trailing `<timestamp> <timezone>` pair is missing or garbled
    pub fn parse_lenient(value: &str) -> Self {
        let tokens = value.split_whitespace().collect::<Vec<_>>();

        match tokens.as_slice() {
            [rest @ .., timestamp, tz_offset] if timestamp.parse::<i64>().is_ok() => {
                let (name, email) = split_name_email(&rest.join(" "));
                Signature {
                    name,
                    email,
                    timestamp: timestamp.parse().ok(),
                    tz_offset: Some(tz_offset.to_string()),
                }
            }
            _ => {
                let (name, email) = split_name_email(&tokens.join(" "));
                Signature {
                    name,
                    email,
                    timestamp: None,
                    tz_offset: None,
                }
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Seconds since the Unix epoch (UTC)
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn tz_offset(&self) -> Option<&str> {
        self.tz_offset.as_deref()
    }

    /// Format author name and email for display
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Timestamp rendered in UTC as `YYYY-MM-DD HH:MM:SS`
    pub fn utc_timestamp(&self) -> Option<String> {
        let timestamp = self.timestamp?;
        Some(
            chrono::DateTime::from_timestamp(timestamp, 0)
                .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| timestamp.to_string()),
        )
    }
}

fn split_name_email(name_email: &str) -> (String, String) {
    match (name_email.find('<'), name_email.rfind('>')) {
        (Some(start), Some(end)) if start < end => (
            name_email[..start].trim().to_string(),
            name_email[start + 1..end].to_string(),
        ),
        _ => (name_email.trim().to_string(), String::new()),
    }
}

impl TryFrom<&str> for Signature {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        // Format: "name <email> timestamp timezone"
        // The timestamp is always the second-to-last token, whatever the name holds
        let tokens = value.split_whitespace().collect::<Vec<_>>();
        if tokens.len() < 2 {
            return Err(format!("invalid signature {value:?}"));
        }

        let timestamp_token = tokens[tokens.len() - 2];
        if timestamp_token.parse::<i64>().is_err() {
            return Err(format!("invalid timestamp {timestamp_token:?}"));
        }

        Ok(Signature::parse_lenient(value))
    }
}

/// Parsed commit, identified by the hash it was loaded under
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CommitRecord {
    oid: ObjectId,
    tree: ObjectId,
    /// Declaration order, duplicates kept
    parents: Vec<ObjectId>,
    author: Signature,
    committer: Signature,
    committer_timestamp: i64,
    message: String,
}

/// One `key SP value` header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderLine<'c> {
    key: &'c str,
    value: &'c str,
}

fn tokenize_header(header: &str) -> std::result::Result<Vec<HeaderLine<'_>>, String> {
    let mut lines = Vec::new();

    for line in header.split('\n') {
        if line.starts_with(' ') {
            if lines.is_empty() {
                return Err("continuation line without a header".to_string());
            }
            continue;
        }

        let (key, value) = line
            .split_once(' ')
            .ok_or_else(|| format!("header line without value: {line:?}"))?;
        lines.push(HeaderLine { key, value });
    }

    Ok(lines)
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> std::result::Result<(), String> {
    if slot.replace(value).is_some() {
        return Err(format!("duplicate {key} header"));
    }
    Ok(())
}

impl CommitRecord {
    /// Parse commit content (the bytes after the `commit <size>\0` prefix)
    ///
    /// The hash is supplied by the caller; it is not re-derived from content.
    ///
    /// The header must be valid UTF-8. The message is decoded lossily since
    /// commits may declare another `encoding`.
    pub fn parse(oid: ObjectId, content: &[u8]) -> Result<Self> {
        let split = content
            .windows(2)
            .position(|window| window == b"\n\n")
            .ok_or_else(|| GraphError::malformed(&oid, "missing blank line after header"))?;
        let (header, body) = (&content[..split], &content[split + 2..]);

        let header = std::str::from_utf8(header)
            .map_err(|e| GraphError::malformed(&oid, format!("header is not valid UTF-8: {e}")))?;
        let body = String::from_utf8_lossy(body);

        let lines = tokenize_header(header).map_err(|reason| GraphError::malformed(&oid, reason))?;

        let mut tree = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for HeaderLine { key, value } in lines {
            let result = match key {
                "tree" => ObjectId::try_parse(value)
                    .map_err(|e| e.to_string())
                    .and_then(|tree_oid| set_once(&mut tree, key, tree_oid)),
                "parent" => ObjectId::try_parse(value)
                    .map(|parent_oid| parents.push(parent_oid))
                    .map_err(|e| e.to_string()),
                "author" => set_once(&mut author, key, Signature::parse_lenient(value)),
                "committer" => Signature::try_from(value)
                    .and_then(|signature| set_once(&mut committer, key, signature)),
                _ => Ok(()),
            };
            result.map_err(|reason| GraphError::malformed(&oid, format!("{key}: {reason}")))?;
        }

        let tree = tree.ok_or_else(|| GraphError::malformed(&oid, "missing tree header"))?;
        let author = author.ok_or_else(|| GraphError::malformed(&oid, "missing author header"))?;
        let committer: Signature =
            committer.ok_or_else(|| GraphError::malformed(&oid, "missing committer header"))?;
        let committer_timestamp = committer
            .timestamp()
            .ok_or_else(|| GraphError::malformed(&oid, "committer: missing timestamp"))?;

        Ok(CommitRecord {
            oid,
            tree,
            parents,
            author,
            committer,
            committer_timestamp,
            message: body.trim().to_string(),
        })
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn committer(&self) -> &Signature {
        &self.committer
    }

    pub fn committer_timestamp(&self) -> i64 {
        self.committer_timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
