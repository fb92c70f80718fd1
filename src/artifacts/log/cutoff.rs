use crate::errors::{GraphError, Result};
use chrono::NaiveDate;
use std::str::FromStr;

/// Exclusive upper bound on committer time, in UTC epoch seconds
///
/// A commit passes when its committer timestamp is strictly before the
/// cutoff; the timezone offset recorded in the commit plays no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutoff(i64);

impl Cutoff {
    pub fn from_timestamp(timestamp: i64) -> Self {
        Cutoff(timestamp)
    }

    /// Midnight UTC at the start of a `YYYY-MM-DD` date
    pub fn parse_date(date: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| GraphError::InvalidDate(date.to_string()))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| GraphError::InvalidDate(date.to_string()))?;

        Ok(Cutoff(midnight.and_utc().timestamp()))
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }

    pub fn admits(&self, timestamp: i64) -> bool {
        timestamp < self.0
    }
}

impl FromStr for Cutoff {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Cutoff::parse_date(s)
    }
}
