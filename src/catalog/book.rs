use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a book, assigned by the store.
///
/// Ids come from a monotonically increasing counter rather than a time
/// source, so they stay unique under rapid succession and deterministic
/// in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog record. Only `is_issued` changes after creation; title,
/// author and isbn are immutable once added (no edit operation exists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// May be empty; the UI shows "No ISBN" in that case.
    pub isbn: String,
    pub is_issued: bool,
    pub created_at: DateTime<Utc>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        !self.is_issued
    }
}
