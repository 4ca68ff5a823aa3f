//! Ordered Entry Record
//!
//! The record the collection layer keeps per entity: an opaque caller id plus
//! the entity's current rank and bookkeeping timestamps. What the id refers
//! to (a curated message, an experiment pair, a chart slot) is the caller's
//! business; the ordering layer only ever reads and rewrites the rank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Rank;

/// One orderable entity inside a collection scope.
///
/// # Examples
///
/// ```rust
/// use curator_core::models::{OrderedEntry, Rank};
///
/// let entry = OrderedEntry::new(Some("msg-42".to_string()), Rank::default());
/// assert_eq!(entry.id, "msg-42");
/// assert_eq!(entry.rank.as_str(), "i");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedEntry {
    /// Caller-supplied identifier, or an auto-generated UUID
    pub id: String,

    /// Current position key; supplanted on reorder, never mutated in place
    pub rank: Rank,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last rank change
    pub modified_at: DateTime<Utc>,
}

impl OrderedEntry {
    /// Create an entry with the given rank. A missing id is auto-generated
    /// as a UUIDv4 string.
    pub fn new(id: Option<String>, rank: Rank) -> Self {
        let now = Utc::now();
        Self {
            id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            rank,
            created_at: now,
            modified_at: now,
        }
    }

    /// Supplant the entry's rank and touch the modification timestamp.
    pub(crate) fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_generated_id_is_uuid() {
        let entry = OrderedEntry::new(None, Rank::default());
        assert_eq!(entry.id.len(), 36);
        assert!(Uuid::parse_str(&entry.id).is_ok());
    }

    #[test]
    fn test_explicit_id_is_kept() {
        let entry = OrderedEntry::new(Some("pair-7".to_string()), Rank::default());
        assert_eq!(entry.id, "pair-7");
    }

    #[test]
    fn test_set_rank_touches_modified_at() {
        let mut entry = OrderedEntry::new(None, Rank::default());
        let created = entry.modified_at;
        entry.set_rank(Rank::new("r").unwrap());
        assert_eq!(entry.rank.as_str(), "r");
        assert!(entry.modified_at >= created);
    }
}
