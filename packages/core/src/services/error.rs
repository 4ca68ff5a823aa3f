//! Collection Layer Error Types
//!
//! This module defines error types for collection operations, covering
//! lookup failures, placement rule violations, and rank generation failures
//! bubbled up from the ordering engine.

use thiserror::Error;

use crate::ordering::RankError;

/// Errors that can occur during collection operations
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Referenced collection scope does not exist
    #[error("Collection scope not found: {scope}")]
    ScopeNotFound { scope: String },

    /// Referenced entry does not exist in the scope
    #[error("Entry '{id}' not found in scope '{scope}'")]
    EntryNotFound { scope: String, id: String },

    /// An entry with this id already exists in the scope
    #[error("Entry '{id}' already exists in scope '{scope}'")]
    DuplicateEntry { scope: String, id: String },

    /// An entry cannot be positioned relative to itself
    #[error("Entry '{id}' cannot be positioned relative to itself")]
    SelfReference { id: String },

    /// A rebalance did not free a midpoint for the failing insertion
    ///
    /// The scope was rebalanced and the placement retried once, and the
    /// retry still found no free midpoint. The rank length limit is too
    /// small for a collection of this size; treat as a configuration error.
    #[error("Rebalance of scope '{scope}' freed no midpoint for {count} entries; the rank length limit is too small")]
    RebalanceIneffective { scope: String, count: usize },

    /// Rank generation failed
    #[error("Rank generation failed: {0}")]
    Rank(#[from] RankError),
}

impl CollectionError {
    /// Create a ScopeNotFound error
    pub fn scope_not_found(scope: impl Into<String>) -> Self {
        Self::ScopeNotFound {
            scope: scope.into(),
        }
    }

    /// Create an EntryNotFound error
    pub fn entry_not_found(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self::EntryNotFound {
            scope: scope.into(),
            id: id.into(),
        }
    }

    /// Create a DuplicateEntry error
    pub fn duplicate_entry(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            scope: scope.into(),
            id: id.into(),
        }
    }

    /// Create a SelfReference error
    pub fn self_reference(id: impl Into<String>) -> Self {
        Self::SelfReference { id: id.into() }
    }

    /// Create a RebalanceIneffective error
    pub fn rebalance_ineffective(scope: impl Into<String>, count: usize) -> Self {
        Self::RebalanceIneffective {
            scope: scope.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_not_found_message() {
        let err = CollectionError::scope_not_found("messages");
        assert!(matches!(err, CollectionError::ScopeNotFound { .. }));
        assert_eq!(format!("{}", err), "Collection scope not found: messages");
    }

    #[test]
    fn test_entry_not_found_message() {
        let err = CollectionError::entry_not_found("messages", "msg-9");
        assert_eq!(
            format!("{}", err),
            "Entry 'msg-9' not found in scope 'messages'"
        );
    }

    #[test]
    fn test_duplicate_entry_message() {
        let err = CollectionError::duplicate_entry("pairs", "pair-1");
        assert_eq!(
            format!("{}", err),
            "Entry 'pair-1' already exists in scope 'pairs'"
        );
    }

    #[test]
    fn test_self_reference_message() {
        let err = CollectionError::self_reference("msg-3");
        assert_eq!(
            format!("{}", err),
            "Entry 'msg-3' cannot be positioned relative to itself"
        );
    }

    #[test]
    fn test_rank_error_is_wrapped() {
        let err = CollectionError::from(RankError::precision_exhausted());
        assert!(matches!(err, CollectionError::Rank(_)));
    }
}
