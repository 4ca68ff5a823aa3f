//! Ordered Collection Layer
//!
//! A reference implementation of the layer that sits between callers and the
//! ordering engine: named collection scopes, each holding independently
//! ordered entries. It resolves entry ids to neighbor ranks, mints new ranks
//! through the midpoint generator, and repairs a scope's key space when
//! generation reports exhaustion.
//!
//! # Recovery protocol
//!
//! When a placement fails with precision exhaustion, the scope is rebalanced
//! and the placement retried exactly once with freshly resolved neighbors.
//! A second exhaustion is reported as [`CollectionError::RebalanceIneffective`]
//! and means the rank length limit cannot accommodate the scope's size.
//!
//! # Ownership
//!
//! The set is a plain single-owner structure; it performs no locking of its
//! own. Concurrent writers must serialize rank mutations per scope (a
//! single-writer queue, or optimistic re-validation at commit time) before
//! applying results — two racing writers that resolve the same neighbors
//! would mint the same rank.

use std::collections::HashMap;

use crate::models::{OrderedEntry, Rank};
use crate::ordering::{generate_between, rebalance, RankError, RankManager};

use super::error::CollectionError;

/// Named, independently ordered collections of entries.
///
/// Each scope is a separate key space: ranks are never compared across
/// scopes, and rebalancing one scope leaves every other scope untouched.
///
/// # Examples
///
/// ```rust
/// use curator_core::services::CollectionSet;
///
/// let mut set = CollectionSet::new();
/// let first = set.create_entry("messages", None, None).unwrap();
/// let second = set.create_entry("messages", None, None).unwrap();
///
/// // Move the second entry before the first.
/// set.move_entry("messages", &second.id, None, Some(&first.id)).unwrap();
///
/// let ordered = set.entries_in_order("messages");
/// assert_eq!(ordered[0].id, second.id);
/// assert_eq!(ordered[1].id, first.id);
/// ```
#[derive(Debug, Default)]
pub struct CollectionSet {
    scopes: HashMap<String, HashMap<String, OrderedEntry>>,
}

impl CollectionSet {
    /// Create an empty collection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry in a scope, placed before the named entry or appended
    /// at the end when `before_id` is `None`. The scope is created on first
    /// use; a missing id is auto-generated.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::DuplicateEntry`] if the requested id is taken.
    /// - [`CollectionError::EntryNotFound`] if `before_id` names a missing
    ///   entry.
    /// - [`CollectionError::RebalanceIneffective`] if the scope stayed
    ///   unplaceable even after a rebalance.
    pub fn create_entry(
        &mut self,
        scope: &str,
        id: Option<String>,
        before_id: Option<&str>,
    ) -> Result<OrderedEntry, CollectionError> {
        if let Some(requested) = id.as_deref() {
            let taken = self
                .scopes
                .get(scope)
                .map_or(false, |entries| entries.contains_key(requested));
            if taken {
                return Err(CollectionError::duplicate_entry(scope, requested));
            }
        }

        let rank = self.place(scope, None, None, before_id)?;
        let entry = OrderedEntry::new(id, rank);
        self.scopes
            .entry(scope.to_string())
            .or_default()
            .insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    /// Move an entry between the named neighbors: strictly after `after_id`
    /// and strictly before `before_id`. A single named neighbor places the
    /// entry directly next to it; naming neither moves the entry to the end.
    /// Returns the freshly minted rank.
    pub fn move_entry(
        &mut self,
        scope: &str,
        id: &str,
        after_id: Option<&str>,
        before_id: Option<&str>,
    ) -> Result<Rank, CollectionError> {
        if after_id == Some(id) || before_id == Some(id) {
            return Err(CollectionError::self_reference(id));
        }
        let entries = self
            .scopes
            .get(scope)
            .ok_or_else(|| CollectionError::scope_not_found(scope))?;
        if !entries.contains_key(id) {
            return Err(CollectionError::entry_not_found(scope, id));
        }

        let rank = self.place(scope, Some(id), after_id, before_id)?;
        if let Some(entry) = self
            .scopes
            .get_mut(scope)
            .and_then(|entries| entries.get_mut(id))
        {
            entry.set_rank(rank.clone());
        }
        Ok(rank)
    }

    /// Remove an entry from a scope, returning it.
    pub fn remove_entry(
        &mut self,
        scope: &str,
        id: &str,
    ) -> Result<OrderedEntry, CollectionError> {
        let entries = self
            .scopes
            .get_mut(scope)
            .ok_or_else(|| CollectionError::scope_not_found(scope))?;
        entries
            .remove(id)
            .ok_or_else(|| CollectionError::entry_not_found(scope, id))
    }

    /// All entries of a scope in ascending rank order. An unknown scope
    /// yields an empty list.
    pub fn entries_in_order(&self, scope: &str) -> Vec<OrderedEntry> {
        let mut entries: Vec<OrderedEntry> = self
            .scopes
            .get(scope)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default();
        entries.sort_by(|a, b| a.rank.cmp(&b.rank));
        entries
    }

    /// Look up a single entry.
    pub fn get_entry(&self, scope: &str, id: &str) -> Option<&OrderedEntry> {
        self.scopes.get(scope).and_then(|entries| entries.get(id))
    }

    /// Number of entries in a scope.
    pub fn entry_count(&self, scope: &str) -> usize {
        self.scopes.get(scope).map(|entries| entries.len()).unwrap_or(0)
    }

    /// True if the scope holds an entry with this id.
    pub fn contains_entry(&self, scope: &str, id: &str) -> bool {
        self.get_entry(scope, id).is_some()
    }

    /// Snapshot a scope's ranks behind the check-and-repair façade, so
    /// callers can cheaply ask whether the scope needs repair before a batch
    /// of insertions.
    pub fn rank_manager(&self, scope: &str) -> RankManager {
        let ranks: Vec<Rank> = self
            .scopes
            .get(scope)
            .map(|entries| entries.values().map(|entry| entry.rank.clone()).collect())
            .unwrap_or_default();
        RankManager::new(&ranks)
    }

    /// Recompute the whole scope's ranks as a fresh, evenly spaced
    /// assignment and apply the mapping as one in-memory swap — callers can
    /// never observe a partially applied mapping. Returns the number of
    /// entries whose rank changed.
    pub fn rebalance_scope(&mut self, scope: &str) -> Result<usize, CollectionError> {
        let entries = self
            .scopes
            .get_mut(scope)
            .ok_or_else(|| CollectionError::scope_not_found(scope))?;

        let ranks: Vec<Rank> = entries.values().map(|entry| entry.rank.clone()).collect();
        let mapping = rebalance(&ranks);

        let mut changed = 0;
        for entry in entries.values_mut() {
            if let Some(new) = mapping.get(&entry.rank) {
                entry.set_rank(new.clone());
                changed += 1;
            }
        }
        if changed > 0 {
            tracing::debug!(
                "Rebalanced scope '{}': {} of {} entries moved",
                scope,
                changed,
                ranks.len()
            );
        }
        Ok(changed)
    }

    /// Mint a rank for the described placement, rebalancing the scope and
    /// retrying once if the key space is exhausted.
    fn place(
        &mut self,
        scope: &str,
        moving: Option<&str>,
        after_id: Option<&str>,
        before_id: Option<&str>,
    ) -> Result<Rank, CollectionError> {
        match self.try_place(scope, moving, after_id, before_id) {
            Err(CollectionError::Rank(RankError::PrecisionExhausted { .. })) => {
                tracing::warn!(
                    "Midpoint precision exhausted in scope '{}'; rebalancing {} entries before retry",
                    scope,
                    self.entry_count(scope)
                );
                self.rebalance_scope(scope)?;
                self.try_place(scope, moving, after_id, before_id)
                    .map_err(|err| match err {
                        CollectionError::Rank(RankError::PrecisionExhausted { .. }) => {
                            CollectionError::rebalance_ineffective(scope, self.entry_count(scope))
                        }
                        other => other,
                    })
            }
            result => result,
        }
    }

    /// Resolve the named neighbors against the current order (excluding the
    /// moving entry, if any) and mint a rank between them.
    fn try_place(
        &self,
        scope: &str,
        moving: Option<&str>,
        after_id: Option<&str>,
        before_id: Option<&str>,
    ) -> Result<Rank, CollectionError> {
        let mut ordered: Vec<&OrderedEntry> = self
            .scopes
            .get(scope)
            .map(|entries| {
                entries
                    .values()
                    .filter(|entry| Some(entry.id.as_str()) != moving)
                    .collect()
            })
            .unwrap_or_default();
        ordered.sort_by(|a, b| a.rank.cmp(&b.rank));

        let position_of = |id: &str| {
            ordered
                .iter()
                .position(|entry| entry.id == id)
                .ok_or_else(|| CollectionError::entry_not_found(scope, id))
        };

        let (lo, hi) = match (after_id, before_id) {
            (None, None) => (ordered.last().map(|entry| &entry.rank), None),
            (Some(after), None) => {
                let index = position_of(after)?;
                (
                    Some(&ordered[index].rank),
                    ordered.get(index + 1).map(|entry| &entry.rank),
                )
            }
            (None, Some(before)) => {
                let index = position_of(before)?;
                (
                    index.checked_sub(1).map(|i| &ordered[i].rank),
                    Some(&ordered[index].rank),
                )
            }
            (Some(after), Some(before)) => {
                let after_index = position_of(after)?;
                let before_index = position_of(before)?;
                (
                    Some(&ordered[after_index].rank),
                    Some(&ordered[before_index].rank),
                )
            }
        };

        Ok(generate_between(lo, hi)?)
    }
}
