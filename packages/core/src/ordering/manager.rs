//! Rank Manager Façade
//!
//! A stateless-per-call snapshot of one collection scope's ranks, combining
//! the "does this need repair" check and the repair computation behind a
//! single call. Callers ask it "do I need to fix the whole collection before
//! inserting" instead of wiring the check-then-act sequence themselves.

use std::collections::HashMap;

use crate::models::Rank;

use super::rebalance::{needs_rebalance, rebalance};

/// Immutable snapshot of a collection scope's current ranks.
///
/// The manager is a pure function of its snapshot: calling
/// [`rebalance_if_needed`](RankManager::rebalance_if_needed) twice on the
/// same snapshot returns the same answer and has no side effects.
///
/// # Examples
///
/// ```rust
/// use curator_core::models::Rank;
/// use curator_core::ordering::RankManager;
///
/// let ranks = vec![Rank::new("b").unwrap(), Rank::new("y").unwrap()];
/// let manager = RankManager::new(&ranks);
/// assert!(manager.rebalance_if_needed().is_none());
/// ```
pub struct RankManager {
    ranks: Vec<Rank>,
}

impl RankManager {
    /// Snapshot the current ranks of one collection scope.
    pub fn new(ranks: &[Rank]) -> Self {
        Self {
            ranks: ranks.to_vec(),
        }
    }

    /// Return the full rebalance mapping if the snapshot needs one, `None`
    /// otherwise.
    pub fn rebalance_if_needed(&self) -> Option<HashMap<Rank, Rank>> {
        if !needs_rebalance(&self.ranks) {
            return None;
        }
        Some(rebalance(&self.ranks))
    }

    /// The snapshotted ranks.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}
