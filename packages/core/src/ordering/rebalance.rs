//! Rebalancer
//!
//! Detects when a collection's key space has worn too thin for further
//! insertions and computes a fresh, evenly spaced assignment that preserves
//! the existing order. A rebalance is the only operation that replaces ranks
//! in bulk; everything else in the engine touches one key at a time.

use std::collections::HashMap;

use crate::models::Rank;

use super::alphabet::{self, ALPHABET_SIZE, MAX_RANK_LEN};
use super::error::RankError;
use super::midpoint::generate_between;

/// Capacity headroom for the rebalanced key space: the number of expressible
/// keys at the chosen length is at least this multiple of the collection
/// size, which delays the next rebalance.
pub const REBALANCE_HEADROOM: u128 = 4;

/// True if any adjacent pair of ranks can no longer be bisected within the
/// maximum rank length, or if any rank is duplicated.
///
/// The input does not have to be sorted; a copy is sorted internally.
pub fn needs_rebalance(ranks: &[Rank]) -> bool {
    if ranks.len() < 2 {
        return false;
    }

    let mut sorted: Vec<&Rank> = ranks.iter().collect();
    sorted.sort();

    sorted.windows(2).any(|pair| {
        if pair[0] == pair[1] {
            // Zero gap: the uniqueness invariant is already broken.
            return true;
        }
        matches!(
            generate_between(Some(pair[0]), Some(pair[1])),
            Err(RankError::PrecisionExhausted { .. })
        )
    })
}

/// Compute a fresh, evenly spaced rank assignment for a whole collection.
///
/// The input is sorted ascending (fixing the order to preserve) and each
/// entry is mapped to a slot in a key space whose capacity exceeds the
/// collection size by at least [`REBALANCE_HEADROOM`]. The returned map holds
/// only the `(old, new)` pairs that actually changed; entries already sitting
/// at their target slot are omitted. Output order, compared byte-wise, is
/// identical to input order.
///
/// Equal input ranks are collapsed to a single mapping entry: entities that
/// share a rank are indistinguishable here, and the caller decides which one
/// keeps the slot.
pub fn rebalance(ranks: &[Rank]) -> HashMap<Rank, Rank> {
    let mut sorted: Vec<&Rank> = ranks.iter().collect();
    sorted.sort();
    sorted.dedup();

    let count = sorted.len();
    if count == 0 {
        return HashMap::new();
    }

    let len = target_length(count);
    let capacity = (ALPHABET_SIZE as u128).pow(len as u32);
    let slots = count as u128 + 1;

    let mut mapping = HashMap::new();
    for (i, old) in sorted.into_iter().enumerate() {
        let value = (i as u128 + 1) * capacity / slots;
        let new = encode(value, len);
        if new != *old {
            mapping.insert(old.clone(), new);
        }
    }

    tracing::debug!(
        "Rebalanced {} ranks at length {} ({} changed)",
        count,
        len,
        mapping.len()
    );
    mapping
}

/// Smallest rank length whose key space fits the collection with headroom.
fn target_length(count: usize) -> usize {
    let needed = REBALANCE_HEADROOM * (count as u128 + 1);
    let mut len = 1;
    let mut capacity = ALPHABET_SIZE as u128;
    while capacity < needed && len < MAX_RANK_LEN {
        len += 1;
        capacity *= ALPHABET_SIZE as u128;
    }
    len
}

/// Encode `value` in base-`ALPHABET_SIZE`, zero-padded to `len` symbols, then
/// reduced to canonical form by stripping trailing minimum symbols. The slot
/// values are always >= REBALANCE_HEADROOM, so at least one symbol survives.
fn encode(mut value: u128, len: usize) -> Rank {
    let mut symbols = vec![b'0'; len];
    for slot in symbols.iter_mut().rev() {
        *slot = alphabet::symbol_at((value % ALPHABET_SIZE as u128) as usize);
        value /= ALPHABET_SIZE as u128;
    }
    while symbols.last() == Some(&b'0') {
        symbols.pop();
    }
    Rank::from_symbols(symbols)
}
