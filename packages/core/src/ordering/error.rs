//! Ordering Engine Error Types
//!
//! Every engine failure is an explicit typed error surfaced to the caller;
//! the engine never retries internally and never falls back to a degraded
//! ordering.

use thiserror::Error;

use crate::models::Rank;

use super::alphabet::MAX_RANK_LEN;

/// Errors produced by rank generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Neighbor ranks were passed out of order or identical.
    ///
    /// This is a caller bug: the ids were resolved to ranks in the wrong
    /// order, or the same entry was named twice. Re-resolve the neighbors
    /// and retry.
    #[error("Invalid rank range: '{lo}' must be strictly less than '{hi}'")]
    InvalidRange { lo: Rank, hi: Rank },

    /// No free midpoint exists within the maximum rank length.
    ///
    /// The caller must rebalance the whole collection scope, persist the
    /// mapping, re-resolve the neighbor ranks, and retry once. A second
    /// exhaustion right after a rebalance means the length limit is too
    /// small for the collection and should be treated as fatal.
    #[error("No free midpoint within {max_len} symbols; the collection must be rebalanced")]
    PrecisionExhausted { max_len: usize },
}

impl RankError {
    /// Create an InvalidRange error
    pub fn invalid_range(lo: Rank, hi: Rank) -> Self {
        Self::InvalidRange { lo, hi }
    }

    /// Create a PrecisionExhausted error
    pub fn precision_exhausted() -> Self {
        Self::PrecisionExhausted {
            max_len: MAX_RANK_LEN,
        }
    }
}
