//! Midpoint Generator
//!
//! The core insertion primitive: given zero, one, or two bounding ranks,
//! compute a new rank strictly between them. Insertion never renumbers the
//! neighbors; when the bounds leave no room at the current length, the new
//! key simply grows one symbol longer.
//!
//! # Algorithm
//!
//! The lower bound is read as a sequence of symbol indices padded with `0`
//! past its end; the upper bound is padded with `ALPHABET_SIZE` (one past the
//! largest symbol). Positions are scanned left to right:
//!
//! - A gap of two or more at the current position yields the midpoint symbol
//!   and the scan stops.
//! - Adjacent or equal indices leave no room, so the lower symbol is emitted
//!   and the scan moves one position right.
//! - If no position resolves within `MAX_RANK_LEN` symbols, the key space
//!   between the bounds is exhausted and the scan fails instead of growing
//!   further.

use crate::models::Rank;

use super::alphabet::{self, ALPHABET_SIZE, MAX_RANK_LEN};
use super::error::RankError;

/// Produce a rank strictly greater than `lo` and strictly less than `hi`.
///
/// `None` bounds are open ends: `(None, Some(hi))` places before everything,
/// `(Some(lo), None)` places after everything, and `(None, None)` yields the
/// default rank for the first entry of an empty collection.
///
/// # Errors
///
/// - [`RankError::InvalidRange`] if both bounds are given and `lo >= hi`.
/// - [`RankError::PrecisionExhausted`] if no midpoint exists within
///   `MAX_RANK_LEN` symbols; the collection must be rebalanced before
///   retrying.
///
/// # Examples
///
/// ```rust
/// use curator_core::models::Rank;
/// use curator_core::ordering::generate_between;
///
/// let lo = Rank::new("i").unwrap();
/// let hi = Rank::new("j").unwrap();
///
/// // Adjacent one-symbol ranks force a two-symbol midpoint.
/// let mid = generate_between(Some(&lo), Some(&hi)).unwrap();
/// assert_eq!(mid.as_str(), "ii");
/// assert!(lo < mid && mid < hi);
/// ```
pub fn generate_between(lo: Option<&Rank>, hi: Option<&Rank>) -> Result<Rank, RankError> {
    if let (Some(lo), Some(hi)) = (lo, hi) {
        if lo >= hi {
            return Err(RankError::invalid_range(lo.clone(), hi.clone()));
        }
    }
    if lo.is_none() && hi.is_none() {
        return Ok(Rank::default());
    }

    let lo_symbols = lo.map(|rank| rank.as_str().as_bytes()).unwrap_or(&[]);
    let hi_symbols = hi.map(|rank| rank.as_str().as_bytes()).unwrap_or(&[]);

    let mut result = Vec::with_capacity(MAX_RANK_LEN);
    for position in 0..MAX_RANK_LEN {
        let lo_val = lo_symbols
            .get(position)
            .map(|&symbol| alphabet::index_of(symbol))
            .unwrap_or(0);
        let hi_val = hi_symbols
            .get(position)
            .map(|&symbol| alphabet::index_of(symbol))
            .unwrap_or(ALPHABET_SIZE);

        if hi_val > lo_val + 1 {
            // A free integer exists at this position; the midpoint symbol
            // completes the result.
            result.push(alphabet::symbol_at((lo_val + hi_val) / 2));
            return Ok(Rank::from_symbols(result));
        }

        // No room at this resolution; keep the lower symbol and descend.
        result.push(alphabet::symbol_at(lo_val));
    }

    Err(RankError::precision_exhausted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::alphabet::DEFAULT_RANK;

    fn rank(value: &str) -> Rank {
        Rank::new(value).unwrap()
    }

    #[test]
    fn test_empty_collection_gets_default_rank() {
        assert_eq!(generate_between(None, None).unwrap().as_str(), DEFAULT_RANK);
    }

    #[test]
    fn test_append_after_single_entry() {
        let result = generate_between(Some(&rank("i")), None).unwrap();
        assert_eq!(result.as_str(), "r");
    }

    #[test]
    fn test_prepend_before_single_entry() {
        let result = generate_between(None, Some(&rank("i"))).unwrap();
        assert!(result < rank("i"));
        assert_eq!(result.as_str().len(), 1);
    }

    #[test]
    fn test_adjacent_symbols_grow_one_position() {
        let result = generate_between(Some(&rank("i")), Some(&rank("j"))).unwrap();
        assert_eq!(result.as_str(), "ii");
    }

    #[test]
    fn test_between_with_shared_prefix() {
        let lo = rank("az");
        let hi = rank("b");
        let result = generate_between(Some(&lo), Some(&hi)).unwrap();
        assert!(lo < result && result < hi);
    }

    #[test]
    fn test_upper_bound_stops_binding_after_divergence() {
        // Once the result drops below the upper bound's first symbol, later
        // upper-bound symbols no longer constrain it.
        let lo = rank("0z");
        let hi = rank("11");
        let result = generate_between(Some(&lo), Some(&hi)).unwrap();
        assert!(lo < result && result < hi);
    }

    #[test]
    fn test_bound_with_interior_min_symbol() {
        let lo = rank("i");
        let hi = rank("i1");
        let result = generate_between(Some(&lo), Some(&hi)).unwrap();
        assert!(lo < result && result < hi);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let err = generate_between(Some(&rank("m")), Some(&rank("m"))).unwrap_err();
        assert!(matches!(err, RankError::InvalidRange { .. }));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = generate_between(Some(&rank("j")), Some(&rank("i"))).unwrap_err();
        assert!(matches!(err, RankError::InvalidRange { .. }));
    }

    #[test]
    fn test_precision_exhaustion_at_length_limit() {
        // A lower bound of MAX_RANK_LEN 'z' symbols leaves no position with
        // room below the open upper end.
        let lo = rank(&"z".repeat(MAX_RANK_LEN));
        let err = generate_between(Some(&lo), None).unwrap_err();
        assert!(matches!(err, RankError::PrecisionExhausted { .. }));
    }

    #[test]
    fn test_result_never_exceeds_length_limit() {
        let lo = rank(&"z".repeat(MAX_RANK_LEN - 1));
        let result = generate_between(Some(&lo), None).unwrap();
        assert_eq!(result.as_str().len(), MAX_RANK_LEN);
        assert!(result > lo);
    }
}
