//! Validated Rank Type
//!
//! A rank is the opaque string key that fixes an entry's position inside one
//! collection scope. Ranks are ordered by plain byte-wise comparison and are
//! only ever produced by the ordering engine; this module makes sure nothing
//! else in the system (or in persisted data read back from a store) can
//! smuggle in a malformed key.
//!
//! # Canonical form
//!
//! A valid rank is a non-empty string of at most [`MAX_RANK_LEN`] alphabet
//! symbols that does not end in the minimum symbol `'0'`. The trailing-`'0'`
//! rule is load-bearing: a key like `"i0"` sits immediately above `"i"` with
//! no expressible midpoint between them, so allowing it would let a single
//! stored value wedge the midpoint generator. The generator itself never
//! emits such keys and the rebalancer strips them, so the rule only rejects
//! externally constructed input.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ordering::alphabet::{self, DEFAULT_RANK, MAX_RANK_LEN, MIN_SYMBOL};

/// Validation errors for rank construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Rank string is empty")]
    EmptyRank,

    #[error("Rank is {len} symbols long, maximum is {max}")]
    RankTooLong { len: usize, max: usize },

    #[error("Invalid rank symbol: '{symbol}'")]
    InvalidSymbol { symbol: char },

    #[error("Rank must not end with the minimum symbol '0'")]
    TrailingMinSymbol,
}

/// Opaque, totally-ordered string key for an entry's position in a collection.
///
/// Ranks compare byte-wise, which matches the alphabet's ordinal order, so a
/// store can sort entries with a plain binary `ORDER BY rank`. The inner
/// string is immutable; a reorder or rebalance supplants the whole value.
///
/// # Examples
///
/// ```rust
/// use curator_core::models::Rank;
///
/// let lo = Rank::new("i").unwrap();
/// let hi = Rank::new("j").unwrap();
/// assert!(lo < hi);
///
/// // Strings outside the alphabet are rejected.
/// assert!(Rank::new("I").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank(String);

impl Rank {
    /// Validate and wrap a rank string.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the string is empty, longer than
    /// [`MAX_RANK_LEN`], contains a symbol outside the alphabet, or ends in
    /// the minimum symbol.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyRank);
        }
        if value.len() > MAX_RANK_LEN {
            return Err(ValidationError::RankTooLong {
                len: value.len(),
                max: MAX_RANK_LEN,
            });
        }
        if let Some(bad) = value.bytes().find(|symbol| !alphabet::contains(*symbol)) {
            return Err(ValidationError::InvalidSymbol {
                symbol: bad as char,
            });
        }
        if value.ends_with(MIN_SYMBOL) {
            return Err(ValidationError::TrailingMinSymbol);
        }
        Ok(Self(value))
    }

    /// The rank string as a plain `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Engine-internal constructor for symbol sequences the generator built.
    /// The generator upholds the canonical-form invariants itself.
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        debug_assert!(!symbols.is_empty() && symbols.len() <= MAX_RANK_LEN);
        debug_assert!(symbols.iter().all(|symbol| alphabet::contains(*symbol)));
        debug_assert!(symbols.last() != Some(&b'0'));
        Self(symbols.into_iter().map(char::from).collect())
    }
}

impl Default for Rank {
    /// The rank assigned to the first entry of an empty collection.
    fn default() -> Self {
        Self(DEFAULT_RANK.to_string())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Rank {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Rank {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Rank {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}
