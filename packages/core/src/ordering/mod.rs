//! Rank Ordering Engine
//!
//! Fractional indexing over a fixed symbol alphabet: every entry in a
//! collection scope holds a sortable string key, and inserting between any
//! two neighbors mints a new key without renumbering anything else. When
//! repeated insertions at the same point wear the key space too thin, the
//! rebalancer computes a fresh, evenly spaced assignment that preserves the
//! order.
//!
//! The engine is synchronous and pure: every operation reads its arguments,
//! allocates a fresh result, and holds no state between calls. Cross-call
//! consistency is the caller's job — two writers racing the same neighbor
//! pair will mint the same key, so rank mutations must be serialized per
//! collection scope (see [`services`](crate::services) for the reference
//! single-owner layer).
//!
//! # Components
//!
//! - [`alphabet`] - the ordered symbol set and its codec
//! - [`generate_between`] - midpoint insertion primitive
//! - [`needs_rebalance`] / [`rebalance`] - key-space repair
//! - [`RankManager`] - snapshot façade combining check and repair

pub mod alphabet;
mod error;
mod manager;
mod midpoint;
mod rebalance;

pub use error::RankError;
pub use manager::RankManager;
pub use midpoint::generate_between;
pub use rebalance::{needs_rebalance, rebalance, REBALANCE_HEADROOM};
