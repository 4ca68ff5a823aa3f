//! Curator Core Ordering Layer
//!
//! This crate provides the rank-based ordering engine behind Curator's
//! admin-curated, user-reorderable collections (curated message lists,
//! experiment pair lists), plus the reference collection layer that drives
//! it.
//!
//! # Architecture
//!
//! - **Opaque ranks**: every entry holds a validated string key; ascending
//!   byte-wise comparison of keys is the collection order
//! - **Fractional insertion**: placing an entry between two neighbors mints
//!   a key between theirs — nothing else is renumbered
//! - **Explicit repair**: when repeated insertions wear a key space too
//!   thin, the whole scope is reassigned evenly spaced keys in one
//!   order-preserving pass
//! - **Stateless engine**: every engine call is pure; callers own
//!   persistence and write serialization
//!
//! # Modules
//!
//! - [`models`] - Validated data types (`Rank`, `OrderedEntry`)
//! - [`ordering`] - Alphabet codec, midpoint generator, rebalancer, `RankManager`
//! - [`services`] - Reference collection layer (`CollectionSet`)

pub mod models;
pub mod ordering;
pub mod services;

// Re-export commonly used types
pub use models::*;
pub use ordering::{generate_between, needs_rebalance, rebalance, RankError, RankManager};
pub use services::*;
