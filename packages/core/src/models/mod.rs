//! Data Models
//!
//! This module contains the validated data structures the ordering layers
//! work with:
//!
//! - `Rank` - opaque, totally-ordered position key (the only way to hold one)
//! - `OrderedEntry` - an orderable entity: caller id, rank, timestamps
//!
//! Rank strings can only be constructed through validation, so a malformed
//! key read back from a store fails loudly instead of corrupting an order.

mod entry;
mod rank;

pub use entry::OrderedEntry;
pub use rank::{Rank, ValidationError};
