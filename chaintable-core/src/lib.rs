//! Chained hash table - fixed-size bucket array with separate chaining
//!
//! Core library providing:
//! - String-keyed table with set/get/has/remove/clear/values
//! - Char-code-sum hashing (default) or xxHash3 (opt-in)
//! - Serde-loadable construction settings
//! - A coarse-locked shared handle for multi-threaded owners

pub mod config;
pub mod error;
pub mod hasher;
pub mod hashtable;
pub mod shared;

pub use config::{TableConfig, DEFAULT_LIMIT};
pub use error::TableError;
pub use hasher::{CharCodeSum, DynHasher, HasherKind, KeyHasher, Xxh3};
pub use hashtable::{BucketReport, Entry, HashTable};
pub use shared::SharedHashTable;

#[cfg(test)]
mod tests;
