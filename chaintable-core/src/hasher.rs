//! Key hashing strategies
//!
//! The table only needs a `u64` per key; it reduces that value modulo its
//! bucket count. Two strategies ship:
//! - `CharCodeSum`: additive sum of UTF-16 code units (the default)
//! - `Xxh3`: xxHash3 with a fixed seed, opt-in

use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Maps a string key to a raw hash value
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> u64;
}

/// Sum of the key's UTF-16 code units.
///
/// Positional information is discarded, so anagrams ("cat", "act") always
/// land in the same bucket. Known limitation; use [`Xxh3`] to spread them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharCodeSum;

impl KeyHasher for CharCodeSum {
    #[inline]
    fn hash_key(&self, key: &str) -> u64 {
        key.encode_utf16().map(u64::from).sum()
    }
}

/// xxHash3 over the key's UTF-8 bytes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3 {
    pub seed: u64,
}

impl Xxh3 {
    pub fn with_seed(seed: u64) -> Self {
        Xxh3 { seed }
    }
}

impl KeyHasher for Xxh3 {
    #[inline(always)]
    fn hash_key(&self, key: &str) -> u64 {
        xxh3_64_with_seed(key.as_bytes(), self.seed)
    }
}

/// Hasher selection as it appears in [`TableConfig`](crate::TableConfig)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HasherKind {
    #[default]
    CharCodeSum,
    Xxh3 {
        #[serde(default)]
        seed: u64,
    },
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HasherKind::CharCodeSum => write!(f, "char_code_sum"),
            HasherKind::Xxh3 { seed } => write!(f, "xxh3(seed={})", seed),
        }
    }
}

/// Runtime-selected hasher, built from a [`HasherKind`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DynHasher(HasherKind);

impl DynHasher {
    pub fn new(kind: HasherKind) -> Self {
        DynHasher(kind)
    }

    pub fn kind(&self) -> HasherKind {
        self.0
    }
}

impl From<HasherKind> for DynHasher {
    fn from(kind: HasherKind) -> Self {
        DynHasher(kind)
    }
}

impl KeyHasher for DynHasher {
    fn hash_key(&self, key: &str) -> u64 {
        match self.0 {
            HasherKind::CharCodeSum => CharCodeSum.hash_key(key),
            HasherKind::Xxh3 { seed } => Xxh3::with_seed(seed).hash_key(key),
        }
    }
}
