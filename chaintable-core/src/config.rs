//! Table construction settings

use crate::error::TableError;
use crate::hasher::HasherKind;
use serde::{Deserialize, Serialize};

/// Bucket count used when none is given
pub const DEFAULT_LIMIT: usize = 14;

/// Settings for building a [`HashTable`](crate::HashTable)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of buckets, fixed for the table's lifetime
    pub limit: usize,

    /// Key hashing strategy
    pub hasher: HasherKind,
}

impl TableConfig {
    pub fn new(limit: usize) -> Self {
        TableConfig {
            limit,
            ..Self::default()
        }
    }

    pub fn with_hasher(mut self, hasher: HasherKind) -> Self {
        self.hasher = hasher;
        self
    }

    /// Reject settings no table can be built from
    pub fn validate(&self) -> Result<(), TableError> {
        if self.limit == 0 {
            return Err(TableError::InvalidLimit { limit: self.limit });
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            limit: DEFAULT_LIMIT,
            hasher: HasherKind::CharCodeSum,
        }
    }
}
