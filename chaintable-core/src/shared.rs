//! Coarse-locked handle for sharing one table between threads
//!
//! Bucket presence toggling and in-place overwrites are not safe to
//! interleave, so every operation holds a single table-wide lock.

use crate::error::TableError;
use crate::hasher::{CharCodeSum, KeyHasher};
use crate::hashtable::HashTable;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to a table guarded by one mutex
pub struct SharedHashTable<V, H = CharCodeSum> {
    inner: Arc<Mutex<HashTable<V, H>>>,
}

impl<V, H> Clone for SharedHashTable<V, H> {
    fn clone(&self) -> Self {
        SharedHashTable {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> SharedHashTable<V, CharCodeSum> {
    pub fn new(limit: usize) -> Result<Self, TableError> {
        HashTable::new(limit).map(Self::from)
    }
}

impl<V, H> From<HashTable<V, H>> for SharedHashTable<V, H> {
    fn from(table: HashTable<V, H>) -> Self {
        SharedHashTable {
            inner: Arc::new(Mutex::new(table)),
        }
    }
}

impl<V, H> SharedHashTable<V, H>
where
    H: KeyHasher,
{
    // Operations are total, so a panic elsewhere never leaves the table
    // half-mutated; recover the guard instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, HashTable<V, H>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the table
    pub fn with<R>(&self, f: impl FnOnce(&mut HashTable<V, H>) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn set(&self, key: impl Into<String>, value: V) -> Option<V> {
        self.lock().set(key, value)
    }

    /// Clone of the value stored for `key`
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    pub fn has(&self, key: &str) -> bool {
        self.lock().has(key)
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.lock().remove(key)
    }

    pub fn clear(&self) {
        self.lock().clear()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of all values, in table iteration order
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.lock().values().cloned().collect()
    }
}
