//! Separate-chaining hash table over string keys
//!
//! Provides:
//! - A fixed bucket array sized at construction (never resized)
//! - Lazily allocated buckets, collapsed back to absent when emptied
//! - Pluggable key hashing via [`KeyHasher`]
//! - Bucket-by-bucket diagnostics for inspecting collisions

use crate::config::{TableConfig, DEFAULT_LIMIT};
use crate::error::TableError;
use crate::hasher::{CharCodeSum, DynHasher, KeyHasher};
use std::fmt::{self, Debug};

/// Key-value pair stored in a bucket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<V> {
    pub key: String,
    pub value: V,
}

/// Pairs sharing one bucket index, in insertion order
type Bucket<V> = Vec<Entry<V>>;

/// Hash table resolving collisions by separate chaining
#[derive(Clone, Debug)]
pub struct HashTable<V, H = CharCodeSum> {
    /// One slot per bucket index; `None` until the first insert lands there
    pub(crate) buckets: Vec<Option<Bucket<V>>>,

    /// Number of stored pairs across all buckets
    pub(crate) size: usize,

    pub(crate) hasher: H,
}

fn absent_buckets<V>(limit: usize) -> Vec<Option<Bucket<V>>> {
    std::iter::repeat_with(|| None).take(limit).collect()
}

impl<V> HashTable<V, CharCodeSum> {
    /// Create a table with `limit` buckets and the char-code-sum hasher
    pub fn new(limit: usize) -> Result<Self, TableError> {
        Self::with_hasher(limit, CharCodeSum)
    }
}

impl<V> HashTable<V, DynHasher> {
    /// Create a table from validated settings
    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Self::with_hasher(config.limit, DynHasher::new(config.hasher))
    }
}

impl<V, H> HashTable<V, H>
where
    H: KeyHasher,
{
    /// Create a table with `limit` buckets and a custom hasher
    ///
    /// # Errors
    /// [`TableError::InvalidLimit`] when `limit` is zero.
    pub fn with_hasher(limit: usize, hasher: H) -> Result<Self, TableError> {
        if limit == 0 {
            return Err(TableError::InvalidLimit { limit });
        }

        tracing::debug!(
            limit,
            hasher = std::any::type_name::<H>(),
            "created chained hash table"
        );

        Ok(HashTable {
            buckets: absent_buckets(limit),
            size: 0,
            hasher,
        })
    }

    /// Bucket index for `key`: raw hash reduced modulo the bucket count
    #[inline]
    pub fn hash(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Alias of [`hash`](Self::hash)
    pub fn bucket_index(&self, key: &str) -> usize {
        self.hash(key)
    }

    /// Map `key` to `value`
    ///
    /// Overwrites in place when the key is already present and returns the
    /// previous value; otherwise appends to the key's bucket.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let index = self.hash(&key);

        let slot = &mut self.buckets[index];
        match slot {
            Some(bucket) => {
                if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
                    return Some(std::mem::replace(&mut entry.value, value));
                }
                bucket.push(Entry { key, value });
            }
            None => {
                tracing::trace!(index, "allocating bucket");
                *slot = Some(vec![Entry { key, value }]);
            }
        }

        self.size += 1;
        None
    }

    /// Value stored for `key`, if any
    pub fn get(&self, key: &str) -> Option<&V> {
        let bucket = self.buckets[self.hash(key)].as_ref()?;
        bucket
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Mutable access to the value stored for `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.hash(key);
        let bucket = self.buckets[index].as_mut()?;
        bucket
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Whether `key` is present
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value
    ///
    /// A bucket whose only pair is removed goes back to the absent state.
    /// Remaining pairs in a shared bucket keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.hash(key);
        let slot = &mut self.buckets[index];
        let bucket = slot.as_mut()?;

        let removed = if bucket.len() == 1 && bucket[0].key == key {
            tracing::trace!(index, "collapsing bucket");
            slot.take().and_then(|mut bucket| bucket.pop())
        } else {
            let position = bucket.iter().position(|entry| entry.key == key)?;
            Some(bucket.remove(position))
        };

        removed.map(|entry| {
            self.size -= 1;
            entry.value
        })
    }

    /// Drop every bucket; the bucket count is unchanged
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|slot| *slot = None);
        self.size = 0;
    }

    /// All values, in bucket-index order then insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// All pairs, in the same order as [`values`](Self::values)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .flat_map(|bucket| bucket.iter().map(|entry| (entry.key.as_str(), &entry.value)))
    }

    /// Number of stored pairs
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fixed bucket count
    pub fn limit(&self) -> usize {
        self.buckets.len()
    }

    /// Stored pairs per bucket
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Chain length at each bucket index (0 for absent buckets)
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|slot| slot.as_ref().map_or(0, Vec::len))
            .collect()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Per-bucket view of the table, one report per index
    pub fn bucket_report(&self) -> Vec<BucketReport<'_, V>> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, slot)| BucketReport {
                index,
                entries: slot.as_deref(),
            })
            .collect()
    }

    /// Log every bucket at `info` level
    pub fn print_table(&self)
    where
        V: Debug,
    {
        for report in self.bucket_report() {
            tracing::info!("{}", report);
        }
    }
}

impl<V> Default for HashTable<V, CharCodeSum> {
    fn default() -> Self {
        HashTable {
            buckets: absent_buckets(DEFAULT_LIMIT),
            size: 0,
            hasher: CharCodeSum,
        }
    }
}

/// Contents of a single bucket, for diagnostics
#[derive(Clone, Copy, Debug)]
pub struct BucketReport<'a, V> {
    pub index: usize,

    /// `None` when the bucket is absent
    pub entries: Option<&'a [Entry<V>]>,
}

impl<V> BucketReport<'_, V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_none()
    }
}

impl<V: Debug> fmt::Display for BucketReport<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries {
            None => write!(f, "Bucket {} Empty", self.index),
            Some(entries) => {
                write!(f, "Bucket {}: [", self.index)?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({:?}, {:?})", entry.key, entry.value)?;
                }
                write!(f, "]")
            }
        }
    }
}
