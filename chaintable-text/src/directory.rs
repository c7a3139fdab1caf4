//! Name → phone number directory

use chaintable_core::{HashTable, TableError};

/// Errors raised while building a directory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("malformed directory entry {entry:?}: expected `name:number`")]
    MalformedEntry { entry: String },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Phone numbers keyed by name
pub struct PhoneDirectory {
    numbers: HashTable<String>,
}

impl PhoneDirectory {
    pub fn new(limit: usize) -> Result<Self, DirectoryError> {
        Ok(PhoneDirectory {
            numbers: HashTable::new(limit)?,
        })
    }

    /// Build a directory from `name:number` lines
    ///
    /// Later entries for the same name replace earlier ones.
    pub fn parse<I, S>(entries: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directory = Self::default();
        for entry in entries {
            directory.insert_entry(entry.as_ref())?;
        }
        Ok(directory)
    }

    /// Add one `name:number` line, split on the first `:`
    pub fn insert_entry(&mut self, entry: &str) -> Result<(), DirectoryError> {
        match entry.split_once(':') {
            Some((name, number)) if !name.trim().is_empty() => {
                self.insert(name.trim(), number.trim());
                Ok(())
            }
            _ => Err(DirectoryError::MalformedEntry {
                entry: entry.to_string(),
            }),
        }
    }

    /// Store `number` under `name`, returning the number it replaced
    pub fn insert(&mut self, name: impl Into<String>, number: impl Into<String>) -> Option<String> {
        let name = name.into();
        let replaced = self.numbers.set(name.as_str(), number.into());
        if replaced.is_some() {
            tracing::debug!(%name, "replaced directory number");
        }
        replaced
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.numbers.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.numbers.has(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.numbers.remove(name)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// `(name, number)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.numbers.iter().map(|(name, number)| (name, number.as_str()))
    }

    /// Log the underlying bucket layout
    pub fn print_table(&self) {
        self.numbers.print_table();
    }

    pub fn table(&self) -> &HashTable<String> {
        &self.numbers
    }
}

impl Default for PhoneDirectory {
    fn default() -> Self {
        PhoneDirectory {
            numbers: HashTable::default(),
        }
    }
}
