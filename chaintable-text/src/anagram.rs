//! Anagram grouping using the chained hash table

use chaintable_core::{HashTable, TableError};

/// Words grouped by their sorted characters
pub struct AnagramGroups {
    /// Sorted characters → words in the order they were added
    pub(crate) table: HashTable<Vec<String>>,
}

impl AnagramGroups {
    /// Create an empty grouping over `limit` buckets
    pub fn new(limit: usize) -> Result<Self, TableError> {
        Ok(AnagramGroups {
            table: HashTable::new(limit)?,
        })
    }

    /// Canonical form shared by all anagrams of `word`
    pub fn signature(word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }

    /// Add a word to its anagram group
    pub fn add(&mut self, word: impl Into<String>) {
        let word = word.into();
        let signature = Self::signature(&word);

        if let Some(group) = self.table.get_mut(&signature) {
            group.push(word);
        } else {
            self.table.set(signature, vec![word]);
        }
    }

    /// Group containing `word`'s anagrams, if any were added
    pub fn group_of(&self, word: &str) -> Option<&[String]> {
        self.table.get(&Self::signature(word)).map(Vec::as_slice)
    }

    /// All groups, in table order
    pub fn groups(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.table.values().map(Vec::as_slice)
    }

    /// Number of distinct groups
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for AnagramGroups {
    fn default() -> Self {
        AnagramGroups {
            table: HashTable::default(),
        }
    }
}

impl<S: Into<String>> Extend<S> for AnagramGroups {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.add(word);
        }
    }
}

/// Group `words` into anagram classes
pub fn group_anagrams<I, S>(words: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups = AnagramGroups::default();
    groups.extend(words);
    tracing::debug!(groups = groups.len(), "grouped anagrams");
    groups.groups().map(<[String]>::to_vec).collect()
}
