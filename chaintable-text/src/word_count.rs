//! Word frequency counting

use chaintable_core::{HashTable, TableError};

/// Case-insensitive word frequencies
pub struct WordCounter {
    counts: HashTable<usize>,
    total: usize,
}

impl WordCounter {
    pub fn new(limit: usize) -> Result<Self, TableError> {
        Ok(WordCounter {
            counts: HashTable::new(limit)?,
            total: 0,
        })
    }

    /// Count every word in `text`
    pub fn from_text(text: &str) -> Self {
        let mut counter = Self::default();
        counter.add_text(text);
        counter
    }

    /// Lower-cased words of `text`; separators are runs of non-word characters
    pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_lowercase)
    }

    pub fn add_text(&mut self, text: &str) {
        for word in Self::tokenize(text) {
            self.add_word(word);
        }
    }

    /// Record one occurrence of an already-normalized word
    fn add_word(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.set(word, 1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `word`, ignoring case
    pub fn count(&self, word: &str) -> usize {
        self.counts
            .get(&word.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.count(word) > 0
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of words seen, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(word, count)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(word, count)| (word, *count))
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        WordCounter {
            counts: HashTable::default(),
            total: 0,
        }
    }
}

/// How many times `word` appears in `text`, ignoring case
pub fn word_instance_count(text: &str, word: &str) -> usize {
    WordCounter::from_text(text).count(word)
}
