//! Text utilities built on the chained hash table
//!
//! Provides:
//! - Anagram grouping keyed by sorted letters
//! - Case-insensitive word frequency counting
//! - Name to phone-number directories parsed from `name:number` lines

pub mod anagram;
pub mod directory;
pub mod word_count;

pub use anagram::{group_anagrams, AnagramGroups};
pub use directory::{DirectoryError, PhoneDirectory};
pub use word_count::{word_instance_count, WordCounter};
