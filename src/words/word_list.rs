//! Fixed, ordered word lists

use std::{collections::HashSet, sync::LazyLock};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading a word list
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The list contains no words
    #[error("word list is empty")]
    Empty,
    /// A line in the list contains only whitespace
    #[error("word list has a blank entry on line {line}")]
    Blank {
        /// 1-based line number of the blank entry
        line: usize,
    },
    /// A word appears more than once
    #[error("word list contains {word:?} more than once")]
    Duplicate {
        /// The repeated word
        word: String,
    },
    /// The list has more entries than can be indexed by a 32-bit draw
    #[error("word list is too large")]
    TooLarge,
}

static ENGLISH: LazyLock<WordList<'static>> = LazyLock::new(|| {
    WordList::new(include_str!("../../words/english.txt")).expect("embedded word list is valid")
});

/// An immutable ordered sequence of distinct, non-empty words
///
/// The length is fixed at construction, so every index in `[0, len)` stays
/// valid for the lifetime of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList<'a> {
    words: Vec<&'a str>,
    lookup: HashSet<&'a str>,
}

impl<'a> WordList<'a> {
    /// Parses a word list with one word per line
    ///
    /// Surrounding whitespace on each line is ignored.
    ///
    /// # Errors
    ///
    /// * `Error::Empty` - `data` contains no lines
    /// * `Error::Blank` - a line is empty after trimming
    /// * `Error::Duplicate` - a word is listed twice
    /// * `Error::TooLarge` - more than `u32::MAX` words
    pub fn new(data: &'a str) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for (index, line) in data.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() {
                return Err(Error::Blank { line: index + 1 });
            }
            if !seen.insert(word) {
                return Err(Error::Duplicate {
                    word: word.to_owned(),
                });
            }
            words.push(word);
        }
        if words.is_empty() {
            return Err(Error::Empty);
        }
        if u32::try_from(words.len()).is_err() {
            return Err(Error::TooLarge);
        }
        Ok(Self {
            words,
            lookup: seen,
        })
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, if it is in range
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.words.get(index).copied()
    }

    /// Checks whether `word` is part of the list
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Iterates over the words in list order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }

    /// Bits of entropy contributed by one uniform draw, `log2(len)`
    pub fn entropy_bits(&self) -> f64 {
        (self.words.len() as f64).log2()
    }
}

impl WordList<'static> {
    /// The embedded list of 8192 lowercase English words
    pub fn english() -> &'static WordList<'static> {
        &ENGLISH
    }
}
