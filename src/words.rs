//! Uniform word selection
//!
//! A [`WordSource`] pairs an immutable [`WordList`] with a secure
//! [`EntropySource`] and draws words from it one at a time. Each draw is
//! independent, so a single source may serve any number of callers.

pub mod entropy;
pub mod word_list;

use std::sync::LazyLock;

use tracing::instrument;

pub use entropy::{EntropySource, OsEntropy};
pub use word_list::WordList;

use crate::Result;

static ENGLISH_SOURCE: LazyLock<WordSource<'static>> =
    LazyLock::new(|| WordSource::new(WordList::english().clone()));

/// Draws words uniformly at random from a fixed list
#[derive(Debug, Clone)]
pub struct WordSource<'w, R = OsEntropy> {
    list: WordList<'w>,
    entropy: R,
    /// `list.len()` as the draw bound; validated by `WordList::new`
    bound: u32,
}

impl<'w> WordSource<'w> {
    /// Creates a source drawing from `list` with the operating system CSPRNG
    pub fn new(list: WordList<'w>) -> Self {
        Self::with_entropy(list, OsEntropy)
    }
}

impl WordSource<'static> {
    /// The shared source over the embedded English list
    pub fn english() -> &'static WordSource<'static> {
        &ENGLISH_SOURCE
    }
}

impl<'w, R: EntropySource> WordSource<'w, R> {
    /// Creates a source drawing from `list` with a custom entropy source
    pub fn with_entropy(list: WordList<'w>, entropy: R) -> Self {
        let bound = u32::try_from(list.len()).unwrap_or(u32::MAX);
        Self {
            list,
            entropy,
            bound,
        }
    }

    /// The list words are drawn from
    pub fn list(&self) -> &WordList<'w> {
        &self.list
    }

    /// Returns one word chosen uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `Error::RandomnessUnavailable` if the entropy source fails.
    pub fn draw_word(&self) -> Result<&'w str> {
        let index = entropy::uniform_index(&self.entropy, self.bound)?;
        Ok(self
            .list
            .get(index as usize)
            .unwrap_or_else(|| unreachable!("index {index} drawn below the list length")))
    }

    /// Returns `n` independently drawn words in draw order
    ///
    /// Drawing zero words consumes no randomness.
    ///
    /// # Errors
    ///
    /// Returns the first `Error::RandomnessUnavailable`; words drawn before the
    /// failure are discarded.
    #[instrument(level = "trace", skip(self))]
    pub fn draw_words(&self, n: usize) -> Result<Vec<&'w str>> {
        (0..n).map(|_| self.draw_word()).collect()
    }
}
