//! # Wordphrase
//!
//! Generates memorable random passphrases. Words are drawn uniformly from an
//! embedded list of 8192 English words using the operating system's secure
//! random source, giving 13 bits of entropy per word, then joined according
//! to a [`GeneratorConfig`].
//!
//! ```no_run
//! let config = wordphrase::GeneratorConfig {
//!     word_count: 4,
//!     separator: "-".to_string(),
//!     ..Default::default()
//! };
//! let phrase = wordphrase::passphrase(&config)?;
//! # Ok::<(), wordphrase::Error>(())
//! ```

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod constants;
mod error;
pub mod phrase;
pub mod words;

pub use error::{Error, Result};
pub use phrase::{ConfigError, GeneratorConfig, PhraseGenerator};
pub use words::{EntropySource, OsEntropy, WordList, WordSource};

/// Returns a random word from the embedded English list
///
/// # Errors
///
/// Returns `Error::RandomnessUnavailable` if the secure random source fails.
pub fn word() -> Result<&'static str> {
    WordSource::english().draw_word()
}

/// Returns `n` random words from the embedded English list
///
/// # Errors
///
/// Returns `Error::RandomnessUnavailable` if the secure random source fails.
pub fn words(n: usize) -> Result<Vec<&'static str>> {
    WordSource::english().draw_words(n)
}

/// Returns a random passphrase from the embedded English list in the format
/// given by `config`
///
/// # Errors
///
/// Returns `Error::RandomnessUnavailable` if the secure random source fails.
pub fn passphrase(config: &GeneratorConfig) -> Result<String> {
    config.passphrase()
}
