//! Passphrase assembly
//!
//! A [`PhraseGenerator`] draws a configured number of words, keeps drawing
//! padding words until the rendered phrase reaches a minimum length, and
//! joins everything with the configured separator, prefix and suffix.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use crate::{
    Result,
    constants::generator::{MAX_AFFIX_LENGTH, MAX_MIN_LENGTH, MAX_WORD_COUNT},
    words::{EntropySource, OsEntropy, WordList, WordSource},
};

/// Errors that can occur while loading a generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not a valid configuration
    #[error("malformed generator config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field is outside its allowed range
    #[error("invalid generator config: {0}")]
    Invalid(#[from] garde::Report),
}

/// Rules for assembling a passphrase
///
/// The default configuration draws no words and renders the empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Number of words drawn before any padding
    #[garde(range(max = MAX_WORD_COUNT))]
    pub word_count: usize,
    /// Minimum rendered length in bytes, prefix and suffix included
    #[garde(range(max = MAX_MIN_LENGTH))]
    pub min_length: usize,
    /// Text placed before the first word
    #[garde(length(chars, max = MAX_AFFIX_LENGTH))]
    pub prefix: String,
    /// Text placed after the last word
    #[garde(length(chars, max = MAX_AFFIX_LENGTH))]
    pub suffix: String,
    /// Text placed between adjacent words
    #[garde(length(chars, max = MAX_AFFIX_LENGTH))]
    pub separator: String,
    /// Upper-case the first character of every word
    #[garde(skip)]
    pub title_case: bool,
}

impl GeneratorConfig {
    /// Parses and validates a JSON configuration
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Parse` - `json` is not a configuration document or
    ///   names a field that does not exist
    /// * `ConfigError::Invalid` - a field exceeds its limit
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Guaranteed entropy of phrases drawn from `list`, in bits
    ///
    /// Padding words only add to this lower bound.
    pub fn min_entropy_bits(&self, list: &WordList<'_>) -> f64 {
        self.word_count as f64 * list.entropy_bits()
    }

    /// Generates a passphrase from the embedded English list
    ///
    /// # Errors
    ///
    /// Returns `Error::RandomnessUnavailable` if the secure random source fails.
    pub fn passphrase(&self) -> Result<String> {
        PhraseGenerator::new(WordSource::english(), self.clone()).generate()
    }
}

/// Generates passphrases from a [`WordSource`] according to a [`GeneratorConfig`]
#[derive(Debug, Clone)]
pub struct PhraseGenerator<'s, 'w, R = OsEntropy> {
    source: &'s WordSource<'w, R>,
    config: GeneratorConfig,
}

impl<'s, 'w, R: EntropySource> PhraseGenerator<'s, 'w, R> {
    /// Creates a generator drawing from `source`
    pub fn new(source: &'s WordSource<'w, R>, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// The rules this generator follows
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Guaranteed entropy of each generated phrase, in bits
    pub fn entropy_bits(&self) -> f64 {
        self.config.min_entropy_bits(self.source.list())
    }

    /// Generates one passphrase
    ///
    /// Draws `word_count` words, then keeps drawing until the rendered length
    /// reaches `min_length`. Every word is at least one byte long, so padding
    /// always terminates.
    ///
    /// # Errors
    ///
    /// Returns `Error::RandomnessUnavailable` from the first failed draw; no
    /// partial phrase is produced.
    #[instrument(
        level = "trace",
        skip_all,
        fields(word_count = self.config.word_count, min_length = self.config.min_length)
    )]
    pub fn generate(&self) -> Result<String> {
        let GeneratorConfig {
            word_count,
            min_length,
            prefix,
            suffix,
            separator,
            title_case,
        } = &self.config;

        let mut words = if *word_count > 0 {
            self.source.draw_words(*word_count)?
        } else {
            Vec::new()
        };

        let mut length = prefix.len()
            + suffix.len()
            + words.iter().map(|w| w.len()).sum::<usize>()
            + separator.len() * words.len().saturating_sub(1);

        let drawn = words.len();
        while length < *min_length {
            let word = self.source.draw_word()?;
            if !words.is_empty() {
                length += separator.len();
            }
            length += word.len();
            words.push(word);
        }
        // Words and phrases are secrets; only counts are recorded
        tracing::trace!(
            words = words.len(),
            padding = words.len() - drawn,
            "drew words"
        );

        let body = if *title_case {
            words.iter().map(|w| capitalize(w)).join(separator)
        } else {
            words.iter().join(separator)
        };

        Ok(format!("{prefix}{body}{suffix}"))
    }
}

/// Upper-cases the first character of `word`, leaving the rest untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
