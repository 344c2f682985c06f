//! Configuration limits for passphrase generation
//!
//! These bounds are enforced when a [`GeneratorConfig`](crate::GeneratorConfig)
//! is validated, typically after loading it from an outside source.

/// Word list constants
pub mod words {
    /// Number of words in the embedded English list
    pub const ENGLISH_WORD_COUNT: usize = 8192;
    /// Bits of entropy contributed by each word drawn from the embedded list
    pub const ENGLISH_BITS_PER_WORD: f64 = 13.0;
}

/// Generator configuration constants
pub mod generator {
    /// Maximum number of words drawn unconditionally
    pub const MAX_WORD_COUNT: usize = 64;
    /// Maximum requested rendered length in bytes
    pub const MAX_MIN_LENGTH: usize = 1024;
    /// Maximum length of the prefix, suffix and separator in characters
    pub const MAX_AFFIX_LENGTH: usize = 64;
}
