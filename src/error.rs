//! Errors raised while drawing words

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while drawing words or generating a passphrase
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The secure random source could not produce a value
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),
}

/// Result type returned by drawing and generation operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::RandomnessUnavailable("getrandom failed".to_string());
        assert_eq!(
            err.to_string(),
            "secure randomness unavailable: getrandom failed"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = Error::RandomnessUnavailable("no entropy".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"RandomnessUnavailable":"no entropy"}"#);
    }
}
