//! Secure random sources and unbiased index selection

use rand::{TryRngCore, rngs::OsRng};

use crate::{Error, Result};

/// A source of uniformly distributed 32-bit values
///
/// This abstraction allows plugging in the operating system generator or a
/// scripted source in tests. Draws take `&self`, so a source shared between
/// threads must also be `Sync`.
pub trait EntropySource {
    /// Returns a uniformly random `u32`
    ///
    /// # Errors
    ///
    /// Returns `Error::RandomnessUnavailable` if no value can be produced.
    fn next_u32(&self) -> Result<u32>;
}

/// An `EntropySource` backed by the operating system CSPRNG
///
/// This type stores no state and opens no handles; each draw asks the
/// operating system directly, which makes it safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_u32(&self) -> Result<u32> {
        OsRng.try_next_u32().map_err(|err| {
            tracing::warn!(%err, "operating system random source failed");
            Error::RandomnessUnavailable(err.to_string())
        })
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn next_u32(&self) -> Result<u32> {
        (**self).next_u32()
    }
}

/// Draws an index uniformly from `[0, n)` without modulo bias
///
/// Samples falling in the top `2^32 mod n` values are rejected and redrawn so
/// every residue is equally likely. When `n` is a power of two that zone is
/// empty and the first sample is always used.
///
/// # Errors
///
/// Propagates the first failure of `source`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn uniform_index<S: EntropySource + ?Sized>(source: &S, n: u32) -> Result<u32> {
    assert!(n > 0, "cannot draw from an empty range");
    let rejected = (u32::MAX % n + 1) % n;
    let limit = u32::MAX - rejected;
    loop {
        let sample = source.next_u32()?;
        if sample <= limit {
            return Ok(sample % n);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;

    /// Replays a fixed sequence of values, failing once it runs out
    #[derive(Debug)]
    pub(crate) struct ScriptedEntropy {
        values: Mutex<VecDeque<u32>>,
        draws: AtomicUsize,
    }

    impl ScriptedEntropy {
        pub(crate) fn new(values: &[u32]) -> Self {
            Self {
                values: Mutex::new(values.iter().copied().collect()),
                draws: AtomicUsize::new(0),
            }
        }

        pub(crate) fn draws(&self) -> usize {
            self.draws.load(Ordering::SeqCst)
        }
    }

    impl EntropySource for ScriptedEntropy {
        fn next_u32(&self) -> Result<u32> {
            self.draws.fetch_add(1, Ordering::SeqCst);
            self.values
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::RandomnessUnavailable("script exhausted".to_string()))
        }
    }

    #[test]
    fn test_os_entropy_produces_values() {
        let values: Vec<u32> = (0..16).map(|_| OsEntropy.next_u32().unwrap()).collect();
        // 16 identical 32-bit draws from a working CSPRNG will not happen
        assert!(values.iter().any(|v| *v != values[0]));
    }

    #[test]
    fn test_uniform_index_power_of_two_never_rejects() {
        let source = ScriptedEntropy::new(&[u32::MAX, 0, 8193]);
        assert_eq!(uniform_index(&source, 8192).unwrap(), 8191);
        assert_eq!(uniform_index(&source, 8192).unwrap(), 0);
        assert_eq!(uniform_index(&source, 8192).unwrap(), 1);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_uniform_index_rejects_biased_zone() {
        // 2^32 mod 3 == 1, so only u32::MAX is rejected
        let source = ScriptedEntropy::new(&[u32::MAX, u32::MAX - 1, 7]);
        assert_eq!(uniform_index(&source, 3).unwrap(), (u32::MAX - 1) % 3);
        assert_eq!(source.draws(), 2);
        assert_eq!(uniform_index(&source, 3).unwrap(), 1);
    }

    #[test]
    fn test_uniform_index_single_value() {
        let source = ScriptedEntropy::new(&[u32::MAX]);
        assert_eq!(uniform_index(&source, 1).unwrap(), 0);
    }

    #[test]
    fn test_uniform_index_propagates_failure() {
        let source = ScriptedEntropy::new(&[]);
        assert_eq!(
            uniform_index(&source, 10),
            Err(Error::RandomnessUnavailable("script exhausted".to_string()))
        );
    }

    #[test]
    #[should_panic(expected = "cannot draw from an empty range")]
    fn test_uniform_index_empty_range() {
        let _ = uniform_index(&OsEntropy, 0);
    }

    #[test]
    fn test_uniform_index_chi_squared_non_power_of_two() {
        const BUCKETS: u32 = 6;
        const DRAWS: usize = 60_000;

        let mut counts = [0usize; BUCKETS as usize];
        for _ in 0..DRAWS {
            counts[uniform_index(&OsEntropy, BUCKETS).unwrap() as usize] += 1;
        }
        let expected = DRAWS as f64 / f64::from(BUCKETS);
        let chi_squared: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 5 degrees of freedom; p < 1e-6 above roughly 35.9
        assert!(chi_squared < 36.0, "chi-squared {chi_squared} too large");
    }
}
