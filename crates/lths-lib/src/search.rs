//! Search entry points
//!
//! Thin constructors over [`BitParallelMatcher`]: validate, build the
//! alphabet, hand back the lazy record stream.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::matcher::{BitParallelMatcher, HammingProfile};

/// Report every window of `text` within Hamming distance `k` of `pattern`
///
/// The alphabet is derived from the pattern. Records are produced lazily in
/// increasing start order; dropping the iterator stops the scan.
///
/// # Errors
/// Returns the first violated precondition.
///
/// # Example
/// ```
/// let hits: Vec<_> = lths_lib::search(b"abc", 0, b"xabcx").unwrap().collect();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].start, 1);
/// assert_eq!(hits[0].substring, b"abc");
/// ```
pub fn search<'t>(
    pattern: &[u8],
    k: usize,
    text: &'t [u8],
) -> Result<BitParallelMatcher<'t>, SearchError> {
    BitParallelMatcher::from_pattern(pattern, text, k)
}

/// Run a search described by a [`SearchConfig`]
///
/// # Errors
/// Returns the first violated precondition, or an alphabet error when the
/// configuration carries an explicit alphabet.
pub fn search_with_config<'t>(
    config: &SearchConfig,
    text: &'t [u8],
) -> Result<BitParallelMatcher<'t>, SearchError> {
    config.validate(text.len())?;
    let alphabet = config.build_alphabet()?;
    BitParallelMatcher::new(alphabet, &config.pattern, text, config.k)
}

/// Hamming distance between `pattern` and every window of `text`
///
/// # Errors
/// Fails for the same length and symbol checks as [`search`]; there is no
/// threshold to validate.
pub fn hamming_profile<'t>(
    pattern: &[u8],
    text: &'t [u8],
) -> Result<HammingProfile<'t>, SearchError> {
    // k = 0 is valid for any non-empty pattern and is ignored by the profile
    BitParallelMatcher::from_pattern(pattern, text, 0).map(HammingProfile::new)
}
