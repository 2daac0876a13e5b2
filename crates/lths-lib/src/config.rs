//! Search configuration and input validation
//!
//! Collects the parameters of one search (pattern, k, optional explicit
//! alphabet) and checks the precondition contract the matcher relies on:
//! 1. the pattern is not empty
//! 2. the pattern is not longer than the text
//! 3. the pattern fits in one plane word
//! 4. k is strictly below the pattern length
//! 5. every pattern byte is ASCII (and in the explicit alphabet, if any)

use crate::alphabet::Alphabet;
use crate::constants::{in_symbol_domain, WORD_BITS};
use crate::error::SearchError;

/// Configuration parameters for one k-mismatch search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// The pattern (needle)
    pub pattern: Vec<u8>,

    /// Mismatch threshold; windows with at most `k` mismatches are reported
    pub k: usize,

    /// Explicit alphabet; `None` derives the alphabet from the pattern
    pub alphabet: Option<Vec<u8>>,
}

impl SearchConfig {
    /// Create a configuration with a pattern-derived alphabet
    pub fn new(pattern: impl Into<Vec<u8>>, k: usize) -> Self {
        Self {
            pattern: pattern.into(),
            k,
            alphabet: None,
        }
    }

    /// Use an explicit alphabet instead of deriving one from the pattern
    pub fn with_alphabet(mut self, symbols: impl Into<Vec<u8>>) -> Self {
        self.alphabet = Some(symbols.into());
        self
    }

    /// Pattern length `m`
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Validate the configuration against a text of the given length
    ///
    /// # Errors
    /// Returns the first violated precondition.
    pub fn validate(&self, text_len: usize) -> Result<(), SearchError> {
        check_preconditions(&self.pattern, self.k, text_len)?;
        if self.alphabet.is_some() {
            self.build_alphabet()?;
        }
        Ok(())
    }

    /// Build the alphabet this configuration asks for
    ///
    /// # Errors
    /// Fails when the explicit alphabet is malformed or does not cover the
    /// pattern.
    pub fn build_alphabet(&self) -> Result<Alphabet, SearchError> {
        match &self.alphabet {
            None => Ok(Alphabet::from_pattern(&self.pattern)),
            Some(symbols) => {
                let alphabet = Alphabet::from_symbols(symbols)?;
                check_coverage(&alphabet, &self.pattern)?;
                Ok(alphabet)
            }
        }
    }

    /// Log configuration parameters via tracing
    pub fn print(&self) {
        tracing::info!("Search Configuration:");
        tracing::info!("  m = {}", self.pattern.len());
        tracing::info!("  k = {}", self.k);
        match &self.alphabet {
            Some(symbols) => {
                tracing::info!("  alphabet = {:?}", String::from_utf8_lossy(symbols))
            }
            None => tracing::info!("  alphabet = derived from pattern"),
        }
        tracing::debug!("  pattern = {:?}", String::from_utf8_lossy(&self.pattern));
    }
}

/// Check the precondition contract for a pattern, threshold and text length
///
/// # Errors
/// Returns the first violated precondition, in the order listed in the
/// module documentation.
pub fn check_preconditions(pattern: &[u8], k: usize, text_len: usize) -> Result<(), SearchError> {
    let m = pattern.len();
    if m == 0 {
        return Err(SearchError::EmptyPattern);
    }
    if m > text_len {
        return Err(SearchError::PatternLongerThanText {
            pattern_len: m,
            text_len,
        });
    }
    if m > WORD_BITS {
        return Err(SearchError::PatternTooLong {
            pattern_len: m,
            max: WORD_BITS,
        });
    }
    if k >= m {
        return Err(SearchError::InvalidThreshold { k, pattern_len: m });
    }
    if let Some(position) = pattern.iter().position(|&c| !in_symbol_domain(c)) {
        return Err(SearchError::SymbolOutOfDomain {
            position,
            byte: pattern[position],
        });
    }
    Ok(())
}

/// Check that every pattern byte owns a plane in the alphabet
pub(crate) fn check_coverage(alphabet: &Alphabet, pattern: &[u8]) -> Result<(), SearchError> {
    match pattern.iter().position(|&c| !alphabet.contains(c)) {
        Some(position) => Err(SearchError::SymbolNotInAlphabet {
            position,
            byte: pattern[position],
        }),
        None => Ok(()),
    }
}
