//! Alphabet builder
//!
//! Assigns every distinct pattern symbol a dense plane index in `1..=sigma`.
//! Index 0 ([`NO_PLANE`]) marks bytes that own no plane, so a text byte
//! absent from the pattern can never match any pattern offset.
//!
//! Plane indices are assigned in order of first occurrence:
//! - pattern `"abca"` -> a = 1, b = 2, c = 3, sigma = 3

use crate::constants::{in_symbol_domain, NO_PLANE, SYMBOL_DOMAIN_SIZE};
use crate::error::SearchError;

/// Mapping from symbol-domain byte to plane index
///
/// Built once per search and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    planes: [u8; SYMBOL_DOMAIN_SIZE],
    sigma: usize,
}

impl Alphabet {
    /// Build the alphabet from the pattern in one pass
    ///
    /// Runs in O(m + |domain|) time.
    ///
    /// Every pattern byte must be inside the symbol domain; the matcher
    /// rejects other patterns before any plane is built. Out-of-domain bytes
    /// get no plane here.
    pub fn from_pattern(pattern: &[u8]) -> Self {
        let mut alphabet = Self::empty();
        for &c in pattern {
            alphabet.assign(c);
        }
        alphabet
    }

    /// Build the alphabet from an explicit symbol list
    ///
    /// Planes follow first-occurrence order in `symbols`, duplicates are
    /// ignored. Symbols that never appear in the pattern still get a plane;
    /// their pattern plane stays empty and scores nothing.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidAlphabetSymbol`] for a byte outside the
    /// symbol domain.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self, SearchError> {
        let mut alphabet = Self::empty();
        for &c in symbols {
            if !in_symbol_domain(c) {
                return Err(SearchError::InvalidAlphabetSymbol { byte: c });
            }
            alphabet.assign(c);
        }
        Ok(alphabet)
    }

    fn empty() -> Self {
        Self {
            planes: [NO_PLANE; SYMBOL_DOMAIN_SIZE],
            sigma: 0,
        }
    }

    #[inline]
    fn assign(&mut self, c: u8) {
        let Some(slot) = self.planes.get_mut(c as usize) else {
            return;
        };
        if *slot == NO_PLANE {
            self.sigma += 1;
            // sigma <= SYMBOL_DOMAIN_SIZE, so it always fits in a byte
            *slot = self.sigma as u8;
        }
    }

    /// Number of planes (distinct symbols)
    #[inline]
    pub fn sigma(&self) -> usize {
        self.sigma
    }

    /// Resolve a byte to its zero-based plane slot
    ///
    /// Returns `None` for bytes without a plane, including every byte
    /// outside the symbol domain.
    #[inline]
    pub fn plane_of(&self, c: u8) -> Option<usize> {
        match self.planes.get(c as usize) {
            Some(&h) if h != NO_PLANE => Some(h as usize - 1),
            _ => None,
        }
    }

    /// Raw plane index (1-based, [`NO_PLANE`] when absent)
    #[inline]
    pub fn index_of(&self, c: u8) -> u8 {
        self.planes.get(c as usize).copied().unwrap_or(NO_PLANE)
    }

    /// Check whether a byte owns a plane
    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.plane_of(c).is_some()
    }
}
