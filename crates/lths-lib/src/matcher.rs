//! Bit-parallel Hamming matcher
//!
//! The matcher keeps one pattern plane and one text plane per symbol class.
//! The text planes describe a window of `m` text positions; each step
//! records the newest text byte at offset `m - 1`, scores the window with
//! one xor/and/popcount per plane, then shifts every text plane right by
//! one so the oldest offset falls off.
//!
//! Key properties:
//! - O(sigma) word operations per text position
//! - O(sigma) state, independent of the text length
//! - Lazy: windows are scored only as the caller pulls records

use crate::alphabet::Alphabet;
use crate::config::{check_coverage, check_preconditions};
use crate::error::SearchError;
use crate::plane::Plane;
use std::fmt;
use std::iter::FusedIterator;

/// One window whose Hamming distance to the pattern is within the threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRecord<'t> {
    /// Start offset of the window in the text
    pub start: usize,
    /// Number of mismatching positions (at most k)
    pub mismatches: usize,
    /// The window itself, exactly `m` bytes
    pub substring: &'t [u8],
}

impl MatchRecord<'_> {
    /// Offset one past the last byte of the window
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.substring.len()
    }
}

impl fmt::Display for MatchRecord<'_> {
    /// `<start>,<mismatches>\t<substring>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}\t{}",
            self.start,
            self.mismatches,
            String::from_utf8_lossy(self.substring)
        )
    }
}

/// Sliding-window k-mismatch matcher over one text
///
/// Iterating yields every qualifying window in increasing start order.
#[derive(Clone, Debug)]
pub struct BitParallelMatcher<'t> {
    alphabet: Alphabet,
    pattern_planes: Vec<Plane>,
    text_planes: Vec<Plane>,
    text: &'t [u8],
    m: usize,
    k: usize,
    // index of the newest text position of the next window
    cursor: usize,
}

impl<'t> BitParallelMatcher<'t> {
    /// Create a matcher and prime its text planes with the first `m - 1`
    /// text positions
    ///
    /// # Errors
    /// Fails when the precondition contract does not hold or when the
    /// alphabet has no plane for some pattern byte.
    pub fn new(
        alphabet: Alphabet,
        pattern: &[u8],
        text: &'t [u8],
        k: usize,
    ) -> Result<Self, SearchError> {
        check_preconditions(pattern, k, text.len())?;
        check_coverage(&alphabet, pattern)?;

        let m = pattern.len();
        let sigma = alphabet.sigma();

        let mut pattern_planes = vec![Plane::EMPTY; sigma];
        for (i, &c) in pattern.iter().enumerate() {
            if let Some(h) = alphabet.plane_of(c) {
                pattern_planes[h].set(i);
            }
        }

        // One short of a full window; the first step completes it
        let mut text_planes = vec![Plane::EMPTY; sigma];
        for (i, &c) in text[..m - 1].iter().enumerate() {
            if let Some(h) = alphabet.plane_of(c) {
                text_planes[h].set(i);
            }
        }

        tracing::debug!(
            "Matcher ready: m={}, n={}, k={}, sigma={}",
            m,
            text.len(),
            k,
            sigma
        );

        Ok(Self {
            alphabet,
            pattern_planes,
            text_planes,
            text,
            m,
            k,
            cursor: m - 1,
        })
    }

    /// Build a matcher with the alphabet derived from the pattern
    ///
    /// # Errors
    /// See [`BitParallelMatcher::new`].
    pub fn from_pattern(pattern: &[u8], text: &'t [u8], k: usize) -> Result<Self, SearchError> {
        Self::new(Alphabet::from_pattern(pattern), pattern, text, k)
    }

    /// Number of symbol planes
    #[inline]
    pub fn sigma(&self) -> usize {
        self.alphabet.sigma()
    }

    /// Pattern length
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.m
    }

    /// Mismatch threshold
    #[inline]
    pub fn threshold(&self) -> usize {
        self.k
    }

    /// The pattern planes, one per symbol class
    pub fn pattern_planes(&self) -> &[Plane] {
        &self.pattern_planes
    }

    /// Whether every window has been scored
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Number of windows not yet scored
    #[inline]
    pub fn remaining_windows(&self) -> usize {
        self.text.len().saturating_sub(self.cursor)
    }

    /// Score the next window and return its record if it qualifies
    ///
    /// Returns `None` both for a window above the threshold and once the
    /// matcher is exhausted; use [`is_exhausted`](Self::is_exhausted) to
    /// tell them apart.
    pub fn advance(&mut self) -> Option<MatchRecord<'t>> {
        let (start, s) = self.slide()?;
        let text = self.text;
        (s <= self.k).then(|| MatchRecord {
            start,
            mismatches: s,
            substring: &text[start..start + self.m],
        })
    }

    /// Score the next window regardless of the threshold
    ///
    /// Returns the window start and its Hamming distance to the pattern.
    fn slide(&mut self) -> Option<(usize, usize)> {
        let i = self.cursor;
        let &c = self.text.get(i)?;

        if let Some(h) = self.alphabet.plane_of(c) {
            self.text_planes[h].set(self.m - 1);
        }

        let mut s = 0usize;
        for (p, t) in self.pattern_planes.iter().zip(self.text_planes.iter_mut()) {
            s += p.mismatches_against(*t) as usize;
            t.shift_right();
        }

        self.cursor += 1;
        Some((i + 1 - self.m, s))
    }
}

impl<'t> Iterator for BitParallelMatcher<'t> {
    type Item = MatchRecord<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.is_exhausted() {
            if let Some(record) = self.advance() {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_windows()))
    }
}

impl FusedIterator for BitParallelMatcher<'_> {}

/// Hamming distance of every window, in start order
///
/// Produced by [`hamming_profile`](crate::hamming_profile).
#[derive(Clone, Debug)]
pub struct HammingProfile<'t> {
    matcher: BitParallelMatcher<'t>,
}

impl<'t> HammingProfile<'t> {
    pub(crate) fn new(matcher: BitParallelMatcher<'t>) -> Self {
        Self { matcher }
    }
}

impl Iterator for HammingProfile<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.matcher.slide().map(|(_, s)| s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.matcher.remaining_windows();
        (n, Some(n))
    }
}

impl ExactSizeIterator for HammingProfile<'_> {}

impl FusedIterator for HammingProfile<'_> {}
