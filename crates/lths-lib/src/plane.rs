//! Symbol planes
//!
//! A plane is one machine word whose low `m` bits track, for a single
//! symbol, which offsets of a length-`m` window hold that symbol. Offset 0
//! is the oldest position of the window, offset `m - 1` the newest.
//!
//! The only operations are set-bit, shift-right, xor/and and popcount.

use crate::constants::WORD_BITS;
use std::fmt;

/// Fixed-width bit-vector for one symbol class
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plane(u64);

impl Plane {
    /// An empty plane
    pub const EMPTY: Plane = Plane(0);

    /// Create a plane from raw bits
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Get the raw bits
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Set the bit at a window offset
    #[inline]
    pub fn set(&mut self, offset: usize) {
        debug_assert!(offset < WORD_BITS, "offset {} out of plane range", offset);
        self.0 |= 1u64 << offset;
    }

    /// Check the bit at a window offset
    #[inline]
    pub const fn is_set(self, offset: usize) -> bool {
        offset < WORD_BITS && (self.0 >> offset) & 1 == 1
    }

    /// Slide the window by one position, dropping offset 0
    #[inline]
    pub fn shift_right(&mut self) {
        self.0 >>= 1;
    }

    /// Count offsets where this pattern plane expects its symbol but the
    /// text plane does not hold it
    ///
    /// `(p ^ t) & p`
    #[inline]
    pub const fn mismatches_against(self, text: Plane) -> u32 {
        ((self.0 ^ text.0) & self.0).count_ones()
    }

    /// Number of set offsets
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Debug for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane({:#b})", self.0)
    }
}
