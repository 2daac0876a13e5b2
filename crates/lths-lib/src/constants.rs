//! Constants for LTHS
//!
//! Fixed parameters of the matching engine: the symbol domain, the plane
//! word width and the sentinel used for bytes that own no plane.

/// Number of byte values in the symbol domain (ASCII 0..=127)
pub const SYMBOL_DOMAIN_SIZE: usize = 128;

/// Plane index stored for bytes that never occur in the pattern
pub const NO_PLANE: u8 = 0;

/// Width of one plane word in bits; the pattern must fit in a single word
pub const WORD_BITS: usize = u64::BITS as usize;

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Check if a byte belongs to the symbol domain
#[inline]
pub const fn in_symbol_domain(byte: u8) -> bool {
    (byte as usize) < SYMBOL_DOMAIN_SIZE
}
