//! Error type for search validation
//!
//! All errors are precondition violations detected before a matcher is
//! constructed. Once a matcher exists the scan cannot fail.

use thiserror::Error;

/// Error type for search setup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern is empty
    #[error("Pattern is empty")]
    EmptyPattern,
    /// The pattern has more symbols than the text
    #[error("Pattern is longer than text: pattern length {pattern_len}, text length {text_len}")]
    PatternLongerThanText {
        /// Pattern length
        pattern_len: usize,
        /// Text length
        text_len: usize,
    },
    /// The pattern does not fit in one plane word
    #[error("Pattern is too long: length {pattern_len} exceeds the {max}-bit word")]
    PatternTooLong {
        /// Pattern length
        pattern_len: usize,
        /// Maximum supported length (word width in bits)
        max: usize,
    },
    /// The mismatch threshold is not below the pattern length
    #[error("Invalid k-mismatches value: k={k} must be less than pattern length {pattern_len}")]
    InvalidThreshold {
        /// Requested threshold
        k: usize,
        /// Pattern length
        pattern_len: usize,
    },
    /// A pattern byte lies outside the ASCII symbol domain
    #[error("Pattern byte {byte:#04x} at position {position} is not ASCII")]
    SymbolOutOfDomain {
        /// Offset of the byte in the pattern
        position: usize,
        /// Offending byte
        byte: u8,
    },
    /// A pattern byte is missing from an explicit alphabet
    #[error("Pattern symbol {:?} at position {position} is not in the alphabet", symbol(.byte))]
    SymbolNotInAlphabet {
        /// Offset of the byte in the pattern
        position: usize,
        /// Offending byte
        byte: u8,
    },
    /// An explicit alphabet contains a byte outside the symbol domain
    #[error("Alphabet byte {byte:#04x} is not ASCII")]
    InvalidAlphabetSymbol {
        /// Offending byte
        byte: u8,
    },
}

fn symbol(byte: &u8) -> char {
    *byte as char
}
