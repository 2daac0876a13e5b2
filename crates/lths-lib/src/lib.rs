// LTHS: Linear Time Hamming Search
//
// Bit-parallel k-mismatch string matching under the Hamming distance model.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod alphabet;
pub mod batch;
pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod plane;
pub mod search;

// Re-export common types at crate root
pub use alphabet::Alphabet;
pub use batch::{search_batch, BatchSearch};
pub use config::SearchConfig;
pub use error::SearchError;
pub use matcher::{BitParallelMatcher, HammingProfile, MatchRecord};
pub use plane::Plane;
pub use search::{hamming_profile, search, search_with_config};

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}
