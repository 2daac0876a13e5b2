//! Parallel batch search
//!
//! Runs several independent (pattern, k) searches over the same text. Every
//! query owns its own matcher, so queries share nothing but the read-only
//! text and run on a rayon pool without synchronization.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::matcher::MatchRecord;
use crate::search::search_with_config;
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of one query in a batch
pub type QueryResult<'t> = Result<Vec<MatchRecord<'t>>, SearchError>;

/// Batch searcher with a configurable thread count
#[derive(Debug, Clone, Default)]
pub struct BatchSearch {
    /// Number of threads (0 = all available cores)
    pub num_threads: usize,
}

impl BatchSearch {
    /// Create a batch searcher
    ///
    /// - `0`: use all available CPU cores (rayon default)
    /// - `1`: single-threaded
    /// - `N`: use exactly N threads
    pub fn new(num_threads: usize) -> Self {
        Self { num_threads }
    }

    /// Run every query against `text`
    ///
    /// Results are returned in query order. An invalid query yields its
    /// error in place and does not affect the others.
    ///
    /// # Errors
    /// Returns an error only if the thread pool cannot be created.
    pub fn run<'t>(
        &self,
        queries: &[SearchConfig],
        text: &'t [u8],
    ) -> Result<Vec<QueryResult<'t>>, String> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .map_err(|e| format!("Failed to create thread pool: {e}"))?;

        Ok(pool.install(|| search_batch(queries, text)))
    }
}

/// Run every query against `text` on the current rayon pool
pub fn search_batch<'t>(queries: &[SearchConfig], text: &'t [u8]) -> Vec<QueryResult<'t>> {
    info!("Running {} queries over {} bytes", queries.len(), text.len());

    let results: Vec<QueryResult<'t>> = queries
        .par_iter()
        .map(|config| search_with_config(config, text).map(|matcher| matcher.collect()))
        .collect();

    debug!(
        "  {} queries failed validation",
        results.iter().filter(|r| r.is_err()).count()
    );
    results
}
