//! Word-count run configuration

use crate::error::{Error, Result};
use std::num::NonZeroUsize;

/// Tokens must occur more often than this to be reported
pub const DEFAULT_THRESHOLD: u64 = 2000;

/// Files dispatched to a worker together
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Number of parallel execution units on this host, at least one
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Settings for the parallel word-count pipeline
///
/// `workers` and `chunk_size` only affect performance; the aggregate is the
/// same for any valid combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountConfig {
    pub workers: usize,
    pub chunk_size: usize,
    pub threshold: u64,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl WordCountConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
