//! Pipeline entry points
//!
//! - [`word_frequencies`] distributes a [`FileSet`] across a [`WorkerPool`],
//!   counts tokens per file and reduces the per-file maps into one.
//! - [`line_counts`] counts lines per file sequentially in the caller and
//!   sums them.
//!
//! Both take the file set as an argument; neither touches the filesystem
//! beyond reading the listed files.

use crate::aggregate::{combine_all, FrequencyMap, LineCount};
use crate::config::WordCountConfig;
use crate::corpus::FileSet;
use crate::count::{count_lines_in_file, count_words_in_file};
use crate::error::Result;
use crate::pool::WorkerPool;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Count token frequencies across every file in `files`
///
/// Any file that fails to read aborts the run; a partial aggregate is never
/// returned. An empty file set yields an empty map.
pub fn word_frequencies(files: &FileSet, config: &WordCountConfig) -> Result<FrequencyMap> {
    config.validate()?;
    let pool = WorkerPool::new(config.workers, config.chunk_size)?;
    word_frequencies_with_pool(files, &pool)
}

/// Same as [`word_frequencies`] on an existing pool
pub fn word_frequencies_with_pool(files: &FileSet, pool: &WorkerPool) -> Result<FrequencyMap> {
    let started = Instant::now();
    info!(
        "Counting words in {} files with {} workers, chunk size {}",
        files.len(),
        pool.workers(),
        pool.chunk_size()
    );

    let counts = pool.try_map_reduce(files.paths(), |path| {
        debug!("Counting words in {}", path.display());
        count_words_in_file(path)
    })?;

    info!(
        "Counted {} distinct tokens ({} total) in {:?}",
        counts.len(),
        counts.total(),
        started.elapsed()
    );
    Ok(counts)
}

/// Line counts per file, in file-set order, with their total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    pub files: Vec<(PathBuf, LineCount)>,
    pub total: LineCount,
}

/// Count lines in every file of `files`, sequentially
pub fn line_counts(files: &FileSet) -> Result<LineReport> {
    info!("Counting lines in {} files", files.len());

    let files = files
        .iter()
        .map(|path| -> Result<(PathBuf, LineCount)> {
            let count = count_lines_in_file(path)?;
            debug!("{} has {} lines", path.display(), count);
            Ok((path.clone(), count))
        })
        .collect::<Result<Vec<_>>>()?;
    let total = combine_all(files.iter().map(|(_, count)| *count));

    Ok(LineReport { files, total })
}
