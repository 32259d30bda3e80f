//! Bounded worker pool
//!
//! Wraps a dedicated rayon thread pool. Work is handed out in batches of
//! `chunk_size` items; each batch is processed by one worker without any
//! shared mutable state. The first failure stops the pool from starting
//! further batches and is returned to the caller.

use crate::error::{Error, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use stillwater::Semigroup;
use tracing::debug;

pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
    chunk_size: usize,
}

impl WorkerPool {
    /// Start a pool of `workers` threads dispatching `chunk_size` items at a time
    pub fn new(workers: usize, chunk_size: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk size must be at least 1".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("count-worker-{index}"))
            .build()?;
        debug!(
            "Started worker pool with {} threads, chunk size {}",
            workers, chunk_size
        );
        Ok(Self {
            pool,
            workers,
            chunk_size,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Apply `map` to every item and combine the outputs
    ///
    /// Each batch is folded into one value on its worker as soon as it is
    /// processed, and batch results are reduced as they complete. The order
    /// in which values meet is unspecified, so `R::combine` must be
    /// associative and commutative. An empty input yields `R::default()`.
    pub fn try_map_reduce<T, R, E, F>(&self, items: &[T], map: F) -> std::result::Result<R, E>
    where
        T: Sync,
        R: Semigroup + Default + Send,
        E: Send,
        F: Fn(&T) -> std::result::Result<R, E> + Sync + Send,
    {
        self.pool.install(|| {
            items
                .par_chunks(self.chunk_size)
                .map(|batch| {
                    batch
                        .iter()
                        .try_fold(R::default(), |acc, item| map(item).map(|value| acc.combine(value)))
                })
                .try_reduce(R::default, |a, b| Ok(a.combine(b)))
        })
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("workers", &self.workers)
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{FrequencyMap, LineCount};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_rejects_zero_workers() {
        assert!(matches!(
            WorkerPool::new(0, 5),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        assert!(matches!(
            WorkerPool::new(2, 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_try_map_reduce_sums() {
        let pool = WorkerPool::new(3, 5).unwrap();
        let items: Vec<usize> = (1..=100).collect();

        let total = pool
            .try_map_reduce(&items, |n| Ok::<_, String>(LineCount(*n)))
            .unwrap();

        assert_eq!(total, LineCount(5050));
    }

    #[test]
    fn test_try_map_reduce_empty_is_identity() {
        let pool = WorkerPool::new(2, 5).unwrap();
        let items: Vec<&str> = Vec::new();

        let merged = pool
            .try_map_reduce(&items, |_| Ok::<FrequencyMap, String>(FrequencyMap::new()))
            .unwrap();

        assert!(merged.is_empty());
    }

    #[test]
    fn test_result_independent_of_pool_shape() {
        let items: Vec<String> = (0..40).map(|i| format!("w{} w{} shared", i % 7, i % 3)).collect();
        let count = |text: &String| Ok::<_, String>(crate::count::count_words(text));

        let baseline = WorkerPool::new(1, 1).unwrap().try_map_reduce(&items, count).unwrap();
        for (workers, chunk_size) in [(2, 1), (4, 5), (8, 3), (3, 100)] {
            let pool = WorkerPool::new(workers, chunk_size).unwrap();
            assert_eq!(pool.try_map_reduce(&items, count).unwrap(), baseline);
        }
        assert_eq!(baseline.get("shared"), 40);
    }

    #[test]
    fn test_failure_propagates() {
        let pool = WorkerPool::new(4, 2).unwrap();
        let items: Vec<usize> = (0..20).collect();

        let result = pool.try_map_reduce(&items, |n| {
            if *n == 13 {
                Err(format!("item {n} failed"))
            } else {
                Ok(LineCount(1))
            }
        });

        assert_eq!(result, Err("item 13 failed".to_string()));
    }

    #[test]
    fn test_work_runs_on_pool_threads() {
        let pool = WorkerPool::new(2, 1).unwrap();
        let names = Mutex::new(HashSet::new());
        let calls = AtomicUsize::new(0);
        let items: Vec<usize> = (0..16).collect();

        pool.try_map_reduce(&items, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            let name = std::thread::current().name().map(str::to_string);
            names.lock().unwrap().insert(name);
            Ok::<_, String>(LineCount(1))
        })
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 16);
        let names = names.into_inner().unwrap();
        assert!(!names.is_empty() && names.len() <= 2);
        assert!(names
            .iter()
            .all(|n| n.as_deref().is_some_and(|n| n.starts_with("count-worker-"))));
    }
}
