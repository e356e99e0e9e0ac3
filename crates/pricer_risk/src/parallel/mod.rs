//! Rayon-based parallelisation utilities.
//!
//! Pricing and conversion are pure per-trade functions, so a batch is
//! processed with an order-preserving parallel map and totals are combined
//! with a fork/reduce. Small batches stay sequential.

use rayon::prelude::*;

/// Minimum number of items a single rayon task processes.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default number of items before parallel execution is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Parallel map preserving input order.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Minimum items per rayon task
/// * `mapper` - Function to apply to each item
pub fn parallel_map<T, R, F>(items: &[T], batch_size: usize, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items
        .par_iter()
        .with_min_len(batch_size.max(1))
        .map(mapper)
        .collect()
}

/// Parallel reduce over items.
///
/// # Arguments
///
/// * `items` - Slice of items to reduce
/// * `identity` - Identity value for reduction
/// * `mapper` - Function to extract value from item
/// * `reducer` - Associative reduction function
pub fn parallel_reduce<T, R, M, Red>(items: &[T], identity: R, mapper: M, reducer: Red) -> R
where
    T: Sync,
    R: Send + Sync + Copy,
    M: Fn(&T) -> R + Sync + Send,
    Red: Fn(R, R) -> R + Sync + Send,
{
    items.par_iter().map(mapper).reduce(|| identity, reducer)
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Maps `items` in parallel when the batch is large enough, sequentially
    /// otherwise. Output order always matches input order.
    pub fn map<T, R, F>(&self, items: &[T], mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.should_parallelize(items.len()) {
            parallel_map(items, self.batch_size, mapper)
        } else {
            items.iter().map(mapper).collect()
        }
    }
}
