//! Associative aggregation of per-file results
//!
//! Both pipelines reduce per-file values with a `Semigroup::combine` that is
//! associative and commutative, so results may be combined in any order and
//! any grouping. `Default` provides the identity element used when there is
//! nothing to combine.

pub mod frequency;
pub mod line_count;


pub use frequency::{merge, FrequencyMap};
pub use line_count::LineCount;

use rayon::prelude::*;
use stillwater::Semigroup;

/// Combine every value in `items` sequentially, left to right
///
/// Returns the identity (`S::default()`) when `items` is empty.
///
/// # Example
/// ```
/// use corpus_stats::aggregate::{combine_all, LineCount};
///
/// let total = combine_all([LineCount(3), LineCount(4), LineCount(1)]);
/// assert_eq!(total, LineCount(8));
/// assert_eq!(combine_all(Vec::<LineCount>::new()), LineCount(0));
/// ```
pub fn combine_all<S, I>(items: I) -> S
where
    S: Semigroup + Default,
    I: IntoIterator<Item = S>,
{
    items.into_iter().fold(S::default(), S::combine)
}

/// Combine every value in `items` on the current rayon pool
///
/// Associativity guarantees the same result as [`combine_all`] regardless
/// of how rayon splits the work.
pub fn parallel_combine<S>(items: Vec<S>) -> S
where
    S: Semigroup + Default + Send,
{
    items.into_par_iter().reduce(S::default, S::combine)
}
