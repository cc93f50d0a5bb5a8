//! Memoized evaluation of recurrences over a DAG of indices
//!
//! A [`DpProblem`] names, for each index, the indices it depends on and how
//! to combine their values. [`DpCache`] resolves those dependencies on demand
//! and stores every value in a [`Backend`], so each index is computed once.
//!
//! Dependencies must form a DAG; a cycle recurses until the stack overflows.
//!
//! ```rust
//! use aoc2023::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` stairs taking 1 or 2 steps at a time
//! struct Stairs;
//!
//! impl DpProblem<usize, u64> for Stairs {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n < 2 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!
//!     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(VecBackend::new(), Stairs);
//! assert_eq!(cache.get(&10), 89);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
