//! Single-threaded DP cache.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Lazily evaluated, memoized [`DpProblem`].
///
/// Values are computed on first [`get`](DpCache::get), after their
/// dependencies, and cloned out of the backend afterwards. The backend sits
/// in a `RefCell` so lookups only need `&self`; no borrow is held while a
/// dependency is being resolved.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value at `index`, computing it and any missing dependencies first.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        let deps: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(index, deps);

        self.backend
            .borrow_mut()
            .insert(index.clone(), value)
            .clone()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}
