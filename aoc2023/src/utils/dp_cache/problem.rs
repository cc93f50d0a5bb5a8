/// A recurrence evaluated by [`DpCache`](super::DpCache).
///
/// `I` is the index type, `K` the value stored per index.
pub trait DpProblem<I, K> {
    /// Indices `index` depends on; empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value at `index`, given the values of `deps(index)` in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
