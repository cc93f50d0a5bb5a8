use std::cell::Cell;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// 0 depends on 1 and 2, which both depend on 3
struct Diamond {
    computed: Cell<u32>,
}

impl DpProblem<usize, i32> for Diamond {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match *n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
        self.computed.set(self.computed.get() + 1);
        match *n {
            0 => deps[0] + deps[1],
            1 => deps[0] * 2,
            2 => deps[0] * 3,
            _ => 10,
        }
    }
}

/// Lattice paths from (0, 0) to (r, c)
struct GridPaths;

impl DpProblem<(usize, usize), u64> for GridPaths {
    fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
        let mut deps = Vec::new();
        if r > 0 {
            deps.push((r - 1, c));
        }
        if c > 0 {
            deps.push((r, c - 1));
        }
        deps
    }

    fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

#[test]
fn fibonacci_values() {
    let cache = DpCache::new(VecBackend::new(), Fibonacci);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn shared_dependency_is_computed_once() {
    let cache = DpCache::new(
        VecBackend::with_capacity(4),
        Diamond {
            computed: Cell::new(0),
        },
    );
    assert_eq!(cache.get(&0), 50);
    assert_eq!(cache.problem().computed.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(cache.get(&3), 10);
    assert_eq!(cache.problem().computed.get(), 4);
}

#[test]
fn hashmap_backend_with_tuple_index() {
    let cache = DpCache::new(HashMapBackend::new(), GridPaths);
    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(16, 16)), 601_080_390);
}

#[test]
fn backend_insert_keeps_first_value() {
    let mut backend = VecBackend::new();
    assert_eq!(*backend.insert(3, 'a'), 'a');
    assert_eq!(*backend.insert(3, 'b'), 'a');
    assert_eq!(backend.get(&3), Some(&'a'));
    assert_eq!(backend.get(&1), None);
    assert_eq!(backend.get(&10), None);
}

proptest! {
    #[test]
    fn matches_iterative_fibonacci(n in 0usize..90) {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        let cache = DpCache::new(VecBackend::new(), Fibonacci);
        prop_assert_eq!(cache.get(&n), a);
    }
}
