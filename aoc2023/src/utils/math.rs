//! Integer helpers

/// Greatest common divisor (Euclid). `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple. 0 if either argument is 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// LCM of every value; 1 for an empty iterator.
pub fn lcm_all(values: impl IntoIterator<Item = u64>) -> u64 {
    values.into_iter().fold(1, lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 5), 0);
        assert_eq!(lcm_all([2, 3, 4]), 12);
        assert_eq!(lcm_all([]), 1);
    }

    proptest! {
        #[test]
        fn lcm_is_common_multiple(a in 1u64..10_000, b in 1u64..10_000) {
            let l = lcm(a, b);
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
            prop_assert_eq!(l * gcd(a, b), a * b);
        }
    }
}
