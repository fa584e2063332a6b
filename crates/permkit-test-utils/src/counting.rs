// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Closed-form counts used as expected values.

use std::collections::BTreeMap;

/// `n!` as `u64`.
///
/// # Panics
///
/// Panics if `n > 20` (`21!` overflows `u64`).
pub fn factorial(n: usize) -> u64 {
    assert!(n <= 20, "{}! overflows u64", n);
    (1..=n as u64).product()
}

/// Number of distinct arrangements of a multiset: `n! / prod(m_i!)`.
///
/// # Example
/// ```
/// use permkit_test_utils::multiset_permutation_count;
///
/// assert_eq!(multiset_permutation_count(&[1, 1, 2]), 3);
/// assert_eq!(multiset_permutation_count(&['a', 'b', 'a', 'b']), 6);
/// ```
pub fn multiset_permutation_count<T: Ord>(items: &[T]) -> u64 {
    let mut multiplicities: BTreeMap<&T, usize> = BTreeMap::new();
    for item in items {
        *multiplicities.entry(item).or_default() += 1;
    }

    multiplicities
        .values()
        .fold(factorial(items.len()), |acc, &m| acc / factorial(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    #[should_panic(expected = "21! overflows u64")]
    fn test_factorial_overflow_panics() {
        factorial(21);
    }

    #[test]
    fn test_multiset_count_distinct_is_factorial() {
        assert_eq!(multiset_permutation_count(&[3, 1, 4, 2]), 24);
    }

    #[test]
    fn test_multiset_count_all_equal() {
        assert_eq!(multiset_permutation_count(&[7, 7, 7, 7, 7]), 1);
    }

    #[test]
    fn test_multiset_count_empty() {
        assert_eq!(multiset_permutation_count::<u8>(&[]), 1);
    }
}
