// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for Factoradic and factorial.

use num_bigint::BigUint;

use permkit_test_utils::sorted_index_permutations;

use crate::error::RankError;
use crate::factoradic::{Factoradic, factorial};

// =============================================================================
// factorial()
// =============================================================================

#[test]
fn test_factorial_matches_u64_below_21() {
    for n in 0..=20 {
        assert_eq!(factorial(n), BigUint::from(permkit_test_utils::factorial(n)));
    }
}

#[test]
fn test_factorial_exceeds_u64_from_21() {
    let f21 = factorial(21);
    assert!(f21 > BigUint::from(u64::MAX));
    assert_eq!(f21, factorial(20) * 21u64);
    assert_eq!(f21.to_string(), "51090942171709440000");
}

// =============================================================================
// from_rank()
// =============================================================================

#[test]
fn test_from_rank_zero_is_all_zero_digits() {
    let f = Factoradic::from_rank(&BigUint::from(0u32), 7).expect("Failed to from_rank(..)");
    assert_eq!(f.digits(), [0; 7]);
}

#[test]
fn test_from_rank_last_rank_is_max_digits() {
    let n = 6;
    let last = factorial(n) - 1u32;
    let f = Factoradic::from_rank(&last, n).expect("Failed to from_rank(..)");
    assert_eq!(f.digits(), [5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_from_rank_rejects_n_factorial() {
    for n in 0..10 {
        assert_eq!(
            Factoradic::from_rank(&factorial(n), n),
            Err(RankError::OutOfRange { n })
        );
    }
}

#[test]
fn test_from_rank_empty_accepts_only_zero() {
    let f = Factoradic::from_rank(&BigUint::from(0u32), 0).expect("Failed to from_rank(..)");
    assert!(f.is_empty());
    assert_eq!(
        Factoradic::from_rank(&BigUint::from(1u32), 0),
        Err(RankError::OutOfRange { n: 0 })
    );
}

#[test]
fn test_from_rank_digits_respect_radix() {
    let n = 7;
    for r in (0..5040u32).step_by(37) {
        let f = Factoradic::from_rank(&BigUint::from(r), n).expect("Failed to from_rank(..)");
        for (i, &d) in f.digits().iter().enumerate() {
            assert!(d <= n - 1 - i, "digit {} at {} out of range", d, i);
        }
        assert_eq!(f.to_rank(), BigUint::from(r));
    }
}

#[test]
fn test_from_rank_large_n() {
    let n = 30;
    let last = factorial(n) - 1u32;
    let f = Factoradic::from_rank(&last, n).expect("Failed to from_rank(..)");
    assert_eq!(f.digits(), (0..n).rev().collect::<Vec<_>>());
    assert_eq!(f.to_rank(), last);
}

// =============================================================================
// from_digits()
// =============================================================================

#[test]
fn test_from_digits_accepts_valid_digits() {
    let f = Factoradic::from_digits(vec![3, 4, 1, 0, 1, 0]).expect("Failed to from_digits(..)");
    assert_eq!(f.to_rank(), BigUint::from(463u32));
    assert_eq!(f.len(), 6);
}

#[test]
fn test_from_digits_rejects_digit_over_radix() {
    assert_eq!(
        Factoradic::from_digits(vec![0, 3, 0, 0]),
        Err(RankError::InvalidDigit {
            position: 1,
            digit: 3,
            max: 2
        })
    );
}

#[test]
fn test_from_digits_rejects_nonzero_last_digit() {
    assert_eq!(
        Factoradic::from_digits(vec![1, 1]),
        Err(RankError::InvalidDigit {
            position: 1,
            digit: 1,
            max: 0
        })
    );
}

#[test]
fn test_from_digits_empty() {
    let f = Factoradic::from_digits(Vec::new()).expect("Failed to from_digits(..)");
    assert_eq!(f.to_rank(), BigUint::from(0u32));
    assert!(f.to_permutation().is_empty());
}

// =============================================================================
// from_permutation() / to_permutation()
// =============================================================================

#[test]
fn test_lehmer_code_matches_naive_inversion_count() {
    for perm in sorted_index_permutations(6) {
        let f = Factoradic::from_permutation(&perm);
        let naive: Vec<usize> = (0..perm.len())
            .map(|i| perm[i + 1..].iter().filter(|&&v| v < perm[i]).count())
            .collect();
        assert_eq!(f.digits(), naive.as_slice());
    }
}

#[test]
fn test_to_permutation_inverts_from_permutation() {
    for perm in sorted_index_permutations(5) {
        assert_eq!(Factoradic::from_permutation(&perm).to_permutation(), perm);
    }
}

#[test]
fn test_from_permutation_malformed_input_stays_in_range() {
    let f = Factoradic::from_permutation(&[9, 9, 9]);
    assert_eq!(f.len(), 3);
    assert!(Factoradic::from_digits(f.clone().into_digits()).is_ok());
    assert_eq!(f.to_permutation().len(), 3);
}
