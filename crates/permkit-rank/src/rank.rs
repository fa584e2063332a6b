// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lexicographic rank and unrank.
//!
//! Both directions run in `O(n log n)` using a [`CountingTree`] instead of
//! quadratic inversion counting.
//!
//! Reference: Blai Bonet, "Efficient Algorithms to Rank and Unrank
//! Permutations in Lexicographic Order".

use alloc::vec::Vec;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::counting::CountingTree;
use crate::error::RankError;
use crate::factoradic::Factoradic;
use crate::tracing_helpers::{debug_log, trace_log};

/// Returns the 0-based position of `perm` among all permutations of its
/// length sorted in lexicographic order.
///
/// `perm` must be a permutation of `{0, ..., perm.len()-1}`. This is not
/// checked: other inputs give an unspecified rank but never panic.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use permkit_rank::lex_rank;
///
/// assert_eq!(lex_rank(&[0, 1, 2]), BigUint::from(0u32));
/// assert_eq!(lex_rank(&[1, 0, 2]), BigUint::from(2u32));
/// assert_eq!(lex_rank(&[2, 1, 0]), BigUint::from(5u32));
/// ```
pub fn lex_rank(perm: &[usize]) -> BigUint {
    let n = perm.len();
    let mut tree = CountingTree::full(n);
    let mut rank = BigUint::zero();

    for (position, &value) in perm.iter().enumerate() {
        let smaller_unused = tree.take(value);
        rank *= (n - position) as u64;
        rank += smaller_unused as u64;
    }

    trace_log!(n, %rank, "ranked permutation");

    rank
}

/// Returns the permutation of `{0, ..., n-1}` at position `rank` in
/// lexicographic order.
///
/// # Errors
///
/// Returns [`RankError::OutOfRange`] if `rank >= n!`. No partial output is
/// produced.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use permkit_rank::{RankError, lex_unrank};
///
/// assert_eq!(lex_unrank(&BigUint::from(0u32), 4), Ok(vec![0, 1, 2, 3]));
/// assert_eq!(lex_unrank(&BigUint::from(3u32), 3), Ok(vec![1, 2, 0]));
/// assert_eq!(
///     lex_unrank(&BigUint::from(6u32), 3),
///     Err(RankError::OutOfRange { n: 3 })
/// );
/// ```
pub fn lex_unrank(rank: &BigUint, n: usize) -> Result<Vec<usize>, RankError> {
    let factoradic = Factoradic::from_rank(rank, n).inspect_err(|_| {
        debug_log!(n, %rank, "rank out of range");
    })?;

    let perm = factoradic.to_permutation();
    trace_log!(n, %rank, ?perm, "unranked permutation");

    Ok(perm)
}

/// Signed variant of [`lex_unrank`].
///
/// # Errors
///
/// Returns [`RankError::Negative`] if `rank < 0` and
/// [`RankError::OutOfRange`] if `rank >= n!`.
///
/// ```rust
/// use num_bigint::BigInt;
/// use permkit_rank::{RankError, lex_unrank_signed};
///
/// assert_eq!(lex_unrank_signed(&BigInt::from(-1), 3), Err(RankError::Negative));
/// assert_eq!(lex_unrank_signed(&BigInt::from(5), 3), Ok(vec![2, 1, 0]));
/// ```
pub fn lex_unrank_signed(rank: &BigInt, n: usize) -> Result<Vec<usize>, RankError> {
    let Some(rank) = rank.to_biguint() else {
        debug_log!(n, %rank, "negative rank");
        return Err(RankError::Negative);
    };

    lex_unrank(&rank, n)
}
