// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Next permutation in lexicographic order.

use core::cmp::Ordering;

use crate::traits::Sequence;
use crate::views::{SortBy, SortByKey};

/// Rearranges `seq` into the lexicographically next distinct arrangement of
/// its elements.
///
/// Returns `true` when a new arrangement was produced. If `seq` is already
/// the last arrangement (non-increasing), it is left unmodified and `false`
/// is returned.
///
/// Starting from the sorted arrangement and calling until `false` visits
/// every distinct arrangement exactly once, in increasing order, ending at
/// the sorted-descending arrangement. Each call is `O(n)`.
///
/// # Algorithm
///
/// 1. Find the rightmost `k` with `seq[k] < seq[k + 1]` (none: last arrangement)
/// 2. Find the rightmost `l > k` with `seq[l] > seq[k]`
/// 3. Swap `seq[k]` and `seq[l]`
/// 4. Reverse `seq[k + 1..]`, which is non-increasing at this point
pub fn next_permutation<S>(seq: &mut S) -> bool
where
    S: Sequence + ?Sized,
{
    let len = seq.len();
    if len < 2 {
        return false;
    }

    let last = len - 1;

    let mut k = last - 1;
    while seq.compare(k, k + 1) != Ordering::Less {
        if k == 0 {
            return false;
        }
        k -= 1;
    }

    // Terminates: seq[k + 1] > seq[k].
    let mut l = last;
    while seq.compare(k, l) != Ordering::Less {
        l -= 1;
    }

    seq.swap(k, l);

    let (mut lo, mut hi) = (k + 1, last);
    while lo < hi {
        seq.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }

    true
}

/// [`next_permutation`] on a slice of `Ord` elements.
///
/// # Example
///
/// ```rust
/// use permkit_lex::lex_next;
///
/// let mut p = [0, 1, 2];
/// let mut seen = vec![p];
/// while lex_next(&mut p) {
///     seen.push(p);
/// }
/// assert_eq!(
///     seen,
///     [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]
/// );
/// ```
#[inline]
pub fn lex_next<T: Ord>(items: &mut [T]) -> bool {
    next_permutation(items)
}

/// [`next_permutation`] on a slice ordered by `compare`.
///
/// ```rust
/// use permkit_lex::lex_next_by;
///
/// // Descending order: the "first" arrangement is [3, 2, 1].
/// let mut p = [3, 2, 1];
/// assert!(lex_next_by(&mut p, |a, b| b.cmp(a)));
/// assert_eq!(p, [3, 1, 2]);
/// ```
#[inline]
pub fn lex_next_by<T, F>(items: &mut [T], compare: F) -> bool
where
    F: Fn(&T, &T) -> Ordering,
{
    next_permutation(&mut SortBy::new(items, compare))
}

/// [`next_permutation`] on a slice ordered by a projected key.
///
/// ```rust
/// use permkit_lex::lex_next_by_key;
///
/// let mut jobs = [("build", 1), ("test", 1), ("deploy", 2)];
/// assert!(lex_next_by_key(&mut jobs, |job| job.1));
/// assert_eq!(jobs, [("build", 1), ("deploy", 2), ("test", 1)]);
/// ```
#[inline]
pub fn lex_next_by_key<T, K, F>(items: &mut [T], key: F) -> bool
where
    F: Fn(&T) -> K,
    K: Ord,
{
    next_permutation(&mut SortByKey::new(items, key))
}
