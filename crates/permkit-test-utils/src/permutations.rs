// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Permutation oracles for exhaustive testing.

/// Heap's algorithm for generating all permutations in-place.
fn heap_permute<F>(indices: &mut [usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k <= 1 {
        callback(indices);
        return;
    }

    heap_permute(indices, k - 1, callback);

    for i in 0..k - 1 {
        if k % 2 == 0 {
            indices.swap(i, k - 1);
        } else {
            indices.swap(0, k - 1);
        }
        heap_permute(indices, k - 1, callback);
    }
}

/// Calls `callback` once for each of the `len!` permutations of
/// `[0, 1, ..., len-1]`, in Heap's order.
///
/// `len == 0` yields the single empty permutation.
///
/// # Example
/// ```
/// use permkit_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_perm| {
///     count += 1;
/// });
/// assert_eq!(count, 6); // 3! = 6
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    let mut indices: Vec<usize> = (0..len).collect();
    heap_permute(&mut indices, len, &mut callback);
}

/// All permutations of `[0, 1, ..., len-1]` in lexicographic order.
///
/// # Example
/// ```
/// use permkit_test_utils::sorted_index_permutations;
///
/// assert_eq!(
///     sorted_index_permutations(3),
///     vec![
///         vec![0, 1, 2],
///         vec![0, 2, 1],
///         vec![1, 0, 2],
///         vec![1, 2, 0],
///         vec![2, 0, 1],
///         vec![2, 1, 0],
///     ]
/// );
/// ```
pub fn sorted_index_permutations(len: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    index_permutations(len, |perm| all.push(perm.to_vec()));
    all.sort();
    all
}

/// Returns `Some(i)` if `after` is `before` with positions `i` and `i + 1`
/// exchanged (and the two values differ), `None` otherwise.
///
/// # Example
/// ```
/// use permkit_test_utils::adjacent_swap_position;
///
/// assert_eq!(adjacent_swap_position(&[0, 1, 2], &[0, 2, 1]), Some(1));
/// assert_eq!(adjacent_swap_position(&[0, 1, 2], &[2, 1, 0]), None);
/// assert_eq!(adjacent_swap_position(&[0, 1, 2], &[0, 1, 2]), None);
/// ```
pub fn adjacent_swap_position<T: PartialEq>(before: &[T], after: &[T]) -> Option<usize> {
    if before.len() != after.len() {
        return None;
    }

    let mut diffs = (0..before.len()).filter(|&i| before[i] != after[i]);
    let (i, j) = (diffs.next()?, diffs.next()?);

    let swapped = j == i + 1 && before[i] == after[j] && before[j] == after[i];
    if diffs.next().is_none() && swapped {
        Some(i)
    } else {
        None
    }
}
