// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// An indexable, ordered, swappable sequence.
///
/// This is everything [`next_permutation`](crate::next_permutation) needs;
/// the storage behind it stays opaque.
///
/// # Example
///
/// ```rust
/// use core::cmp::Ordering;
/// use permkit_lex::{Sequence, next_permutation};
///
/// /// Two parallel columns permuted together, ordered by the first.
/// struct Columns {
///     keys: Vec<u8>,
///     labels: Vec<&'static str>,
/// }
///
/// impl Sequence for Columns {
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
///
///     fn compare(&self, i: usize, j: usize) -> Ordering {
///         self.keys[i].cmp(&self.keys[j])
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.keys.swap(i, j);
///         self.labels.swap(i, j);
///     }
/// }
///
/// let mut c = Columns { keys: vec![1, 2], labels: vec!["a", "b"] };
/// assert!(next_permutation(&mut c));
/// assert_eq!(c.labels, ["b", "a"]);
/// ```
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Orders the elements at positions `i` and `j`.
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Exchanges the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sequence for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: Ord> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}
