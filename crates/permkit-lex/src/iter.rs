// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::next::lex_next;

/// Iterator over owned snapshots of successive arrangements in lexicographic
/// order.
///
/// The first item is the starting arrangement itself; the last is the
/// non-increasing arrangement.
#[derive(Debug, Clone)]
pub struct LexPermutations<T> {
    current: Vec<T>,
    exhausted: bool,
}

impl<T: Ord + Clone> LexPermutations<T> {
    /// Starts at `items` as given, visiting only the arrangements that follow it.
    pub fn starting_at(items: Vec<T>) -> Self {
        Self {
            current: items,
            exhausted: false,
        }
    }
}

impl<T: Ord + Clone> Iterator for LexPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let snapshot = self.current.clone();
        self.exhausted = !lex_next(&mut self.current);

        Some(snapshot)
    }
}

impl<T: Ord + Clone> FusedIterator for LexPermutations<T> {}

/// Every distinct arrangement of `items`, in increasing lexicographic order.
///
/// # Example
///
/// ```rust
/// use permkit_lex::lex_permutations;
///
/// let all: Vec<_> = lex_permutations(vec!['b', 'a', 'b']).collect();
/// assert_eq!(
///     all,
///     [vec!['a', 'b', 'b'], vec!['b', 'a', 'b'], vec!['b', 'b', 'a']]
/// );
/// ```
pub fn lex_permutations<T: Ord + Clone>(items: Vec<T>) -> LexPermutations<T> {
    let mut items = items;
    items.sort();
    LexPermutations::starting_at(items)
}
