// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Binary counting tree over the values `{0, ..., n-1}`.

use alloc::vec;
use alloc::vec::Vec;

/// Tracks which of the values `{0, ..., n-1}` are still available.
///
/// Leaves hold `1` for an available value and `0` otherwise; every internal
/// node holds the sum of its two children. The leaf row is padded to the next
/// power of two, so every query walks exactly `log2(capacity)` levels.
///
/// Used for a single rank or unrank call, then dropped.
///
/// # Example
///
/// ```rust
/// use permkit_rank::CountingTree;
///
/// let mut tree = CountingTree::full(5);
/// assert_eq!(tree.take(3), 3); // 0, 1, 2 are below 3
/// assert_eq!(tree.available_below(4), 3);
/// assert_eq!(tree.select(3), Some(4)); // 0, 1, 2, [4]
/// assert_eq!(tree.remaining(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingTree {
    /// Heap layout: root at 1, children of `i` at `2i` and `2i + 1`,
    /// leaf for value `v` at `capacity + v`. Index 0 is unused.
    nodes: Vec<usize>,
    capacity: usize,
    len: usize,
}

impl CountingTree {
    /// Creates a tree where every value in `{0, ..., n-1}` is available.
    pub fn full(n: usize) -> Self {
        let capacity = n.next_power_of_two();
        let mut nodes = vec![0usize; 2 * capacity];

        for leaf in &mut nodes[capacity..capacity + n] {
            *leaf = 1;
        }
        for i in (1..capacity).rev() {
            nodes[i] = nodes[2 * i] + nodes[2 * i + 1];
        }

        Self {
            nodes,
            capacity,
            len: n,
        }
    }

    /// Number of values the tree was built for.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree was built for zero values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of values still available.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.nodes[1]
    }

    /// Returns `true` if `value` is in range and not yet taken.
    #[inline]
    pub fn is_available(&self, value: usize) -> bool {
        value < self.len && self.nodes[self.capacity + value] == 1
    }

    /// Counts available values strictly less than `value`.
    ///
    /// Values at or past `n` count every remaining value.
    pub fn available_below(&self, value: usize) -> usize {
        if value >= self.len {
            return self.remaining();
        }

        let mut count = 0;
        let mut node = self.capacity + value;
        while node > 1 {
            // Right child: everything under the left sibling is smaller.
            if node & 1 == 1 {
                count += self.nodes[node - 1];
            }
            node >>= 1;
        }

        count
    }

    /// Counts available values below `value`, then marks `value` as taken.
    ///
    /// Taking a value that is out of range or already taken leaves the tree
    /// unchanged.
    pub fn take(&mut self, value: usize) -> usize {
        let below = self.available_below(value);

        if self.is_available(value) {
            let mut node = self.capacity + value;
            while node >= 1 {
                self.nodes[node] -= 1;
                node >>= 1;
            }
        }

        below
    }

    /// Removes and returns the `k`-th smallest available value (0-based).
    ///
    /// Walks top-down, decrementing every node on the path. Returns `None`
    /// when fewer than `k + 1` values remain.
    pub fn select(&mut self, k: usize) -> Option<usize> {
        if k >= self.remaining() {
            return None;
        }

        let mut k = k;
        let mut node = 1;
        while node < self.capacity {
            self.nodes[node] -= 1;
            let left = 2 * node;
            if k < self.nodes[left] {
                node = left;
            } else {
                k -= self.nodes[left];
                node = left + 1;
            }
        }
        self.nodes[node] -= 1;

        Some(node - self.capacity)
    }
}
