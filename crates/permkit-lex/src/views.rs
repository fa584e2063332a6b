// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Borrowed views that give a slice a custom order.

use core::cmp::Ordering;

use crate::traits::Sequence;

/// A slice ordered by a comparator.
pub struct SortBy<'a, T, F> {
    items: &'a mut [T],
    compare: F,
}

impl<'a, T, F> SortBy<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Wraps `items`, ordering them with `compare`.
    pub fn new(items: &'a mut [T], compare: F) -> Self {
        Self { items, compare }
    }

    /// The wrapped elements in their current arrangement.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..]
    }
}

impl<T, F> Sequence for SortBy<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.compare)(&self.items[i], &self.items[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}

/// A slice ordered by a key extracted from each element.
///
/// Elements with equal keys are interchangeable: they are treated as
/// duplicates of a multiset.
pub struct SortByKey<'a, T, F> {
    items: &'a mut [T],
    key: F,
}

impl<'a, T, K, F> SortByKey<'a, T, F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Wraps `items`, ordering them by `key`.
    pub fn new(items: &'a mut [T], key: F) -> Self {
        Self { items, key }
    }

    /// The wrapped elements in their current arrangement.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..]
    }
}

impl<T, K, F> Sequence for SortByKey<'_, T, F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.key)(&self.items[i]).cmp(&(self.key)(&self.items[j]))
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}
