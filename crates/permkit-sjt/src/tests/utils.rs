// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared assertions for plain-changes sequences.

use std::collections::HashSet;

use permkit_test_utils::{adjacent_swap_position, factorial};

/// Checks that `states` is a full plain-changes enumeration of `n` items.
pub fn assert_plain_changes<T>(states: &[Vec<T>], n: usize)
where
    T: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    assert_eq!(states.len() as u64, factorial(n), "expected {}! states", n);

    let distinct: HashSet<&Vec<T>> = states.iter().collect();
    assert_eq!(distinct.len(), states.len(), "states repeat");

    for pair in states.windows(2) {
        assert!(
            adjacent_swap_position(&pair[0], &pair[1]).is_some(),
            "{:?} -> {:?} is not an adjacent swap",
            pair[0],
            pair[1]
        );
    }
}
