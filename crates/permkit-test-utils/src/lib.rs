// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test oracles for permkit crates.
//!
//! Everything here is independent of the algorithms
//! under test: Heap's algorithm for enumeration, `u64` factorials, plain
//! slice comparisons.
//!
//! ## License
//!
//! GPL-3.0-only

mod counting;
mod permutations;

pub use counting::{factorial, multiset_permutation_count};
pub use permutations::{adjacent_swap_position, index_permutations, sorted_index_permutations};
