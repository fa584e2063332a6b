// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # permkit_lex
//!
//! In-place next permutation in lexicographic order.
//!
//! Position 0 is the most significant. Elements need not be distinct: for a
//! multiset, each distinct arrangement is produced exactly once.
//!
//! ## Core API
//!
//! - [`Sequence`]: the capability the algorithm runs on (`len`, `compare`, `swap`)
//! - [`next_permutation`]: the algorithm, generic over any [`Sequence`]
//! - [`lex_next`], [`lex_next_by`], [`lex_next_by_key`]: slice shorthands
//! - [`SortBy`], [`SortByKey`]: comparator and key-projection views
//! - [`LexPermutations`]: iterator over owned snapshots
//!
//! ## Example
//!
//! ```rust
//! use permkit_lex::lex_next;
//!
//! let mut p = [1, 1, 2];
//! assert!(lex_next(&mut p));
//! assert_eq!(p, [1, 2, 1]);
//! assert!(lex_next(&mut p));
//! assert_eq!(p, [2, 1, 1]);
//!
//! // Last arrangement: left unchanged
//! assert!(!lex_next(&mut p));
//! assert_eq!(p, [2, 1, 1]);
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod iter;
mod next;
mod traits;
mod views;

pub use iter::{LexPermutations, lex_permutations};
pub use next::{lex_next, lex_next_by, lex_next_by_key, next_permutation};
pub use traits::Sequence;
pub use views::{SortBy, SortByKey};
