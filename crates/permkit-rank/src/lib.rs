// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # permkit_rank
//!
//! Bijective map between permutations of `{0, ..., n-1}` and their position in
//! lexicographic order.
//!
//! ## Core Types
//!
//! - [`Factoradic`]: a rank expressed in the factorial number system (Lehmer code)
//! - [`CountingTree`]: binary counting tree answering "how many unused values are
//!   below `x`" and "which is the k-th unused value" in `O(log n)`
//! - [`RankError`]: rank outside `[0, n!)` or malformed factoradic digits
//!
//! ## Operations
//!
//! - [`lex_rank`]: permutation to rank, `O(n log n)`
//! - [`lex_unrank`]: rank to permutation, `O(n log n)`
//! - [`lex_unrank_signed`]: same as [`lex_unrank`], rejecting negative ranks
//!
//! Ranks are arbitrary precision ([`BigUint`]): `n!` overflows `u64` from
//! `n = 21` on.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use permkit_rank::{lex_rank, lex_unrank};
//!
//! let perm = lex_unrank(&BigUint::from(23u32), 4).expect("Failed to lex_unrank(..)");
//! assert_eq!(perm, [3, 2, 1, 0]);
//! assert_eq!(lex_rank(&perm), BigUint::from(23u32));
//!
//! // 4! = 24 is one past the last rank
//! assert!(lex_unrank(&BigUint::from(24u32), 4).is_err());
//! ```
//!
//! ## Tracing
//!
//! With the `tracing` feature enabled, rank and unrank emit `tracing` events.
//! Without it the logging macros compile to nothing.
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod tracing_helpers;

mod counting;
mod error;
mod factoradic;
mod rank;

pub use num_bigint::{BigInt, BigUint};

pub use counting::CountingTree;
pub use error::RankError;
pub use factoradic::{Factoradic, factorial};
pub use rank::{lex_rank, lex_unrank, lex_unrank_signed};
