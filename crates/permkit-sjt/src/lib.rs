// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # permkit_sjt
//!
//! Steinhaus-Johnson-Trotter ("plain changes") permutation generators.
//!
//! Consecutive permutations differ by exactly one swap of adjacent positions.
//!
//! ## Generators
//!
//! - [`SjtRecursive`]: permutes a caller-owned slice of any element type by
//!   position. One pass over all `n!` arrangements, then exhausted for good.
//! - [`SjtEven`]: owns the identity `0..n` and uses Even's speedup. Cyclic:
//!   after signalling the end of a cycle it starts over.
//!
//! Both report the starting arrangement on their first call, so one cycle of
//! either is `n!` calls returning `true` followed by one call returning
//! `false` that restores the starting order.
//!
//! ## Example
//!
//! ```rust
//! use permkit_sjt::SjtRecursive;
//!
//! let mut items = ['a', 'b', 'c'];
//! let mut seen = Vec::new();
//!
//! let mut sjt = SjtRecursive::new(&mut items);
//! while sjt.step() {
//!     seen.push(sjt.as_slice().iter().collect::<String>());
//! }
//!
//! assert_eq!(seen, ["abc", "acb", "cab", "cba", "bca", "bac"]);
//! assert_eq!(items, ['a', 'b', 'c']);
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

mod even;
mod recursive;

pub use even::SjtEven;
pub use recursive::SjtRecursive;
