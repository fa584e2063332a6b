// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # permkit
//!
//! Enumerate and index permutations of a finite ordered set.
//!
//! | Module    | What it does                                                       |
//! |-----------|--------------------------------------------------------------------|
//! | [`lex`]   | In-place next permutation in lexicographic order (multisets too)   |
//! | [`sjt`]   | Steinhaus-Johnson-Trotter / plain changes: one adjacent swap per step |
//! | [`rank`]  | Lexicographic rank <-> permutation, arbitrary precision            |
//!
//! The families are independent: nothing is shared between calls or
//! generators, and every generator owns its state.
//!
//! # Quick Start
//!
//! ```rust
//! use permkit::lex::lex_next;
//! use permkit::rank::{BigUint, lex_rank, lex_unrank};
//! use permkit::sjt::SjtEven;
//!
//! // Lexicographic successor
//! let mut p = [0, 2, 1];
//! assert!(lex_next(&mut p));
//! assert_eq!(p, [1, 0, 2]);
//!
//! // Its rank, and back
//! let r = lex_rank(&p);
//! assert_eq!(r, BigUint::from(2u32));
//! assert_eq!(lex_unrank(&r, 3).expect("Failed to lex_unrank(..)"), p);
//!
//! // Plain changes
//! let mut sjt = SjtEven::new(3);
//! assert!(sjt.step()); // identity
//! assert!(sjt.step());
//! assert_eq!(sjt.as_slice(), [0, 2, 1]);
//! ```
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events from ranking and unranking.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use permkit_lex as lex;
pub use permkit_rank as rank;
pub use permkit_sjt as sjt;
