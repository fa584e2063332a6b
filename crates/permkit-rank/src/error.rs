// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for permkit-rank.

use thiserror::Error;

/// Errors from unranking and factoradic construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// A signed rank was below zero.
    #[error("rank is negative")]
    Negative,

    /// The rank is not below `n!`.
    #[error("rank is out of range for permutations of {n} elements (must be < {n}!)")]
    OutOfRange {
        /// Number of elements being permuted.
        n: usize,
    },

    /// A factoradic digit exceeds the radix of its position.
    #[error("factoradic digit {digit} at position {position} exceeds {max}")]
    InvalidDigit {
        /// Position of the offending digit (0 is most significant).
        position: usize,
        /// The digit found.
        digit: usize,
        /// Largest digit allowed at that position.
        max: usize,
    },
}
