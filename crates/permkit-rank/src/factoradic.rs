// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Factorial number system (factoradic) digits.
//!
//! For `n` elements, digit `i` has place value `(n-1-i)!` and lies in
//! `[0, n-1-i]`. The digits of a rank are exactly the Lehmer code of the
//! permutation with that rank: digit `i` counts the unused values smaller
//! than the value at position `i`.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::counting::CountingTree;
use crate::error::RankError;
use crate::tracing_helpers::trace_log;

/// Returns `n!`.
///
/// ```rust
/// use num_bigint::BigUint;
/// use permkit_rank::factorial;
///
/// assert_eq!(factorial(0), BigUint::from(1u32));
/// assert_eq!(factorial(5), BigUint::from(120u32));
/// ```
pub fn factorial(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k as u64)
}

/// A rank in `[0, n!)` written in the factorial number system.
///
/// Always holds exactly `n` digits, each within the range of its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Factoradic {
    digits: Vec<usize>,
}

impl Factoradic {
    /// Decomposes `rank` into `n` factoradic digits.
    ///
    /// Repeatedly divides by the radices `1, 2, ..., n`, filling digits from
    /// least to most significant.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::OutOfRange`] if `rank >= n!`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use permkit_rank::Factoradic;
    ///
    /// // 463 = 3*5! + 4*4! + 1*3! + 0*2! + 1*1! + 0*0!
    /// let f = Factoradic::from_rank(&BigUint::from(463u32), 6).expect("Failed to from_rank(..)");
    /// assert_eq!(f.digits(), [3, 4, 1, 0, 1, 0]);
    /// ```
    pub fn from_rank(rank: &BigUint, n: usize) -> Result<Self, RankError> {
        let mut digits = vec![0usize; n];
        let mut rest = rank.clone();

        for (position, digit) in digits.iter_mut().enumerate().rev() {
            let radix = BigUint::from(n - position);
            let (quotient, remainder) = rest.div_rem(&radix);
            *digit = remainder.to_usize().ok_or(RankError::OutOfRange { n })?;
            rest = quotient;
        }

        if !rest.is_zero() {
            return Err(RankError::OutOfRange { n });
        }

        trace_log!(n, ?digits, "factoradic decomposition");

        Ok(Self { digits })
    }

    /// Builds a factoradic number from explicit digits.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InvalidDigit`] for the first digit `digits[i]`
    /// greater than `digits.len() - 1 - i`.
    pub fn from_digits(digits: Vec<usize>) -> Result<Self, RankError> {
        let n = digits.len();

        for (position, &digit) in digits.iter().enumerate() {
            let max = n - 1 - position;
            if digit > max {
                return Err(RankError::InvalidDigit {
                    position,
                    digit,
                    max,
                });
            }
        }

        Ok(Self { digits })
    }

    /// Computes the Lehmer code of `perm`.
    ///
    /// `perm` must be a permutation of `{0, ..., perm.len()-1}`. Other inputs
    /// produce an unspecified (but valid) factoradic number.
    ///
    /// ```rust
    /// use permkit_rank::Factoradic;
    ///
    /// let f = Factoradic::from_permutation(&[2, 0, 3, 1]);
    /// assert_eq!(f.digits(), [2, 0, 1, 0]);
    /// ```
    pub fn from_permutation(perm: &[usize]) -> Self {
        let n = perm.len();
        let mut tree = CountingTree::full(n);

        let digits = perm
            .iter()
            .enumerate()
            .map(|(position, &value)| tree.take(value).min(n - 1 - position))
            .collect();

        Self { digits }
    }

    /// Number of digits, i.e. the size of the permutations this number ranks.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` for the single factoradic number of zero digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Consumes `self`, returning the digits.
    #[inline]
    pub fn into_digits(self) -> Vec<usize> {
        self.digits
    }

    /// Converts back to an integer rank.
    pub fn to_rank(&self) -> BigUint {
        let n = self.digits.len();
        let mut rank = BigUint::zero();

        for (position, &digit) in self.digits.iter().enumerate() {
            rank *= (n - position) as u64;
            rank += digit as u64;
        }

        rank
    }

    /// Builds the permutation whose Lehmer code is `self`.
    ///
    /// Position `i` receives the `(digits[i] + 1)`-th smallest value not yet
    /// placed.
    pub fn to_permutation(&self) -> Vec<usize> {
        let mut tree = CountingTree::full(self.digits.len());

        // Digits are range-checked on construction, so `select` never misses.
        let perm: Vec<usize> = self
            .digits
            .iter()
            .filter_map(|&digit| tree.select(digit))
            .collect();

        debug_assert_eq!(perm.len(), self.digits.len());
        debug_assert_eq!(tree.remaining(), 0);

        perm
    }
}
