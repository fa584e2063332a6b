// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Iterative plain-changes generator with Even's speedup.

use alloc::vec;
use alloc::vec::Vec;

/// Cyclic plain-changes generator over the identity `0..n`.
///
/// Each element carries a direction (`-1` left, `+1` right). An element is
/// *mobile* if it is greater than the neighbour its direction points to. Each
/// step moves the largest mobile element one position, then reverses the
/// direction of every larger element (Even's speedup), so no element's
/// mobility has to be rederived from scratch.
///
/// The arrangement lives between two guard cells holding `n`, greater than
/// every element, so the mobility scan needs no bounds checks.
///
/// # Call sequence
///
/// Per cycle, identical to [`SjtRecursive`](crate::SjtRecursive) over `0..n`:
/// one `true` for the identity, `n! - 1` adjacent swaps returning `true`,
/// then one `false` that resets to the identity. The next call starts the
/// same cycle again.
///
/// # Example
///
/// ```rust
/// use permkit_sjt::SjtEven;
///
/// let mut sjt = SjtEven::new(3);
/// let mut cycle = Vec::new();
/// while sjt.step() {
///     cycle.push(sjt.to_vec());
/// }
///
/// assert_eq!(
///     cycle,
///     [[0, 1, 2], [0, 2, 1], [2, 0, 1], [2, 1, 0], [1, 2, 0], [1, 0, 2]]
/// );
/// assert_eq!(sjt.as_slice(), [0, 1, 2]);
///
/// // Cyclic: the next call begins the same sequence again.
/// assert!(sjt.step());
/// assert!(sjt.step());
/// assert_eq!(sjt.as_slice(), [0, 2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SjtEven {
    /// `[n, p_0, ..., p_{n-1}, n]`.
    cells: Vec<usize>,
    /// Direction of the element currently in each cell. Guard entries unused.
    directions: Vec<isize>,
    /// The next call reports the identity without moving.
    fresh: bool,
}

impl SjtEven {
    /// Creates a generator over `0..n`, positioned at the identity.
    pub fn new(n: usize) -> Self {
        let mut cells = Vec::with_capacity(n + 2);
        cells.push(n);
        cells.extend(0..n);
        cells.push(n);

        Self {
            cells,
            directions: vec![-1; n + 2],
            fresh: true,
        }
    }

    /// Number of elements being permuted.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len() - 2
    }

    /// Returns `true` for `n == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current arrangement.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        let n = self.len();
        &self.cells[1..=n]
    }

    /// The current arrangement, copied.
    pub fn to_vec(&self) -> Vec<usize> {
        self.as_slice().to_vec()
    }

    /// Advances to the next arrangement.
    ///
    /// Returns `false` at the end of a cycle, after resetting to the
    /// identity. Calling again starts the next cycle.
    pub fn step(&mut self) -> bool {
        if self.fresh {
            self.fresh = false;
            return true;
        }

        let n = self.len();

        // Largest mobile element: (cell, value).
        let mut mobile: Option<(usize, usize)> = None;
        for cell in 1..=n {
            let value = self.cells[cell];
            let neighbour = self.cells[cell.wrapping_add_signed(self.directions[cell])];
            if value > neighbour && mobile.is_none_or(|(_, best)| value > best) {
                mobile = Some((cell, value));
            }
        }

        let Some((cell, value)) = mobile else {
            self.reset();
            return false;
        };

        let target = cell.wrapping_add_signed(self.directions[cell]);
        self.cells.swap(cell, target);
        self.directions.swap(cell, target);

        for other in 1..=n {
            if self.cells[other] > value {
                self.directions[other] = -self.directions[other];
            }
        }

        true
    }

    fn reset(&mut self) {
        let n = self.len();
        for (cell, value) in self.cells[1..=n].iter_mut().zip(0..) {
            *cell = value;
        }
        self.directions.fill(-1);
        self.fresh = true;
    }
}
