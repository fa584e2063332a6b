// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Loopless recursive plain-changes generator.
//!
//! The size-`m` generator sweeps a single element across its window of `m`
//! positions, one adjacent swap per call. At either end of a sweep it hands
//! the call down to the size-`(m-1)` generator, whose window is the `m-1`
//! positions the sweeping element is not in.
//!
//! The chain of generators is a vector of [`Level`] records, one per size.
//! A call descends from the top level until some level either swaps or
//! reports exhaustion, then walks back up applying what each level does
//! after its sub-generator returns.

use alloc::vec::Vec;

#[derive(Debug, Clone, Copy)]
struct Level {
    /// False once the whole chain below (and including) this level is done.
    active: bool,
    /// Boundary index of the sweep, in `[0, size]`.
    index: usize,
    /// +1 or -1.
    direction: isize,
    /// Last descent came from the left boundary.
    from_left: bool,
    /// Window start at the last left-boundary descent.
    offset: usize,
}

impl Level {
    fn new(size: usize) -> Self {
        Self {
            active: true,
            index: size,
            direction: -1,
            from_left: false,
            offset: 0,
        }
    }
}

/// Plain-changes generator over a borrowed slice.
///
/// Elements are moved by position only and never compared, so `T` is
/// unconstrained.
///
/// # Call sequence
///
/// - call 1 returns `true` and leaves the slice as given;
/// - calls 2 to `n!` each swap one adjacent pair and return `true`;
/// - call `n! + 1` restores the original order and returns `false`;
/// - every later call returns `false` without touching the slice.
///
/// For `n` of 0 or 1 that is one `true`, then `false` forever. To enumerate
/// again, build a new generator.
///
/// # Example
///
/// ```rust
/// use permkit_sjt::SjtRecursive;
///
/// let mut items = [10, 20];
/// let mut sjt = SjtRecursive::new(&mut items);
///
/// assert!(sjt.step());
/// assert_eq!(sjt.as_slice(), [10, 20]);
/// assert!(sjt.step());
/// assert_eq!(sjt.as_slice(), [20, 10]);
/// assert!(!sjt.step());
/// assert_eq!(sjt.as_slice(), [10, 20]);
/// assert!(sjt.is_exhausted());
/// ```
#[derive(Debug)]
pub struct SjtRecursive<'a, T> {
    items: &'a mut [T],
    /// `levels[m - 1]` drives the size-`m` window; `levels[0]` is the base.
    levels: Vec<Level>,
    exhausted: bool,
}

impl<'a, T> SjtRecursive<'a, T> {
    /// Creates a generator that permutes `items` in place.
    pub fn new(items: &'a mut [T]) -> Self {
        let levels = (1..=items.len().max(1)).map(Level::new).collect();
        Self {
            items,
            levels,
            exhausted: false,
        }
    }

    /// Number of elements being permuted.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when permuting an empty slice.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current arrangement.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items[..]
    }

    /// Returns `true` once [`step`](Self::step) has returned `false`.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Advances to the next arrangement.
    ///
    /// Returns `false` once all `n!` arrangements have been reported, see the
    /// type-level docs for the exact call sequence.
    pub fn step(&mut self) -> bool {
        let n = self.items.len();
        let mut size = n;
        let mut offset = 0;

        let result = loop {
            if size <= 1 {
                let base = &mut self.levels[0];
                let result = base.active;
                base.active = false;
                break result;
            }

            let level = &mut self.levels[size - 1];
            if !level.active {
                break false;
            }

            if level.index == size {
                level.index = size - 1;
                level.direction = -1;
                level.from_left = false;
                size -= 1;
            } else if level.index == 0 {
                level.index = 1;
                level.direction = 1;
                level.from_left = true;
                level.offset = offset;
                offset += 1;
                size -= 1;
            } else {
                let at = offset + level.index;
                self.items.swap(at - 1, at);
                level.index = level.index.wrapping_add_signed(level.direction);
                break true;
            }
        };

        // Every level above `size` descended into the one below it. Unwind
        // innermost first.
        for level in &mut self.levels[size..n] {
            level.active = result;
            if level.from_left && !result {
                self.items.swap(level.offset, level.offset + 1);
            }
        }

        self.exhausted = !result;
        result
    }
}
