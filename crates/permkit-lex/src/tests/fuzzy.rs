// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use permkit_test_utils::multiset_permutation_count;
use proptest::prelude::*;

use crate::iter::lex_permutations;
use crate::next::{lex_next, lex_next_by_key};

proptest! {
    #[test]
    fn visits_every_multiset_arrangement_once(items in prop::collection::vec(0u8..4, 0..8)) {
        let all: Vec<Vec<u8>> = lex_permutations(items.clone()).collect();

        prop_assert_eq!(all.len() as u64, multiset_permutation_count(&items));
        prop_assert!(all.windows(2).all(|w| w[0] < w[1]));

        let mut descending = items.clone();
        descending.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(all.last(), Some(&descending));
    }

    #[test]
    fn preserves_the_multiset(items in prop::collection::vec(any::<i16>(), 0..12), steps in 0..50usize) {
        let mut p = items.clone();
        for _ in 0..steps {
            if !lex_next(&mut p) {
                break;
            }
        }

        let mut before = items;
        let mut after = p;
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn single_step_is_the_smallest_greater_arrangement(items in prop::collection::vec(0u8..3, 0..7)) {
        let mut p = items.clone();
        let advanced = lex_next(&mut p);

        let greater: Vec<Vec<u8>> = lex_permutations(items.clone())
            .filter(|candidate| candidate > &items)
            .collect();

        match greater.first() {
            Some(expected) => {
                prop_assert!(advanced);
                prop_assert_eq!(&p, expected);
            }
            None => {
                prop_assert!(!advanced);
                prop_assert_eq!(p, items);
            }
        }
    }

    #[test]
    fn key_projection_agrees_with_plain_keys(keys in prop::collection::vec(0u8..4, 0..7)) {
        let mut plain = keys.clone();
        let mut records: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();

        loop {
            let a = lex_next(&mut plain);
            let b = lex_next_by_key(&mut records, |r| r.0);
            prop_assert_eq!(a, b);

            let projected: Vec<u8> = records.iter().map(|r| r.0).collect();
            prop_assert_eq!(&projected, &plain);

            if !a {
                break;
            }
        }
    }
}
