// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::factoradic::{Factoradic, factorial};
use crate::rank::{lex_rank, lex_unrank};

fn shuffled_identity(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    (0..=max_len).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #[test]
    fn unrank_inverts_rank(perm in shuffled_identity(48)) {
        let rank = lex_rank(&perm);
        prop_assert!(rank < factorial(perm.len()));
        prop_assert_eq!(lex_unrank(&rank, perm.len()), Ok(perm));
    }

    #[test]
    fn rank_inverts_unrank(n in 0..40usize, words in prop::collection::vec(any::<u32>(), 1..8)) {
        let rank = BigUint::new(words) % factorial(n);
        let perm = lex_unrank(&rank, n).expect("Failed to lex_unrank(..)");

        let mut sorted = perm.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(lex_rank(&perm), rank);
    }

    #[test]
    fn lehmer_code_agrees_with_rank(perm in shuffled_identity(32)) {
        let f = Factoradic::from_permutation(&perm);
        prop_assert_eq!(f.to_rank(), lex_rank(&perm));
        prop_assert_eq!(Factoradic::from_rank(&lex_rank(&perm), perm.len()), Ok(f));
    }

    #[test]
    fn rank_order_matches_slice_order(a in shuffled_identity(12), seed in any::<u64>()) {
        let n = a.len();
        let b = lex_unrank(&(BigUint::from(seed) % factorial(n)), n).expect("Failed to lex_unrank(..)");
        prop_assert_eq!(a.cmp(&b), lex_rank(&a).cmp(&lex_rank(&b)));
    }
}
