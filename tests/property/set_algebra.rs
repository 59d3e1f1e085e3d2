//! Algebraic laws of the sorted-set merges.

use proptest::prelude::*;

use talpa::search::set_ops::{difference, intersect, union};

fn sorted_ids() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::btree_set(0u32..500, 0..60).prop_map(|set| set.into_iter().collect())
}

fn is_ascending_and_unique(values: &[u32]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

proptest! {
    #[test]
    fn union_is_commutative(a in sorted_ids(), b in sorted_ids()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
    }

    #[test]
    fn intersect_is_commutative(a in sorted_ids(), b in sorted_ids()) {
        prop_assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn union_is_associative(a in sorted_ids(), b in sorted_ids(), c in sorted_ids()) {
        prop_assert_eq!(union(&union(&a, &b), &c), union(&a, &union(&b, &c)));
    }

    #[test]
    fn intersect_is_associative(a in sorted_ids(), b in sorted_ids(), c in sorted_ids()) {
        prop_assert_eq!(
            intersect(&intersect(&a, &b), &c),
            intersect(&a, &intersect(&b, &c))
        );
    }

    #[test]
    fn difference_with_self_is_empty(a in sorted_ids()) {
        prop_assert!(difference(&a, &a).is_empty());
    }

    /// All three merges keep the output ascending and duplicate-free.
    #[test]
    fn outputs_stay_sorted_sets(a in sorted_ids(), b in sorted_ids()) {
        prop_assert!(is_ascending_and_unique(&union(&a, &b)));
        prop_assert!(is_ascending_and_unique(&intersect(&a, &b)));
        prop_assert!(is_ascending_and_unique(&difference(&a, &b)));
    }

    /// Cross-check against the obvious set-theoretic definitions.
    #[test]
    fn merges_match_naive_membership(a in sorted_ids(), b in sorted_ids()) {
        let in_b = |x: &u32| b.binary_search(x).is_ok();
        let naive_intersection: Vec<u32> = a.iter().copied().filter(|x| in_b(x)).collect();
        let naive_difference: Vec<u32> = a.iter().copied().filter(|x| !in_b(x)).collect();
        prop_assert_eq!(intersect(&a, &b), naive_intersection);
        prop_assert_eq!(difference(&a, &b), naive_difference);
    }
}
