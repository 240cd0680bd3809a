//! Algebraic laws of the canonical union.

use proptest::prelude::{Just, Strategy, prop_assert, prop_assert_eq, prop_oneof, proptest};
use scitype_core::ScientificType;

fn atom() -> impl Strategy<Value = ScientificType> {
    prop_oneof![
        Just(ScientificType::Known),
        Just(ScientificType::Infinite),
        Just(ScientificType::Continuous),
        Just(ScientificType::Count),
        Just(ScientificType::Finite),
        (1usize..5).prop_map(ScientificType::Multiclass),
        (1usize..5).prop_map(ScientificType::OrderedFactor),
        Just(ScientificType::Image),
        (1usize..3, 1usize..3).prop_map(|(width, height)| ScientificType::GrayImage { width, height }),
        Just(ScientificType::Unknown),
        Just(ScientificType::Missing),
    ]
}

fn scitype() -> impl Strategy<Value = ScientificType> {
    prop_oneof![
        atom(),
        (atom(), atom()).prop_map(|(a, b)| a.union(b)),
    ]
}

proptest! {
    #[test]
    fn union_is_commutative(a in scitype(), b in scitype()) {
        prop_assert_eq!(a.clone().union(b.clone()), b.union(a));
    }

    #[test]
    fn union_is_associative(a in scitype(), b in scitype(), c in scitype()) {
        prop_assert_eq!(
            a.clone().union(b.clone()).union(c.clone()),
            a.union(b.union(c))
        );
    }

    #[test]
    fn union_is_idempotent(a in scitype()) {
        prop_assert_eq!(a.clone().union(a.clone()), a);
    }

    #[test]
    fn members_are_sub_cases_of_their_union(a in scitype(), b in scitype()) {
        let union = a.clone().union(b.clone());
        prop_assert!(a.is_subtype_of(&union));
        prop_assert!(b.is_subtype_of(&union));
    }
}
