//! Property-based tests for set algebra
//!
//! This module tests the laws the set operations must satisfy:
//! - Commutativity: a ∪ b = b ∪ a
//! - Absorption: a ∩ (a ∪ b) = a
//! - Self difference: a − a = ∅
//! - Symmetric difference: a △ b = (a − b) ∪ (b − a)
//! - Containment: a ∪ b contains a
//! - Kind safety: mismatched operands are refused and left untouched

#![allow(special_module_name)]

use kindset::prelude::*;
use proptest::prelude::*;

use lib::*;

proptest! {
    #![proptest_config(algebra_config())]

    /// Property: a ∪ b = b ∪ a
    #[test]
    fn union_is_commutative(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);

        prop_assert!(assert_union_commutativity(&a, &b));
    }

    /// Property: a ∩ (a ∪ b) = a
    #[test]
    fn intersection_absorbs_union(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);

        prop_assert!(assert_absorption(&a, &b));
    }

    /// Property: a − a = ∅
    #[test]
    fn self_difference_is_empty(elements in elements_strategy()) {
        let a = int_set(&elements);

        prop_assert!(a.difference(&a).unwrap().is_empty());
    }

    /// Property: a △ b = (a − b) ∪ (b − a)
    #[test]
    fn symmetric_difference_matches_definition(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);

        prop_assert!(assert_symmetric_difference_definition(&a, &b));
    }

    /// Property: a ∪ b contains every element of a, and a lies within a ∪ b
    #[test]
    fn union_contains_operands(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);
        let union = a.union(&b).unwrap();

        prop_assert!(union.is_subset(&a).unwrap());
        prop_assert!(union.is_subset(&b).unwrap());
        prop_assert!(a.is_superset(&union).unwrap());
    }

    /// Property: equality holds exactly when both sets contain each other
    #[test]
    fn equality_is_mutual_containment(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);

        let mutual = a.is_subset(&b).unwrap() && b.is_subset(&a).unwrap();
        prop_assert_eq!(a.is_equal(&b).unwrap(), mutual);
        prop_assert_eq!(a.is_equal(&b).unwrap(), dedup_sorted(&elements1) == dedup_sorted(&elements2));
    }

    /// Property: set contents match a reference model after add and remove
    #[test]
    fn add_remove_matches_model(
        added in elements_strategy(),
        removed in elements_strategy(),
    ) {
        let set = int_set(&[]);
        set.add(added.iter().copied()).unwrap();
        set.remove(removed.iter().copied()).unwrap();

        let expected: Vec<i64> = dedup_sorted(&added)
            .into_iter()
            .filter(|element| !removed.contains(element))
            .collect();
        prop_assert_eq!(sorted_ints(&set), expected);
    }

    /// Property: merge then separate leaves a − b
    #[test]
    fn merge_then_separate_is_difference(
        elements1 in elements_strategy(),
        elements2 in elements_strategy(),
    ) {
        let a = int_set(&elements1);
        let b = int_set(&elements2);
        let expected = a.difference(&b).unwrap();

        a.merge(&b).unwrap();
        prop_assert!(a.is_subset(&b).unwrap());
        a.separate(&b).unwrap();

        prop_assert_eq!(sorted_ints(&a), sorted_ints(&expected));
    }

    /// Property: operands of differing kinds are refused and left unchanged
    #[test]
    fn mismatched_kinds_are_refused(
        left in kind_strategy(),
        right in kind_strategy(),
    ) {
        prop_assume!(left != right);

        let a = Set::<Value>::with_items(left, [sample_value(left)]).unwrap();
        let b = Set::<Value>::with_items(right, [sample_value(right)]).unwrap();

        let expected = SetError::KindMismatch { left, right };
        prop_assert_eq!(a.union(&b).unwrap_err(), expected);
        prop_assert_eq!(a.merge(&b).unwrap_err(), expected);
        prop_assert_eq!(a.separate(&b).unwrap_err(), expected);
        prop_assert_eq!(a.len(), 1);
        prop_assert_eq!(b.len(), 1);
    }

    /// Property: wrongly-kinded adds fail without changing the size
    #[test]
    fn wrongly_kinded_add_keeps_size(
        elements in elements_strategy(),
        kind in kind_strategy(),
    ) {
        prop_assume!(kind != Kind::Int);

        let set = int_set(&elements);
        let before = set.len();

        let err = set.add([sample_value(kind)]).unwrap_err();
        prop_assert_eq!(err, SetError::TypeViolation { found: kind, expected: Kind::Int });
        prop_assert_eq!(set.len(), before);
    }
}
