//! Property-based tests for the sequence adapters.

use std::collections::{HashMap, HashSet};

use clave_ext_seq::{Compare, SeqExt};
use proptest::prelude::*;

proptest! {
    /// distinct_by yields exactly one item per distinct key.
    #[test]
    fn distinct_by_one_per_key(items in prop::collection::vec(0i32..20, 0..60)) {
        let result: Vec<_> = items.iter().distinct_by(|n| **n % 7).collect();
        let keys: HashSet<_> = items.iter().map(|n| n % 7).collect();

        prop_assert_eq!(result.len(), keys.len());
    }

    /// The surviving item for each key is its first occurrence.
    #[test]
    fn distinct_by_first_wins(items in prop::collection::vec(0i32..20, 0..60)) {
        let result: Vec<_> = items.iter().copied().distinct_by(|n| n % 5).collect();

        for kept in &result {
            let first = items.iter().find(|n| *n % 5 == kept % 5).copied();
            prop_assert_eq!(first, Some(*kept));
        }
    }

    /// except_by is an order- and multiplicity-preserving set difference.
    #[test]
    fn except_by_is_filtered_source(
        source in prop::collection::vec(0i32..30, 0..60),
        second in prop::collection::vec(0i32..30, 0..20),
    ) {
        let excluded: HashSet<_> = second.iter().map(|n| n / 2).collect();
        let expected: Vec<_> = source.iter().copied().filter(|n| !excluded.contains(&(n / 2))).collect();

        let result: Vec<_> = source.iter().copied().except_by(second.iter().copied(), |n| n / 2).collect();
        prop_assert_eq!(result, expected);
    }

    /// where_not and filter partition the source.
    #[test]
    fn where_not_complements_filter(items in prop::collection::vec(any::<i16>(), 0..80)) {
        let kept: Vec<_> = items.iter().filter(|n| **n > 0).copied().collect();
        let dropped: Vec<_> = items.iter().where_not(|n| **n > 0).copied().collect();

        prop_assert_eq!(kept.len() + dropped.len(), items.len());

        let mut recombined = kept;
        recombined.extend(dropped);
        recombined.sort_unstable();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(recombined, sorted);
    }

    /// not_any agrees with emptiness and with any().
    #[test]
    fn not_any_agrees_with_any(items in prop::collection::vec(any::<u8>(), 0..20), needle in any::<u8>()) {
        prop_assert_eq!(items.iter().not_any(), items.is_empty());
        prop_assert_eq!(
            items.iter().not_any_matching(|n| **n == needle),
            !items.contains(&needle)
        );
    }

    /// Group count matches the number of distinct derived properties, and
    /// every item lands in exactly one group.
    #[test]
    fn group_by_prop_counts(items in prop::collection::vec(0u32..100, 0..60)) {
        let groups: Vec<_> = items.iter().copied().group_by_prop(|n| *n, |k| k / 10).collect();
        let props: HashSet<_> = items.iter().map(|n| n / 10).collect();

        prop_assert_eq!(groups.len(), props.len());
        prop_assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), items.len());

        for group in &groups {
            let first = items.iter().find(|n| *n / 10 == group.key() / 10).copied();
            prop_assert_eq!(first, Some(*group.key()));
        }
    }

    /// Equal projected keys imply equality and equal hashes.
    #[test]
    fn key_eq_hash_contract(a in any::<i64>(), b in any::<i64>()) {
        let eq = Compare::<i64>::using(|n| n.rem_euclid(16));

        if eq.key(&a) == eq.key(&b) {
            prop_assert!(eq.equals(&a, &b));
            prop_assert_eq!(eq.hash(&a), eq.hash(&b));
        } else {
            prop_assert!(!eq.equals(&a, &b));
        }
    }

    /// inner_join produces one output per matching (left, right) pair.
    #[test]
    fn inner_join_pair_count(
        left in prop::collection::vec(0u8..10, 0..30),
        right in prop::collection::vec(0u8..10, 0..30),
    ) {
        let mut right_counts: HashMap<u8, usize> = HashMap::new();
        for r in &right {
            *right_counts.entry(*r).or_default() += 1;
        }
        let expected: usize = left.iter().map(|l| right_counts.get(l).copied().unwrap_or(0)).sum();

        let joined = left
            .iter()
            .inner_join(right.iter(), |l| **l, |r| **r, |l, r| (**l, **r))
            .count();

        prop_assert_eq!(joined, expected);
    }
}
