//! Property-based tests for priority reordering.
//!
//! These tests use proptest to generate random repository lists and verify
//! that the ranking invariants hold for every request.

#[cfg(test)]
mod proptest_tests {
    use crate::repository::{Repository, RepositoryList};
    use proptest::prelude::*;

    /// A list of 1..=12 uniquely named repositories with contiguous ranks in
    /// shuffled stored order.
    fn contiguous_list() -> impl Strategy<Value = RepositoryList> {
        (1usize..=12)
            .prop_flat_map(|len| Just((0..len).collect::<Vec<_>>()).prop_shuffle())
            .prop_map(|ranks| {
                ranks
                    .into_iter()
                    .enumerate()
                    .map(|(i, rank)| Repository::local(format!("repo-{i}"), rank))
                    .collect::<RepositoryList>()
            })
    }

    /// A list with arbitrary, possibly duplicated or sparse ranks.
    fn arbitrary_list() -> impl Strategy<Value = RepositoryList> {
        prop::collection::vec(0usize..50, 1..12).prop_map(|ranks| {
            ranks
                .into_iter()
                .enumerate()
                .map(|(i, rank)| Repository::local(format!("repo-{i}"), rank))
                .collect::<RepositoryList>()
        })
    }

    fn names_by_rank(list: &RepositoryList) -> Vec<String> {
        list.by_priority().iter().map(|r| r.name.clone()).collect()
    }

    proptest! {
        /// Property: ranks are exactly 0..N after any successful call
        #[test]
        fn ranks_are_contiguous_after_set(
            list in arbitrary_list(),
            pick in any::<prop::sample::Index>(),
            requested in -100i64..100,
        ) {
            let mut list = list;
            let name = list.names()[pick.index(list.len())].to_string();
            list.set_priority(&name, requested).unwrap();
            prop_assert!(list.has_contiguous_priorities());
        }

        /// Property: the target ends up exactly at the clamped rank
        #[test]
        fn target_lands_on_clamped_rank(
            list in contiguous_list(),
            pick in any::<prop::sample::Index>(),
            requested in -100i64..100,
        ) {
            let mut list = list;
            let len = list.len();
            let name = list.names()[pick.index(len)].to_string();
            let rank = list.set_priority(&name, requested).unwrap();

            let expected = requested.clamp(0, len as i64 - 1) as usize;
            prop_assert_eq!(rank, expected);
            prop_assert_eq!(list.get(&name).map(|r| r.priority), Some(expected));
        }

        /// Property: negative requests behave like a request for rank 0
        #[test]
        fn negative_request_equals_zero(
            list in contiguous_list(),
            pick in any::<prop::sample::Index>(),
            requested in i64::MIN..0,
        ) {
            let name = list.names()[pick.index(list.len())].to_string();
            let mut clamped = list.clone();
            let mut zero = list;
            clamped.set_priority(&name, requested).unwrap();
            zero.set_priority(&name, 0).unwrap();
            prop_assert_eq!(clamped, zero);
        }

        /// Property: requests at or past the end behave like a request for N-1
        #[test]
        fn oversized_request_equals_last(
            list in contiguous_list(),
            pick in any::<prop::sample::Index>(),
            extra in 0i64..1_000,
        ) {
            let len = list.len();
            let name = list.names()[pick.index(len)].to_string();
            let mut clamped = list.clone();
            let mut last = list;
            clamped.set_priority(&name, len as i64 + extra).unwrap();
            last.set_priority(&name, len as i64 - 1).unwrap();
            prop_assert_eq!(clamped, last);
        }

        /// Property: entries other than the target keep their relative order
        #[test]
        fn untouched_entries_keep_relative_order(
            list in contiguous_list(),
            pick in any::<prop::sample::Index>(),
            requested in -20i64..20,
        ) {
            let mut list = list;
            let name = list.names()[pick.index(list.len())].to_string();
            let before: Vec<String> = names_by_rank(&list)
                .into_iter()
                .filter(|n| *n != name)
                .collect();

            list.set_priority(&name, requested).unwrap();

            let after: Vec<String> = names_by_rank(&list)
                .into_iter()
                .filter(|n| *n != name)
                .collect();
            prop_assert_eq!(before, after);
        }
    }
}
