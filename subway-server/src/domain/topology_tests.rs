//! Unit tests for chain insertion and removal.

use super::*;
use proptest::prelude::*;

fn station(id: u64) -> Station {
    let name = match id {
        1 => "Gangnam",
        2 => "Yeoksam",
        3 => "Seolleung",
        4 => "Samseong",
        5 => "Seocho",
        6 => "Jamsil",
        _ => "Elsewhere",
    };
    Station::new(StationId(id), name)
}

fn d(v: u32) -> Distance {
    Distance::new(v).unwrap()
}

fn chain_of(links: &[(u64, u64, u32)]) -> Chain {
    let mut chain = Chain::new();
    for &(up, down, distance) in links {
        chain.insert(station(up), station(down), d(distance)).unwrap();
    }
    chain
}

fn station_ids(chain: &Chain) -> Vec<u64> {
    chain.stations().iter().map(|s| s.id().0).collect()
}

fn distances(chain: &Chain) -> Vec<u32> {
    chain.iter().map(|s| s.distance().get()).collect()
}

fn snapshot(chain: &Chain) -> (Vec<u64>, Vec<u32>) {
    (station_ids(chain), distances(chain))
}

#[test]
fn first_segment_into_empty_chain() {
    let chain = Chain::new();
    assert_eq!(chain.classify(&station(1), &station(3), d(10)), Placement::First);

    let chain = chain_of(&[(1, 3, 10)]);
    assert_eq!(station_ids(&chain), vec![1, 3]);
    assert!(chain.is_well_formed());
}

#[test]
fn split_at_up_station() {
    // Gangnam -> Seolleung (10), then Gangnam -> Yeoksam (3).
    let mut chain = chain_of(&[(1, 3, 10)]);
    let insertion = chain.insert(station(1), station(2), d(3)).unwrap();

    assert_eq!(insertion, Insertion::Split);
    assert_eq!(station_ids(&chain), vec![1, 2, 3]);
    assert_eq!(distances(&chain), vec![3, 7]);
    assert_eq!(chain.total_distance(), 10);
    assert!(chain.is_well_formed());
}

#[test]
fn split_relinks_predecessor() {
    // Gangnam -> Yeoksam -> Samseong, split Yeoksam -> Samseong at Seolleung.
    let mut chain = chain_of(&[(1, 2, 4), (2, 4, 9)]);
    chain.insert(station(2), station(3), d(5)).unwrap();

    assert_eq!(station_ids(&chain), vec![1, 2, 3, 4]);
    assert_eq!(distances(&chain), vec![4, 5, 4]);
    assert!(chain.is_well_formed());
}

#[test]
fn split_head_segment_becomes_new_head() {
    let mut chain = chain_of(&[(1, 3, 10), (3, 4, 2)]);
    chain.insert(station(1), station(2), d(6)).unwrap();

    assert_eq!(chain.first_station(), Some(&station(1)));
    assert_eq!(station_ids(&chain), vec![1, 2, 3, 4]);
    assert_eq!(distances(&chain), vec![6, 4, 2]);
}

#[test]
fn prepend_before_first_station() {
    let mut chain = chain_of(&[(1, 3, 10)]);
    assert_eq!(chain.classify(&station(5), &station(1), d(3)), Placement::Prepend);

    let insertion = chain.insert(station(5), station(1), d(3)).unwrap();
    assert_eq!(insertion, Insertion::Prepend);
    assert_eq!(station_ids(&chain), vec![5, 1, 3]);
    assert_eq!(chain.total_distance(), 13);
}

#[test]
fn append_after_last_station() {
    let mut chain = chain_of(&[(1, 3, 7)]);
    let insertion = chain.insert(station(3), station(4), d(3)).unwrap();

    assert_eq!(insertion, Insertion::Append);
    assert_eq!(station_ids(&chain), vec![1, 3, 4]);
    assert_eq!(chain.last_station(), Some(&station(4)));
}

#[test]
fn split_longer_than_existing_rejected() {
    let mut chain = chain_of(&[(1, 3, 10)]);
    let before = snapshot(&chain);

    let err = chain.insert(station(1), station(2), d(13)).unwrap_err();
    assert_eq!(
        err,
        TopologyError::SegmentTooLong {
            requested: 13,
            existing: 10
        }
    );
    assert_eq!(snapshot(&chain), before);
}

#[test]
fn split_equal_to_existing_rejected() {
    let mut chain = chain_of(&[(1, 3, 10)]);
    let before = snapshot(&chain);

    // Re-adding the very same segment is caught by the length rule.
    let err = chain.insert(station(1), station(3), d(10)).unwrap_err();
    assert!(matches!(err, TopologyError::SegmentTooLong { .. }));
    assert_eq!(snapshot(&chain), before);
}

#[test]
fn split_onto_existing_down_station_rejected() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5)]);
    let before = snapshot(&chain);

    let err = chain.insert(station(1), station(3), d(2)).unwrap_err();
    assert_eq!(err, TopologyError::DuplicateDownStation(StationId(3)));
    assert_eq!(snapshot(&chain), before);
}

#[test]
fn split_back_to_head_rejected() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5)]);
    let before = snapshot(&chain);

    let err = chain.insert(station(2), station(1), d(2)).unwrap_err();
    assert_eq!(err, TopologyError::InvalidSegmentPlacement);
    assert_eq!(snapshot(&chain), before);
}

#[test]
fn new_segment_into_interior_down_station_rejected() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5)]);
    let err = chain.insert(station(5), station(2), d(1)).unwrap_err();
    assert_eq!(err, TopologyError::DuplicateDownStation(StationId(2)));
}

#[test]
fn closing_a_cycle_rejected() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5)]);
    let before = snapshot(&chain);

    let err = chain.insert(station(3), station(1), d(4)).unwrap_err();
    assert_eq!(err, TopologyError::InvalidSegmentPlacement);
    assert_eq!(snapshot(&chain), before);
}

#[test]
fn unattached_segment_rejected() {
    let mut chain = chain_of(&[(1, 2, 5)]);
    assert_eq!(
        chain.classify(&station(4), &station(5), d(1)),
        Placement::Reject(TopologyError::InvalidSegmentPlacement)
    );
    assert!(chain.insert(station(4), station(5), d(1)).is_err());
    assert_eq!(chain.len(), 1);
}

#[test]
fn self_loop_rejected() {
    let mut chain = Chain::new();
    let err = chain.insert(station(1), station(1), d(1)).unwrap_err();
    assert_eq!(err, TopologyError::SameStation(StationId(1)));
    assert!(chain.is_empty());
}

#[test]
fn removing_sole_segment_rejected() {
    let mut chain = chain_of(&[(1, 3, 10)]);
    for target in [1, 3] {
        let err = chain
            .remove_station(StationId(target), RemovalPolicy::Merge)
            .unwrap_err();
        assert_eq!(err, TopologyError::CannotDeleteSoleSegment);
    }
    assert_eq!(station_ids(&chain), vec![1, 3]);
}

#[test]
fn removing_unknown_station_rejected() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5)]);
    let err = chain
        .remove_station(StationId(9), RemovalPolicy::Merge)
        .unwrap_err();
    assert_eq!(err, TopologyError::StationNotInLine(StationId(9)));
}

#[test]
fn remove_tail_station() {
    let mut chain = chain_of(&[(1, 3, 7), (3, 4, 3)]);
    let removal = chain.remove_station(StationId(4), RemovalPolicy::Merge).unwrap();

    assert_eq!(removal, Removal::Tail);
    assert_eq!(station_ids(&chain), vec![1, 3]);
    assert!(chain.is_well_formed());
}

#[test]
fn remove_head_station() {
    let mut chain = chain_of(&[(1, 3, 7), (3, 4, 3)]);
    let removal = chain.remove_station(StationId(1), RemovalPolicy::Merge).unwrap();

    assert_eq!(removal, Removal::Head);
    assert_eq!(station_ids(&chain), vec![3, 4]);
    assert_eq!(chain.total_distance(), 3);
}

#[test]
fn remove_middle_station_merges_neighbours() {
    // Gangnam -(10)- Seolleung -(5)- Samseong
    let mut chain = chain_of(&[(1, 3, 10), (3, 4, 5)]);
    let removal = chain.remove_station(StationId(3), RemovalPolicy::Merge).unwrap();

    assert_eq!(removal, Removal::Merge);
    assert_eq!(station_ids(&chain), vec![1, 4]);
    assert_eq!(distances(&chain), vec![15]);
}

#[test]
fn merge_overflow_leaves_chain_unchanged() {
    let mut chain = chain_of(&[(1, 3, u32::MAX), (3, 4, 5)]);
    let before = snapshot(&chain);
    let total = chain.total_distance();

    let err = chain
        .remove_station(StationId(3), RemovalPolicy::Merge)
        .unwrap_err();

    assert_eq!(
        err,
        TopologyError::DistanceOverflow {
            first: u32::MAX,
            second: 5
        }
    );
    assert_eq!(snapshot(&chain), before);
    assert_eq!(chain.total_distance(), total);
    assert_eq!(chain.len(), 2);
    assert!(chain.is_well_formed());
}

#[test]
fn merge_relinks_predecessor() {
    // Gangnam -(10)- Seolleung -(5)- Samseong -(4)- Jamsil, remove Samseong.
    let mut chain = chain_of(&[(1, 3, 10), (3, 4, 5), (4, 6, 4)]);
    chain.remove_station(StationId(4), RemovalPolicy::Merge).unwrap();

    assert_eq!(station_ids(&chain), vec![1, 3, 6]);
    assert_eq!(distances(&chain), vec![10, 9]);
    assert_eq!(
        chain.segment_to(StationId(6)).map(|s| s.up().id()),
        Some(StationId(3))
    );
    assert!(chain.is_well_formed());
}

#[test]
fn tail_only_policy_rejects_non_terminal_station() {
    let mut chain = chain_of(&[(1, 3, 10), (3, 4, 5)]);
    let before = snapshot(&chain);

    for target in [1, 3] {
        let err = chain
            .remove_station(StationId(target), RemovalPolicy::TailOnly)
            .unwrap_err();
        assert_eq!(
            err,
            TopologyError::CannotDeleteNonTerminalStation(StationId(target))
        );
    }
    assert_eq!(snapshot(&chain), before);

    let removal = chain
        .remove_station(StationId(4), RemovalPolicy::TailOnly)
        .unwrap();
    assert_eq!(removal, Removal::Tail);
    assert_eq!(station_ids(&chain), vec![1, 3]);
}

#[test]
fn edits_after_removal_reuse_storage() {
    let mut chain = chain_of(&[(1, 2, 5), (2, 3, 5), (3, 4, 5)]);
    chain.remove_station(StationId(2), RemovalPolicy::Merge).unwrap();
    chain.insert(station(1), station(5), d(4)).unwrap();
    chain.insert(station(4), station(6), d(1)).unwrap();

    assert_eq!(station_ids(&chain), vec![1, 5, 3, 4, 6]);
    assert_eq!(distances(&chain), vec![4, 6, 5, 1]);
    assert!(chain.is_well_formed());
}

#[derive(Debug, Clone)]
enum Edit {
    Insert { up: u64, down: u64, distance: u32 },
    Remove { station: u64, tail_only: bool },
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => (1u64..8, 1u64..8, 1u32..20)
            .prop_map(|(up, down, distance)| Edit::Insert { up, down, distance }),
        1 => (1u64..8, any::<bool>())
            .prop_map(|(station, tail_only)| Edit::Remove { station, tail_only }),
    ]
}

proptest! {
    /// Every edit keeps the chain a simple path and accounts for length
    /// and distance exactly; failed edits change nothing.
    #[test]
    fn edits_preserve_invariants(edits in proptest::collection::vec(edit(), 1..40)) {
        let mut chain = Chain::new();

        for edit in edits {
            let before = snapshot(&chain);
            let len = chain.len();
            let total = chain.total_distance();

            match edit {
                Edit::Insert { up, down, distance } => {
                    match chain.insert(station(up), station(down), d(distance)) {
                        Ok(Insertion::Split) => {
                            prop_assert_eq!(chain.len(), len + 1);
                            prop_assert_eq!(chain.total_distance(), total);
                        }
                        Ok(_) => {
                            prop_assert_eq!(chain.len(), len + 1);
                            prop_assert_eq!(chain.total_distance(), total + u64::from(distance));
                        }
                        Err(_) => prop_assert_eq!(snapshot(&chain), before),
                    }
                }
                Edit::Remove { station: target, tail_only } => {
                    let policy = if tail_only { RemovalPolicy::TailOnly } else { RemovalPolicy::Merge };
                    match chain.remove_station(StationId(target), policy) {
                        Ok(Removal::Merge) => {
                            prop_assert_eq!(chain.len(), len - 1);
                            prop_assert_eq!(chain.total_distance(), total);
                        }
                        Ok(_) => {
                            prop_assert_eq!(chain.len(), len - 1);
                            prop_assert!(chain.total_distance() < total);
                        }
                        Err(_) => prop_assert_eq!(snapshot(&chain), before),
                    }
                    prop_assert!(len <= 1 || !chain.is_empty());
                }
            }

            prop_assert!(chain.is_well_formed());
            let stations = chain.stations();
            if !chain.is_empty() {
                prop_assert_eq!(stations.len(), chain.len() + 1);
            }
            let unique: std::collections::HashSet<_> = stations.iter().map(Station::id).collect();
            prop_assert_eq!(unique.len(), stations.len());
        }
    }

    /// A split keeps `new + remainder == whole`.
    #[test]
    fn split_conserves_distance(whole in 2u32..1000, cut in 1u32..1000) {
        prop_assume!(cut < whole);
        let mut chain = chain_of(&[(1, 3, whole)]);
        chain.insert(station(1), station(2), d(cut)).unwrap();
        prop_assert_eq!(distances(&chain), vec![cut, whole - cut]);
    }
}
