//! Tests for the cross-floor cluster search
//!
//! The search is a seeded heuristic, so results are compared both against an
//! exhaustive search over every combination and against a straightforward
//! restatement of the seeded search itself.

use rand::{rngs::StdRng, SeedableRng};
use room_block_allocator::allocation::cost::{cluster_cost, distance};
use room_block_allocator::*;

fn inventory_with_free(counts: Vec<u32>, free: &[(u32, u32)]) -> Inventory {
    let mut inventory = Inventory::generate(FloorPlan::from_counts(counts).unwrap());
    let taken: Vec<RoomId> = inventory
        .rooms()
        .iter()
        .filter(|r| !free.contains(&(r.floor, r.index)))
        .map(|r| r.id)
        .collect();
    inventory.mark_booked(&taken).unwrap();
    inventory
}

/// Smallest cluster cost over every `n`-room combination of available rooms
fn exhaustive_min_cost(inventory: &Inventory, n: usize) -> Option<u32> {
    fn search(rooms: &[&Room], n: usize, start: usize, picked: &mut Vec<Room>, best: &mut Option<u32>) {
        if picked.len() == n {
            let cost = cluster_cost(picked.as_slice());
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for i in start..rooms.len() {
            picked.push(rooms[i].clone());
            search(rooms, n, i + 1, picked, best);
            picked.pop();
        }
    }

    let available = inventory.available();
    let mut best = None;
    search(&available, n, 0, &mut Vec::with_capacity(n), &mut best);
    best
}

/// Seeded search written out plainly: nearest `n` per seed, first strict minimum wins
fn seeded_reference(inventory: &Inventory, n: usize) -> Option<(u32, Vec<RoomId>)> {
    let available = inventory.available();
    let mut best: Option<(u32, Vec<RoomId>)> = None;
    for seed in &available {
        let mut ordered: Vec<&Room> = available.clone();
        ordered.sort_by_key(|room| distance(*seed, *room));
        let cluster: Vec<&Room> = ordered.into_iter().take(n).collect();
        if cluster.len() < n {
            return None;
        }
        let cost = cluster_cost(cluster.as_slice());
        if best.as_ref().map_or(true, |(b, _)| cost < *b) {
            let mut ids: Vec<RoomId> = cluster.iter().map(|r| r.id).collect();
            ids.sort();
            best = Some((cost, ids));
        }
    }
    best
}

/// Test the cluster found on a small fixture is as cheap as any 3-room combination
#[test]
fn test_cluster_cost_is_minimal_on_small_fixture() {
    let inventory =
        inventory_with_free(vec![4, 4, 4], &[(1, 1), (1, 4), (2, 2), (3, 1), (3, 4)]);

    let selection = find_across_floors(&inventory, 3).unwrap();

    assert_eq!(exhaustive_min_cost(&inventory, 3), Some(5));
    assert_eq!(selection.cost, 5);
    assert_eq!(
        selection.room_ids(),
        vec![RoomId::new(1, 1), RoomId::new(1, 4), RoomId::new(2, 2)]
    );
}

/// Test vertical neighbours beat distant rooms on the same floor
#[test]
fn test_vertical_neighbours_preferred() {
    // Floor 1 has rooms 1 and 9 free, floor 2 has room 1 free
    let inventory = inventory_with_free(vec![9, 9], &[(1, 1), (1, 9), (2, 1)]);

    let selection = find_across_floors(&inventory, 2).unwrap();

    assert_eq!(selection.room_ids(), vec![RoomId::new(1, 1), RoomId::new(2, 1)]);
    assert_eq!(selection.cost, 2);
}

/// Test the search matches the plain seeded search on random occupancy
#[test]
fn test_matches_seeded_search_on_random_buildings() {
    for seed in 0..20 {
        let mut inventory = Inventory::generate(FloorPlan::from_counts(vec![6, 6, 6, 5]).unwrap());
        inventory.apply_random_occupancy(0.6, &mut StdRng::seed_from_u64(seed)).unwrap();

        for n in 1..=5 {
            let found = find_across_floors(&inventory, n);
            let expected = seeded_reference(&inventory, n);

            match (found, expected) {
                (Some(selection), Some((cost, ids))) => {
                    assert_eq!(selection.cost, cost, "seed {seed}, n {n}");
                    assert_eq!(selection.room_ids(), ids, "seed {seed}, n {n}");
                    assert!(selection.rooms.iter().all(|r| !r.booked));
                    let floor = exhaustive_min_cost(&inventory, n).unwrap();
                    assert!(selection.cost >= floor);
                }
                (None, None) => assert!(inventory.available_count() < n),
                (found, expected) => {
                    panic!("seed {seed}, n {n}: {found:?} vs {expected:?}")
                }
            }
        }
    }
}

/// Test nothing is returned when too few rooms are free
#[test]
fn test_none_when_not_enough_rooms() {
    let inventory = inventory_with_free(vec![3, 3], &[(1, 2), (2, 3)]);

    assert!(find_across_floors(&inventory, 3).is_none());
    assert!(find_across_floors(&inventory, 2).is_some());
}
