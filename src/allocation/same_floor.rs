//! Priority-1 search: the tightest run of available rooms on a single floor

use crate::allocation::{cost::travel_cost, Selection};
use crate::facility::{Inventory, Room};
use crate::types::SelectionTier;
use tracing::debug;

/// Find `n` available rooms on one floor with the smallest index spread
///
/// Floors are scanned from the bottom up and windows left to right; a later
/// window only wins if it is strictly cheaper, so the first minimal window
/// found is kept. Returns `None` when no floor has `n` available rooms.
pub fn find_same_floor(inventory: &Inventory, n: usize) -> Option<Selection> {
    if n == 0 {
        return None;
    }

    let mut best: Option<(u32, Vec<&Room>)> = None;

    for floor in 1..=inventory.total_floors() {
        let floor_rooms = inventory.available_on_floor(floor);
        if floor_rooms.len() < n {
            continue;
        }

        for window in floor_rooms.windows(n) {
            let cost = travel_cost(window);
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, window.to_vec()));
            }
        }
    }

    let (cost, window) = best?;
    debug!(n, cost, floor = window[0].floor, "Same-floor window selected");
    Some(Selection {
        tier: SelectionTier::SameFloor,
        rooms: window.into_iter().cloned().collect(),
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::FloorPlan;
    use crate::types::RoomId;

    fn indices(selection: &Selection) -> Vec<(u32, u32)> {
        selection.rooms.iter().map(|r| (r.floor, r.index)).collect()
    }

    #[test]
    fn test_fully_available_building_picks_floor_one() {
        let inventory = Inventory::generate(FloorPlan::reference());

        let selection = find_same_floor(&inventory, 3).unwrap();

        assert_eq!(selection.tier, SelectionTier::SameFloor);
        assert_eq!(selection.cost, 2);
        assert_eq!(indices(&selection), vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_gaps_widen_window_cost() {
        let mut inventory = Inventory::generate(FloorPlan::from_counts(vec![6]).unwrap());
        inventory.mark_booked(&[RoomId::new(1, 2), RoomId::new(1, 3)]).unwrap();

        // Available indices: 1, 4, 5, 6 -> windows [1,4,5]=4, [4,5,6]=2
        let selection = find_same_floor(&inventory, 3).unwrap();
        assert_eq!(selection.cost, 2);
        assert_eq!(indices(&selection), vec![(1, 4), (1, 5), (1, 6)]);
    }

    #[test]
    fn test_strictly_cheaper_later_floor_wins() {
        let mut inventory = Inventory::generate(FloorPlan::from_counts(vec![5, 5]).unwrap());
        inventory.mark_booked(&[RoomId::new(1, 2), RoomId::new(1, 4)]).unwrap();

        // Floor 1 best costs 2 (indices 1,3 / 3,5); floor 2 offers cost 1
        let selection = find_same_floor(&inventory, 2).unwrap();
        assert_eq!(selection.cost, 1);
        assert_eq!(indices(&selection), vec![(2, 1), (2, 2)]);
    }

    #[test]
    fn test_ties_keep_first_window() {
        let mut inventory = Inventory::generate(FloorPlan::from_counts(vec![5, 5]).unwrap());
        inventory.mark_booked(&[RoomId::new(1, 1), RoomId::new(1, 2)]).unwrap();

        // Floor 1 windows [3,4], [4,5] and floor 2 windows all cost 1
        let selection = find_same_floor(&inventory, 2).unwrap();
        assert_eq!(indices(&selection), vec![(1, 3), (1, 4)]);
    }

    #[test]
    fn test_none_when_no_floor_has_enough_rooms() {
        let mut inventory = Inventory::generate(FloorPlan::from_counts(vec![3, 3]).unwrap());
        inventory.mark_booked(&[RoomId::new(1, 1), RoomId::new(2, 3)]).unwrap();

        assert!(find_same_floor(&inventory, 3).is_none());
        assert!(find_same_floor(&inventory, 2).is_some());
        assert!(find_same_floor(&inventory, 0).is_none());
    }
}
