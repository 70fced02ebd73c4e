//! Travel cost metrics
//!
//! Moving one floor costs twice as much as moving one room along a corridor.

use crate::facility::Room;

/// Cost of changing floors relative to moving one room along a corridor
pub const FLOOR_CHANGE_WEIGHT: u32 = 2;

/// Anything with a position in the building
pub trait Placement {
    /// Floor number
    fn floor(&self) -> u32;
    /// Corridor index on the floor
    fn index(&self) -> u32;
}

impl Placement for Room {
    fn floor(&self) -> u32 {
        self.floor
    }

    fn index(&self) -> u32 {
        self.index
    }
}

impl<T: Placement + ?Sized> Placement for &T {
    fn floor(&self) -> u32 {
        (**self).floor()
    }

    fn index(&self) -> u32 {
        (**self).index()
    }
}

/// Pairwise distance between two rooms
pub fn distance<A: Placement, B: Placement>(a: &A, b: &B) -> u32 {
    a.floor().abs_diff(b.floor()) * FLOOR_CHANGE_WEIGHT + a.index().abs_diff(b.index())
}

/// Horizontal spread of a same-floor window: last index minus first index
///
/// `window` must be sorted by index. An empty window costs nothing.
pub fn travel_cost<P: Placement>(window: &[P]) -> u32 {
    match (window.first(), window.last()) {
        (Some(first), Some(last)) => last.index().saturating_sub(first.index()),
        _ => 0,
    }
}

/// Bounding-box cost of a group of rooms
pub fn cluster_cost<P: Placement>(group: &[P]) -> u32 {
    let Some(first) = group.first() else {
        return 0;
    };

    let (mut min_floor, mut max_floor) = (first.floor(), first.floor());
    let (mut min_index, mut max_index) = (first.index(), first.index());
    for room in &group[1..] {
        min_floor = min_floor.min(room.floor());
        max_floor = max_floor.max(room.floor());
        min_index = min_index.min(room.index());
        max_index = max_index.max(room.index());
    }

    (max_floor - min_floor) * FLOOR_CHANGE_WEIGHT + (max_index - min_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_weights_floors_double() {
        let a = Room::new(1, 1);
        let b = Room::new(3, 4);
        assert_eq!(distance(&a, &b), 2 * 2 + 3);
        assert_eq!(distance(&b, &a), 7);
        assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn test_travel_cost_is_index_span() {
        let window = [Room::new(2, 3), Room::new(2, 4), Room::new(2, 8)];
        assert_eq!(travel_cost(&window), 5);
        assert_eq!(travel_cost(&window[..1]), 0);
        assert_eq!(travel_cost::<Room>(&[]), 0);
    }

    #[test]
    fn test_cluster_cost_is_bounding_box() {
        let group = [Room::new(2, 5), Room::new(4, 2), Room::new(3, 6)];
        // floors 2..4 -> 2 * 2, indices 2..6 -> 4
        assert_eq!(cluster_cost(&group), 8);
        assert_eq!(cluster_cost(&group[..1]), 0);

        let refs: Vec<&Room> = group.iter().collect();
        assert_eq!(cluster_cost(&refs), 8);
    }
}
