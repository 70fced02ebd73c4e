// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use room_block_allocator::display::render_grid;
use room_block_allocator::*;

#[test]
fn test_core_id_types() {
    let room_id = RoomId::new(3, 7);
    assert_eq!(room_id.to_string(), "3-7");
    assert_eq!("3-7".parse::<RoomId>().unwrap(), room_id);
    assert!(RoomId::new(1, 9) < RoomId::new(2, 1));

    let epoch = EpochId::new();
    assert_ne!(epoch, EpochId::new());
    assert!(epoch.to_string().starts_with("EPOCH_"));
}

#[test]
fn test_room_numbers() {
    let inventory = Inventory::generate(FloorPlan::reference());

    let numbers: Vec<u32> = inventory.rooms_on_floor(10).iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1001, 1002, 1003, 1004, 1005, 1006, 1007]);
    assert_eq!(inventory.get(RoomId::new(4, 10)).map(|r| r.number), Some(410));
    assert!(inventory.get(RoomId::new(10, 8)).is_none());
}

#[test]
fn test_confirmation_serializes() {
    let mut coordinator = BookingCoordinator::with_reference_building();
    let confirmation = coordinator.book(2).unwrap();

    let json = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(json["rooms"][0]["number"], 101);
    assert_eq!(json["rooms"][1]["id"], "1-2");
    assert_eq!(json["rooms"][1]["booked"], true);
    assert_eq!(json["cost"], 1);

    let restored: BookingConfirmation = serde_json::from_value(json).unwrap();
    assert_eq!(restored, confirmation);
}

#[test]
fn test_grid_marks_booked_rooms() {
    let mut coordinator = BookingCoordinator::with_reference_building();
    coordinator.book(2).unwrap();

    let grid = render_grid(coordinator.inventory());
    let first_floor = grid.lines().find(|line| line.starts_with("Floor  1")).unwrap();

    assert!(first_floor.contains("[101]"));
    assert!(first_floor.contains("[102]"));
    assert!(first_floor.contains("  103 "));
    assert!(grid.lines().next().unwrap().starts_with("Floor 10 |"));
    assert!(grid.ends_with("95 of 97 rooms available (2% occupied)\n"));
}
