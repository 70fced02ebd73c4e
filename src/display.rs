//! Text rendering of the building for the command line front-end
//!
//! Floors are printed top floor first, the way a building elevation reads.
//! Only room numbers are shown; booked rooms are wrapped in brackets.

use crate::facility::Inventory;
use std::fmt::Write;

/// Render every floor of the inventory as one line of room numbers
pub fn render_grid(inventory: &Inventory) -> String {
    let mut out = String::new();
    let label_width = inventory.total_floors().to_string().len();

    for floor in (1..=inventory.total_floors()).rev() {
        let _ = write!(out, "Floor {:>width$} |", floor, width = label_width);
        for room in inventory.rooms_on_floor(floor) {
            if room.booked {
                let _ = write!(out, " [{}]", room.number);
            } else {
                let _ = write!(out, "  {} ", room.number);
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} of {} rooms available ({:.0}% occupied)",
        inventory.available_count(),
        inventory.room_count(),
        inventory.occupancy_rate() * 100.0
    );
    out
}
