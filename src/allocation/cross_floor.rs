//! Priority-2 search: the cheapest cluster of available rooms across floors
//!
//! Every available room is tried as a seed. The `n` rooms closest to the seed
//! form one candidate cluster, and the cluster with the smallest bounding-box
//! cost wins. This is a heuristic: only clusters that are the nearest
//! neighbourhood of one of their own members are ever considered.

use crate::allocation::{
    cost::{cluster_cost, distance, Placement},
    Selection,
};
use crate::facility::Inventory;
use crate::types::{RoomId, SelectionTier};
use std::collections::HashSet;
use tracing::debug;

/// A room position paired with its distance from the current seed
///
/// Only lives for one seed's evaluation.
#[derive(Debug, Clone, Copy)]
struct RankedRoom {
    id: RoomId,
    floor: u32,
    index: u32,
    distance: u32,
}

impl Placement for RankedRoom {
    fn floor(&self) -> u32 {
        self.floor
    }

    fn index(&self) -> u32 {
        self.index
    }
}

/// Find the `n` available rooms forming the cheapest seeded cluster
///
/// Seeds are tried in inventory order and a cluster only replaces the current
/// best if it is strictly cheaper. Ties in distance keep inventory order
/// because the sort is stable. Returns `None` only when fewer than `n` rooms
/// are available. The returned rooms are the canonical inventory records in
/// inventory order.
pub fn find_across_floors(inventory: &Inventory, n: usize) -> Option<Selection> {
    let available = inventory.available();
    if n == 0 || available.len() < n {
        return None;
    }

    let mut best: Option<(u32, Vec<RoomId>)> = None;
    let mut ranked: Vec<RankedRoom> = Vec::with_capacity(available.len());

    for seed in &available {
        ranked.clear();
        ranked.extend(available.iter().map(|room| RankedRoom {
            id: room.id,
            floor: room.floor,
            index: room.index,
            distance: distance(*seed, *room),
        }));
        ranked.sort_by_key(|r| r.distance);

        let cluster = &ranked[..n];
        let cost = cluster_cost(cluster);
        if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
            debug!(seed = %seed.id, cost, "New best cross-floor cluster");
            best = Some((cost, cluster.iter().map(|r| r.id).collect()));
        }
    }

    let (cost, ids) = best?;
    let chosen: HashSet<RoomId> = ids.into_iter().collect();
    let rooms = inventory.rooms().iter().filter(|r| chosen.contains(&r.id)).cloned().collect();

    Some(Selection { tier: SelectionTier::CrossFloor, rooms, cost })
}
