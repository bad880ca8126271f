//! Route enumeration from a single origin.
//!
//! Unlike a classic Dijkstra, which keeps one best distance per town, every town accumulates the
//! full list of walks discovered so far. Towns are still processed once each, in order of their
//! current shortest known distance, so the enumeration terminates even on cyclic networks.

pub mod conditions;
pub mod filter;
pub mod route;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::{Distance, RailNetwork, RouteRecord, RouteTable, TownId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Shortest distance among the walks reaching the town when the element was pushed.
    distance: Distance,
    town: TownId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // ties go to the town registered first
            .then_with(|| other.town.cmp(&self.town))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Enumerates the walks from the origin to every town of the network.
///
/// Each town is processed exactly once, in ascending order of the shortest walk known when it is
/// selected (ties broken by [`TownId`], i.e. registration order). Processing a town:
/// 1. If the town is the origin, seeds every destination with the direct edge walk.
/// 2. Extends every walk recorded so far for the town by the edge to each destination.
/// 3. Lowers the working distance of the destinations that are still unprocessed.
///
/// Walks reaching a town after it has been processed are recorded but never extended further;
/// this is how cycles back to the origin are captured without looping.
/// Towns that no walk reaches are never selected, since they could not contribute any walk.
pub fn enumerate_routes(network: &RailNetwork, origin: TownId) -> RouteTable {
    let town_count = network.town_count();
    let mut table = RouteTable::new(origin, town_count);

    if origin.index() >= town_count {
        return table;
    }

    debug!(
        "Enumerating routes from {:?} over {town_count} towns",
        network.town_name(origin)
    );

    // current working distance of each town, None for towns that are not reached yet
    let mut working_distances: Vec<Option<Distance>> = vec![None; town_count];
    let mut processed = vec![false; town_count];

    working_distances[origin.index()] = Some(Distance::ZERO);

    // priority queue of towns with a finite working distance, stale elements are skipped
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Distance::ZERO,
        town: origin,
    }]);

    while let Some(HeapElement { distance, town }) = frontier.pop() {
        if processed[town.index()] || working_distances[town.index()] != Some(distance) {
            continue;
        }

        trace!("Processing {:?} at {distance}", network.town_name(town));

        for &destination in network.destinations(town) {
            let Some(edge_distance) = network.edge_distance(town, destination) else {
                continue;
            };

            if town == origin
                && let Some(routes) = table.routes_mut(destination)
            {
                routes.push(RouteRecord::direct(edge_distance));
            }

            // a self loop also extends the walk that was just seeded
            let mut extended: Vec<RouteRecord> = table
                .routes_to(town)
                .iter()
                .map(|route| route.extend(edge_distance))
                .collect();

            let Some(routes) = table.routes_mut(destination) else {
                continue;
            };
            routes.append(&mut extended);

            if !processed[destination.index()]
                && let Some(shortest) = routes.shortest()
                && working_distances[destination.index()].is_none_or(|d| shortest < d)
            {
                // Relax: the destination is now reachable through a shorter walk
                working_distances[destination.index()] = Some(shortest);
                frontier.push(HeapElement {
                    distance: shortest,
                    town: destination,
                });
            }
        }

        processed[town.index()] = true;
    }

    debug!(
        "Found {} routes from {:?}",
        table.len(),
        network.town_name(origin)
    );

    table
}
