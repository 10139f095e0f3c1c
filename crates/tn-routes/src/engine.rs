//! The four traversal queries.
//!
//! # Traversal state
//!
//! All queries walk the adjacency graph with the same three-state node
//! discipline — unvisited → queued → expanded — recording the first
//! discoverer of each node in a `parent` map.  For the unweighted queries
//! the FIFO frontier makes the parent chain a shortest-hop tree; the
//! weighted query swaps the FIFO for a min-distance binary heap and
//! relaxes edges Dijkstra-style, so its parent chain is the
//! minimal-distance tree.
//!
//! # Stale ids
//!
//! `remove_station` leaves removed ids behind in other stations'
//! adjacency lists.  Traversal tolerates this by skipping any neighbour
//! id that no longer resolves to a station.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::{FxHashMap, FxHashSet};

use tn_core::{Coord, Distance, StationId};
use tn_registry::TransitRegistry;

use crate::error::{RouteError, RouteResult};
use crate::route::Route;

/// Find any route from `from` to `to`.
///
/// The BFS frontier makes the returned path shortest in hop count as a
/// side effect.  Cumulative distances are running sums of truncated
/// Euclidean hop distances; they are not minimised — use
/// [`route_shortest_distance`] for that.
pub fn route_any(reg: &TransitRegistry, from: StationId, to: StationId) -> RouteResult<Route> {
    ensure_known(reg, from)?;
    ensure_known(reg, to)?;
    if from == to {
        return Ok(assemble(reg, &FxHashMap::default(), from, to));
    }

    let mut visited: FxHashSet<StationId> = FxHashSet::default();
    let mut parent: FxHashMap<StationId, StationId> = FxHashMap::default();
    let mut queue: VecDeque<StationId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let Some(neighbours) = reg.next_stations_from(current) else {
            continue;
        };
        for &next in neighbours {
            if reg.next_stations_from(next).is_none() {
                continue; // stale id left by remove_station
            }
            if visited.insert(next) {
                parent.insert(next, current);
                if next == to {
                    return Ok(assemble(reg, &parent, from, to));
                }
                queue.push_back(next);
            }
        }
    }
    Ok(Route::unreachable())
}

/// Find the route with the fewest stations.
///
/// Identical to [`route_any`]: the unweighted BFS already minimises hop
/// count, so the "any" route is also the least-stations route.
pub fn route_least_stations(
    reg: &TransitRegistry,
    from: StationId,
    to: StationId,
) -> RouteResult<Route> {
    route_any(reg, from, to)
}

/// Find the route minimising total Euclidean distance.
///
/// Dijkstra over the adjacency graph with a min-heap frontier keyed on
/// `(distance, station id)` — the id as secondary key makes tie-breaking
/// deterministic.  Edge weights are non-negative by construction, so the
/// first time the destination is dequeued its distance is final.
pub fn route_shortest_distance(
    reg: &TransitRegistry,
    from: StationId,
    to: StationId,
) -> RouteResult<Route> {
    ensure_known(reg, from)?;
    ensure_known(reg, to)?;

    let mut dist: FxHashMap<StationId, Distance> = FxHashMap::default();
    let mut parent: FxHashMap<StationId, StationId> = FxHashMap::default();
    let mut heap: BinaryHeap<Reverse<(Distance, StationId)>> = BinaryHeap::new();

    dist.insert(from, 0);
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, current))) = heap.pop() {
        if current == to {
            return Ok(assemble(reg, &parent, from, to));
        }
        // Skip stale heap entries.
        if cost > dist.get(&current).copied().unwrap_or(Distance::MAX) {
            continue;
        }

        let Some(here) = reg.get_station_coordinates(current) else {
            continue;
        };
        let Some(neighbours) = reg.next_stations_from(current) else {
            continue;
        };
        for &next in neighbours {
            let Some(there) = reg.get_station_coordinates(next) else {
                continue; // stale id left by remove_station
            };
            let new_cost = cost.saturating_add(here.distance_to(there));
            if new_cost < dist.get(&next).copied().unwrap_or(Distance::MAX) {
                dist.insert(next, new_cost);
                parent.insert(next, current);
                heap.push(Reverse((new_cost, next)));
            }
        }
    }
    Ok(Route::unreachable())
}

/// Find a walk from `from` that closes a cycle.
///
/// BFS from `from`; the first edge that reaches an already-visited node
/// ends the search.  The result is the parent-chain path from `from` to
/// the node holding that edge, with the revisited node's id appended to
/// mark closure.  `Ok(vec![])` when the frontier exhausts without such an
/// edge.
pub fn route_with_cycle(reg: &TransitRegistry, from: StationId) -> RouteResult<Vec<StationId>> {
    ensure_known(reg, from)?;

    let mut visited: FxHashSet<StationId> = FxHashSet::default();
    let mut parent: FxHashMap<StationId, StationId> = FxHashMap::default();
    let mut queue: VecDeque<StationId> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        let Some(neighbours) = reg.next_stations_from(current) else {
            continue;
        };
        for &next in neighbours {
            if reg.next_stations_from(next).is_none() {
                continue; // stale id left by remove_station
            }
            if visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            } else {
                let mut path = trace_back(&parent, from, current);
                path.push(next);
                return Ok(path);
            }
        }
    }
    Ok(Vec::new())
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn ensure_known(reg: &TransitRegistry, id: StationId) -> RouteResult<()> {
    if reg.get_station_coordinates(id).is_some() {
        Ok(())
    } else {
        Err(RouteError::StationNotFound(id))
    }
}

/// Walk the parent chain from `last` back to `from` and return the
/// forward path `from ..= last`.
fn trace_back(
    parent: &FxHashMap<StationId, StationId>,
    from: StationId,
    last: StationId,
) -> Vec<StationId> {
    let mut path = vec![last];
    let mut current = last;
    while current != from {
        match parent.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => break, // unreachable for nodes discovered by this BFS
        }
    }
    path.reverse();
    path
}

/// Turn a parent chain into a [`Route`] with cumulative hop distances.
///
/// For the weighted query the running sums reproduce the relaxed dist
/// values exactly, since both use the same truncated hop metric.
fn assemble(
    reg: &TransitRegistry,
    parent: &FxHashMap<StationId, StationId>,
    from: StationId,
    to: StationId,
) -> Route {
    let ids = trace_back(parent, from, to);

    let mut stops = Vec::with_capacity(ids.len());
    let mut total: Distance = 0;
    let mut prev: Option<Coord> = None;
    for &id in &ids {
        let coord = reg.get_station_coordinates(id);
        if let (Some(a), Some(b)) = (prev, coord) {
            total = total.saturating_add(a.distance_to(b));
        }
        stops.push((id, total));
        prev = coord;
    }
    Route { stops }
}
