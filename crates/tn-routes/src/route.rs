//! The `Route` result type.

use tn_core::{Distance, StationId};

/// A path through the adjacency graph: stations from source to
/// destination inclusive, each paired with the cumulative Euclidean
/// distance from the source (the source's distance is 0).
///
/// An empty route means the destination exists but is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stops: Vec<(StationId, Distance)>,
}

impl Route {
    /// A route with no stops — the "unreachable" result.
    pub fn unreachable() -> Self {
        Self { stops: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stations on the route, source and destination included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Total distance, i.e. the cumulative distance at the destination.
    /// `None` for an empty route.
    pub fn total_distance(&self) -> Option<Distance> {
        self.stops.last().map(|&(_, d)| d)
    }

    /// The station ids along the route, in order.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stops.iter().map(|&(id, _)| id).collect()
    }
}
