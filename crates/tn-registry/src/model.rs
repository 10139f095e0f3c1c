//! Canonical entity records.
//!
//! The registry is the sole owner of these records.  Cross-entity links
//! (`Station::region`, `Region::parent`, adjacency lists) are stored as
//! ids, never as owning or borrowed pointers, so removing one entity can
//! never dangle a reference — at worst a stale id stops resolving.

use tn_core::{Coord, Name, RegionId, StationId, Time, TrainId};

/// A named, coordinate-located node of the transit network.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationId,
    pub name: Name,
    pub coord: Coord,

    /// Scheduled departures `(train, time)`, in insertion order.
    /// Grown by `add_departure` and by train registration; cleared only by
    /// `clear_all`.
    pub departures: Vec<(TrainId, Time)>,

    /// Directly-owning region, if any.  Overwritten freely by
    /// `add_station_to_region`.
    pub region: Option<RegionId>,

    /// Outgoing adjacency derived from train schedules.  Duplicates are
    /// allowed (two trains sharing a leg, or a re-traversing schedule).
    /// Cleared wholesale by `clear_trains`.
    pub neighbours: Vec<StationId>,
}

impl Station {
    pub(crate) fn new(id: StationId, name: Name, coord: Coord) -> Self {
        Self {
            id,
            name,
            coord,
            departures: Vec::new(),
            region: None,
            neighbours: Vec::new(),
        }
    }
}

/// A named polygon grouping stations and subregions.
///
/// Regions form a forest via `parent`; a parent is set at most once and
/// regions are never removed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub name: Name,
    /// Boundary polygon vertices, in caller-supplied order.
    pub boundary: Vec<Coord>,
    pub parent: Option<RegionId>,
}

/// An ordered schedule of `(station, time)` stops.
///
/// Immutable after registration; `clear_trains` drops all trains at once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Train {
    pub schedule: Vec<(StationId, Time)>,
}
