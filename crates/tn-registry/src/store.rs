//! The station store, its secondary indices, and the departure board.
//!
//! # Index discipline
//!
//! `TransitRegistry` maintains three secondary views over the station map:
//!
//! - `by_name`: `BTreeMap<Name, StationId>` — alphabetical enumeration.
//! - `by_coord`: `BTreeMap<CoordKey, StationId>` — origin-distance
//!   enumeration and exact coordinate lookup.  Keyed by coordinate value:
//!   if two stations ever claim one coordinate, the later insertion
//!   overwrites the earlier entry (and likewise for duplicate names in
//!   `by_name`).
//! - `spatial`: `rstar::RTree` of `(point, id)` entries — true-Euclidean
//!   k-nearest queries, one entry per station regardless of collisions.
//!
//! Every mutation updates all affected views before returning; a rejected
//! mutation touches none of them.

use std::collections::BTreeMap;

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use tn_core::{Coord, CoordKey, Name, RegionId, StationId, Time, TrainId};

use crate::error::{RegistryError, RegistryResult};
use crate::model::{Region, Station, Train};

// ── R-tree station entry ──────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D point with the
/// associated `StationId`.  Coordinates are widened to `f64` so squared
/// distances never overflow.
#[derive(Clone, PartialEq)]
pub(crate) struct StationEntry {
    point: [f64; 2],
    id: StationId,
}

impl StationEntry {
    fn new(coord: Coord, id: StationId) -> Self {
        Self {
            point: [coord.x as f64, coord.y as f64],
            id,
        }
    }
}

impl RTreeObject for StationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── TransitRegistry ───────────────────────────────────────────────────────────

/// The in-memory transit registry: canonical entity records plus all
/// secondary indices.  See the crate docs for the error conventions.
#[derive(Default)]
pub struct TransitRegistry {
    pub(crate) stations: FxHashMap<StationId, Station>,
    pub(crate) regions: FxHashMap<RegionId, Region>,
    pub(crate) trains: FxHashMap<TrainId, Train>,

    by_name: BTreeMap<Name, StationId>,
    by_coord: BTreeMap<CoordKey, StationId>,
    spatial: RTree<StationEntry>,
}

impl TransitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Station store ─────────────────────────────────────────────────────

    /// Number of currently-stored stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Ids of all stations, in unspecified order.
    pub fn all_stations(&self) -> Vec<StationId> {
        self.stations.keys().copied().collect()
    }

    /// Register a new station.  Never overwrites: a duplicate id is
    /// rejected and the existing record is untouched.
    pub fn add_station(&mut self, id: StationId, name: Name, coord: Coord) -> RegistryResult<()> {
        if self.stations.contains_key(&id) {
            return Err(RegistryError::DuplicateStation(id));
        }
        self.by_name.insert(name.clone(), id);
        self.by_coord.insert(CoordKey(coord), id);
        self.spatial.insert(StationEntry::new(coord, id));
        self.stations.insert(id, Station::new(id, name, coord));
        Ok(())
    }

    pub fn get_station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(&id).map(|s| s.name.as_str())
    }

    pub fn get_station_coordinates(&self, id: StationId) -> Option<Coord> {
        self.stations.get(&id).map(|s| s.coord)
    }

    /// Station ids in ascending name order.
    pub fn stations_alphabetically(&self) -> Vec<StationId> {
        self.by_name.values().copied().collect()
    }

    /// Station ids in the [`CoordKey`] order: increasing distance from the
    /// origin, with the index's ad-hoc equal-x / equal-y tie-breaks.
    pub fn stations_distance_increasing(&self) -> Vec<StationId> {
        self.by_coord.values().copied().collect()
    }

    /// The station currently claiming `coord` in the coordinate index, if
    /// any.  After a collision this is the most recent claimant.
    pub fn find_station_with_coord(&self, coord: Coord) -> Option<StationId> {
        self.by_coord.get(&CoordKey(coord)).copied()
    }

    /// Move a station to `new_coord`, relocating its coordinate-index and
    /// R-tree entries as one logical update.
    ///
    /// Fails only on an unknown station id, without mutation.
    pub fn change_station_coord(&mut self, id: StationId, new_coord: Coord) -> RegistryResult<()> {
        let old = match self.stations.get(&id) {
            Some(s) => s.coord,
            None => return Err(RegistryError::StationNotFound(id)),
        };
        self.by_coord.remove(&CoordKey(old));
        self.by_coord.insert(CoordKey(new_coord), id);
        self.spatial.remove(&StationEntry::new(old, id));
        self.spatial.insert(StationEntry::new(new_coord, id));
        if let Some(s) = self.stations.get_mut(&id) {
            s.coord = new_coord;
        }
        Ok(())
    }

    /// Up to 3 station ids by ascending true Euclidean distance from
    /// `point`.  Ties come back in unspecified order.
    pub fn stations_closest_to(&self, point: Coord) -> Vec<StationId> {
        self.spatial
            .nearest_neighbor_iter(&[point.x as f64, point.y as f64])
            .take(3)
            .map(|e| e.id)
            .collect()
    }

    /// Remove a station and its entries in every secondary index.
    ///
    /// Stale references are left behind on purpose: other stations'
    /// `neighbours` and `departures` lists may still carry the removed id
    /// afterwards, and query callers must tolerate ids that no longer
    /// resolve.  The route engine skips them during traversal.
    pub fn remove_station(&mut self, id: StationId) -> RegistryResult<()> {
        let station = match self.stations.remove(&id) {
            Some(s) => s,
            None => return Err(RegistryError::StationNotFound(id)),
        };
        self.by_name.remove(&station.name);
        self.by_coord.remove(&CoordKey(station.coord));
        self.spatial.remove(&StationEntry::new(station.coord, id));
        Ok(())
    }

    /// Wipe everything: stations, regions, trains, and all indices.
    /// Idempotent.
    pub fn clear_all(&mut self) {
        self.stations.clear();
        self.regions.clear();
        self.trains.clear();
        self.by_name.clear();
        self.by_coord.clear();
        self.spatial = RTree::new();
    }

    // ── Departure board ───────────────────────────────────────────────────

    /// Append a departure `(train, time)` to a station's board.
    pub fn add_departure(
        &mut self,
        station: StationId,
        train: TrainId,
        time: Time,
    ) -> RegistryResult<()> {
        match self.stations.get_mut(&station) {
            Some(s) => {
                s.departures.push((train, time));
                Ok(())
            }
            None => Err(RegistryError::StationNotFound(station)),
        }
    }

    /// Remove the first departure matching `(train, time)` exactly.
    pub fn remove_departure(
        &mut self,
        station: StationId,
        train: TrainId,
        time: Time,
    ) -> RegistryResult<()> {
        let s = self
            .stations
            .get_mut(&station)
            .ok_or(RegistryError::StationNotFound(station))?;
        match s.departures.iter().position(|&d| d == (train, time)) {
            Some(i) => {
                s.departures.remove(i);
                Ok(())
            }
            None => Err(RegistryError::DepartureNotFound {
                station,
                train,
                time,
            }),
        }
    }

    /// Departures strictly after `time`, sorted ascending by time.
    /// `None` on an unknown station.
    pub fn station_departures_after(
        &self,
        station: StationId,
        time: Time,
    ) -> Option<Vec<(Time, TrainId)>> {
        let s = self.stations.get(&station)?;
        let mut result: Vec<(Time, TrainId)> = s
            .departures
            .iter()
            .filter(|&&(_, t)| t > time)
            .map(|&(train, t)| (t, train))
            .collect();
        result.sort_by_key(|&(t, _)| t);
        Some(result)
    }
}
