//! Train registration and the derived station adjacency graph.
//!
//! Registering a train with stops `s₀ t₀, s₁ t₁, …` appends a directed
//! edge `sᵢ → sᵢ₊₁` to each stop's `neighbours` and a departure
//! `(train, tᵢ)` to its board — the terminal stop gets neither.  The
//! adjacency lists are derived data: `clear_trains` wipes them without
//! touching stations or regions, and nothing else ever shrinks them.

use tn_core::{StationId, Time, TrainId};

use crate::error::{RegistryError, RegistryResult};
use crate::model::Train;
use crate::store::TransitRegistry;

impl TransitRegistry {
    /// Register a train and derive its adjacency edges and departures.
    ///
    /// Validate-all-then-apply: a duplicate train id or any unknown stop
    /// rejects the whole call with zero mutation — no partially-built
    /// edges, no stray departures.
    pub fn add_train(
        &mut self,
        id: TrainId,
        schedule: Vec<(StationId, Time)>,
    ) -> RegistryResult<()> {
        if self.trains.contains_key(&id) {
            return Err(RegistryError::DuplicateTrain(id));
        }
        for &(stop, _) in &schedule {
            if !self.stations.contains_key(&stop) {
                return Err(RegistryError::StationNotFound(stop));
            }
        }

        for window in schedule.windows(2) {
            let (stop, time) = window[0];
            let (next, _) = window[1];
            if let Some(station) = self.stations.get_mut(&stop) {
                station.neighbours.push(next);
                station.departures.push((id, time));
            }
        }
        self.trains.insert(id, Train { schedule });
        Ok(())
    }

    /// Direct successors of `station` in the adjacency graph.
    ///
    /// `None` on an unknown station; an empty slice for a station no train
    /// departs from.
    pub fn next_stations_from(&self, station: StationId) -> Option<&[StationId]> {
        self.stations.get(&station).map(|s| s.neighbours.as_slice())
    }

    /// Every stop of `train`'s schedule strictly after the first
    /// occurrence of `station`.
    ///
    /// `None` when either id is unknown or `station` is not on the
    /// schedule; `Some(vec![])` when `station` is the terminal stop.
    pub fn train_stations_from(
        &self,
        station: StationId,
        train: TrainId,
    ) -> Option<Vec<StationId>> {
        self.stations.get(&station)?;
        let train = self.trains.get(&train)?;
        let first = train.schedule.iter().position(|&(s, _)| s == station)?;
        Some(
            train.schedule[first + 1..]
                .iter()
                .map(|&(s, _)| s)
                .collect(),
        )
    }

    /// Drop every train and empty every station's `neighbours` list.
    ///
    /// Departure boards are left as they are — this reset undoes the
    /// graph, not the timetable display.
    pub fn clear_trains(&mut self) {
        self.trains.clear();
        for station in self.stations.values_mut() {
            station.neighbours.clear();
        }
    }
}
