//! Region hierarchy operations.
//!
//! Regions form a forest: each region has at most one parent, set exactly
//! once, and regions are never removed.  A link that would close a cycle
//! is rejected outright, so every ancestor walk below terminates.

use tn_core::{Coord, Name, RegionId, StationId};

use crate::error::{RegistryError, RegistryResult};
use crate::model::Region;
use crate::store::TransitRegistry;

impl TransitRegistry {
    /// Register a new region.  A duplicate id is rejected without
    /// mutation.
    pub fn add_region(
        &mut self,
        id: RegionId,
        name: Name,
        boundary: Vec<Coord>,
    ) -> RegistryResult<()> {
        if self.regions.contains_key(&id) {
            return Err(RegistryError::DuplicateRegion(id));
        }
        self.regions.insert(
            id,
            Region {
                id,
                name,
                boundary,
                parent: None,
            },
        );
        Ok(())
    }

    /// Ids of all regions, in unspecified order.
    pub fn all_regions(&self) -> Vec<RegionId> {
        self.regions.keys().copied().collect()
    }

    pub fn get_region_name(&self, id: RegionId) -> Option<&str> {
        self.regions.get(&id).map(|r| r.name.as_str())
    }

    /// Boundary polygon of a region.
    pub fn get_region_coords(&self, id: RegionId) -> Option<&[Coord]> {
        self.regions.get(&id).map(|r| r.boundary.as_slice())
    }

    /// Link `child` under `parent`.
    ///
    /// Rejected when either id is unknown, when `child` already has a
    /// parent, or when `parent` is `child` itself or one of its
    /// descendants (which would close a cycle and hang every ancestor
    /// walk).
    pub fn add_subregion_to_region(
        &mut self,
        child: RegionId,
        parent: RegionId,
    ) -> RegistryResult<()> {
        if !self.regions.contains_key(&child) {
            return Err(RegistryError::RegionNotFound(child));
        }
        if !self.regions.contains_key(&parent) {
            return Err(RegistryError::RegionNotFound(parent));
        }
        if self.regions[&child].parent.is_some() {
            return Err(RegistryError::ParentAlreadySet { child });
        }
        if self.ancestor_chain(parent).contains(&child) {
            return Err(RegistryError::RegionCycle { child, parent });
        }
        if let Some(r) = self.regions.get_mut(&child) {
            r.parent = Some(parent);
        }
        Ok(())
    }

    /// Put a station directly inside `region`.
    ///
    /// Unlike the subregion link, membership is overwritten
    /// unconditionally — re-homing a station needs no unlink step.
    pub fn add_station_to_region(
        &mut self,
        station: StationId,
        region: RegionId,
    ) -> RegistryResult<()> {
        if !self.regions.contains_key(&region) {
            return Err(RegistryError::RegionNotFound(region));
        }
        match self.stations.get_mut(&station) {
            Some(s) => {
                s.region = Some(region);
                Ok(())
            }
            None => Err(RegistryError::StationNotFound(station)),
        }
    }

    /// Ancestor chain of the station's owning region: immediate region
    /// first, root last.
    ///
    /// `None` on an unknown station; an empty vec when the station belongs
    /// to no region.
    pub fn station_in_regions(&self, station: StationId) -> Option<Vec<RegionId>> {
        let s = self.stations.get(&station)?;
        Some(match s.region {
            Some(region) => self.ancestor_chain(region),
            None => Vec::new(),
        })
    }

    /// Direct children of `region` — regions whose parent is exactly
    /// `region`, not the whole subtree.  `None` on an unknown id.
    pub fn all_subregions_of_region(&self, region: RegionId) -> Option<Vec<RegionId>> {
        self.regions.get(&region)?;
        Some(
            self.regions
                .values()
                .filter(|r| r.parent == Some(region))
                .map(|r| r.id)
                .collect(),
        )
    }

    /// Nearest ancestor of `a` (including `a` itself) that is also an
    /// ancestor of `b` (including `b`).  `None` when either id is unknown
    /// or the chains are disjoint.
    ///
    /// Cost is proportional to the product of the two chain lengths, which
    /// is fine for the shallow forests this registry holds.
    pub fn common_parent_of_regions(&self, a: RegionId, b: RegionId) -> Option<RegionId> {
        if !self.regions.contains_key(&a) || !self.regions.contains_key(&b) {
            return None;
        }
        let chain_a = self.ancestor_chain(a);
        let chain_b = self.ancestor_chain(b);
        chain_a.into_iter().find(|id| chain_b.contains(id))
    }

    /// Self-to-root chain of region ids, inclusive of `start`.
    ///
    /// Terminates because `add_subregion_to_region` rejects cycles; a
    /// missing link (which the forest never produces) just ends the walk.
    pub(crate) fn ancestor_chain(&self, start: RegionId) -> Vec<RegionId> {
        let mut chain = Vec::new();
        let mut current = Some(start);
        while let Some(id) = current {
            match self.regions.get(&id) {
                Some(region) => {
                    chain.push(id);
                    current = region.parent;
                }
                None => break,
            }
        }
        chain
    }
}
