//! `tn-registry` — the in-memory transit entity store.
//!
//! One [`TransitRegistry`] owns the canonical records for all stations,
//! regions, and trains, plus the secondary indices kept in lockstep with
//! them (name order, origin-distance order, R-tree for nearest-station
//! queries).  All mutation goes through `&mut self` methods; queries take
//! `&self` and never mutate.  The caller serializes access — there is no
//! internal locking.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`model`]   | `Station`, `Region`, `Train` records                      |
//! | [`store`]   | `TransitRegistry`: station store, indices, departures     |
//! | [`regions`] | Region hierarchy operations (`impl TransitRegistry`)      |
//! | [`trains`]  | Train registration / adjacency graph (`impl ...`)         |
//! | [`error`]   | `RegistryError`, `RegistryResult<T>`                      |
//!
//! # Error conventions
//!
//! Mutations that are structurally rejected (duplicate id, unknown
//! referenced id, already-linked region) return `Err(RegistryError::..)`
//! and leave the registry untouched — no partial updates, ever.  Read
//! queries signal "no such entity" with `None`; where a query must
//! distinguish "unknown id" from "known but empty", it returns
//! `Option<Vec<_>>` (`None` vs. `Some(vec![])`).

pub mod error;
pub mod model;
pub mod regions;
pub mod store;
pub mod trains;


pub use error::{RegistryError, RegistryResult};
pub use model::{Region, Station, Train};
pub use store::TransitRegistry;
