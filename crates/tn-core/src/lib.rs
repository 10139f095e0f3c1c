//! `tn-core` — foundational types for the `tn` transit registry.
//!
//! This crate is a dependency of every other `tn-*` crate.  It intentionally
//! has no `tn-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                              |
//! |----------|-------------------------------------------------------|
//! | [`ids`]  | `StationId`, `TrainId`, `RegionId`                    |
//! | [`geo`]  | `Coord`, `CoordKey`, `Distance`, Euclidean distance   |
//! | [`time`] | `Time` (departure clock value)                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{Coord, CoordKey, Distance};
pub use ids::{RegionId, StationId, TrainId};
pub use time::Time;

/// Human-readable entity name.  Plain `String`; uniqueness is not enforced.
pub type Name = String;
