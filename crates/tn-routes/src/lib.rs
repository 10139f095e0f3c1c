//! `tn-routes` — route finding over the station adjacency graph.
//!
//! The queries here read a [`tn_registry::TransitRegistry`] through its
//! public query surface and never mutate it.  Edge weights are derived on
//! the fly: the truncated Euclidean distance between endpoint coordinates.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`route`]  | `Route` — a path with cumulative distances                 |
//! | [`engine`] | `route_any`, `route_least_stations`,                       |
//! |            | `route_shortest_distance`, `route_with_cycle`              |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                             |
//!
//! # Result conventions
//!
//! A query naming an unknown station id returns
//! `Err(RouteError::StationNotFound)`.  A destination that exists but is
//! unreachable is not an error: the query returns `Ok` with an empty
//! route (and `route_with_cycle` returns `Ok(vec![])` when no cycle is
//! reachable).

pub mod engine;
pub mod error;
pub mod route;


pub use engine::{route_any, route_least_stations, route_shortest_distance, route_with_cycle};
pub use error::{RouteError, RouteResult};
pub use route::Route;
