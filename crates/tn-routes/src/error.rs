//! Route-query error type.

use thiserror::Error;

use tn_core::StationId;

/// Errors produced by the route queries.
///
/// An unreachable destination is deliberately not an error — see the
/// crate docs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("station {0} not found")]
    StationNotFound(StationId),
}

pub type RouteResult<T> = Result<T, RouteError>;
