//! Registry error type.

use thiserror::Error;

use tn_core::{RegionId, StationId, Time, TrainId};

/// Structural rejections of registry mutations.
///
/// Every variant implies the operation left the registry completely
/// unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("station {0} already exists")]
    DuplicateStation(StationId),

    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("region {0} already exists")]
    DuplicateRegion(RegionId),

    #[error("region {0} not found")]
    RegionNotFound(RegionId),

    #[error("train {0} already exists")]
    DuplicateTrain(TrainId),

    #[error("region {child} already has a parent")]
    ParentAlreadySet { child: RegionId },

    #[error("linking {child} under {parent} would close a region cycle")]
    RegionCycle { child: RegionId, parent: RegionId },

    #[error("no departure of {train} at {time} from {station}")]
    DepartureNotFound {
        station: StationId,
        train: TrainId,
        time: Time,
    },
}

/// Shorthand result type for registry mutations.
pub type RegistryResult<T> = Result<T, RegistryError>;
