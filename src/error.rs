use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Rejected form submission. Nothing is created and no state changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Inputs must be positive numbers")]
    NotPositiveNumbers,

    #[error("unknown workout type: {0:?} (expected running or cycling)")]
    UnknownKind(String),
}

/// Failure of the one-shot position lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("Could not get your location")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {path} is not a workout list: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("map is not available (location was never resolved)")]
    MapUnavailable,

    #[error("no map location selected; click the map first")]
    NoPendingLocation,

    #[error("no workout with id {0}")]
    UnknownWorkout(Uuid),

    #[error("workout id {0} is already recorded")]
    DuplicateId(Uuid),
}
