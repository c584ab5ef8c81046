//! Service error types.

use crate::domain::{LineId, StationId, TopologyError};
use crate::network::PathError;

/// Errors surfaced by [`SubwayService`](super::SubwayService) operations.
///
/// None of these are retried: topology edits are not idempotent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Referenced station id does not exist
    #[error("station {0} does not exist")]
    StationNotFound(StationId),

    /// Referenced line id does not exist
    #[error("line {0} does not exist")]
    LineNotFound(LineId),

    /// Station is still part of a line's chain
    #[error("station {station} is still used by line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// Chain edit rejected
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Path query failed
    #[error(transparent)]
    Path(#[from] PathError),
}
