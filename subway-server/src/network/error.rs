//! Path query errors.

use crate::domain::StationId;

/// Errors from shortest-path queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The station is not a vertex of the assembled network.
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No chain of segments connects the two stations.
    #[error("no path from station {from} to station {to}")]
    NoPathExists { from: StationId, to: StationId },
}
