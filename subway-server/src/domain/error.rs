//! Topology error types.
//!
//! These errors describe why a segment could not be inserted into or
//! removed from a line's chain. A failed edit always leaves the chain
//! exactly as it was.

use super::StationId;

/// Errors raised by chain topology edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// The new segment has no valid point of attachment, or attaching it
    /// would create a branch or a cycle.
    #[error("segment cannot be attached to the line at any valid point")]
    InvalidSegmentPlacement,

    /// A segment splitting an existing one must be strictly shorter.
    #[error("segment of length {requested} cannot split an existing segment of length {existing}")]
    SegmentTooLong { requested: u32, existing: u32 },

    /// The new down-station already terminates a segment in the chain.
    #[error("station {0} is already the down-station of a segment")]
    DuplicateDownStation(StationId),

    /// Removing the station would leave the line without segments.
    #[error("cannot remove the only segment of a line")]
    CannotDeleteSoleSegment,

    /// Only the last station may be removed under the tail-only policy.
    #[error("station {0} is not the last station of the line")]
    CannotDeleteNonTerminalStation(StationId),

    /// The station is not part of this line.
    #[error("station {0} is not on this line")]
    StationNotInLine(StationId),

    /// Segment distances must be positive.
    #[error("distance must be a positive whole number")]
    InvalidDistance,

    /// Merging two segments would exceed the largest representable distance.
    #[error("merged distance {first} + {second} is too large")]
    DistanceOverflow { first: u32, second: u32 },

    /// A segment must join two different stations.
    #[error("segment must join two different stations (got {0} twice)")]
    SameStation(StationId),
}

impl From<super::InvalidDistance> for TopologyError {
    fn from(_: super::InvalidDistance) -> Self {
        TopologyError::InvalidDistance
    }
}
