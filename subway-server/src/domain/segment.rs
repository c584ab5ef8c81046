//! Segments: weighted edges between adjacent stations on a line.

use std::fmt;

use serde::Serialize;

use super::{Distance, Station, TopologyError};

/// Identifier of a segment, unique within its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SegmentId(pub u64);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed-by-convention edge `up -> down` with a positive distance.
///
/// The direction only fixes the segment's place in the line's ordering;
/// for routing purposes the segment is travelled both ways.
///
/// # Invariants
///
/// - `up != down`
/// - `distance > 0` (guaranteed by [`Distance`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: SegmentId,
    up: Station,
    down: Station,
    distance: Distance,
}

impl Segment {
    /// Creates a segment, rejecting one that joins a station to itself.
    pub fn new(
        id: SegmentId,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, TopologyError> {
        if up == down {
            return Err(TopologyError::SameStation(up.id()));
        }
        Ok(Self {
            id,
            up,
            down,
            distance,
        })
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.up, self.down, self.distance)
    }
}
