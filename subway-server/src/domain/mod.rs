//! Domain types for the subway network.
//!
//! Stations, lines and the segment chains that give each line its shape.
//! Types enforce their invariants at construction time, and every chain
//! edit either succeeds completely or leaves the chain as it was.

mod chain;
mod distance;
mod error;
mod line;
mod segment;
mod station;
mod topology;

#[cfg(test)]
mod topology_tests;

pub use chain::{Chain, Segments};
pub use distance::{Distance, InvalidDistance};
pub use error::TopologyError;
pub use line::{Line, LineId};
pub use segment::{Segment, SegmentId};
pub use station::{Station, StationId};
pub use topology::{Insertion, Placement, Removal, RemovalPolicy};
