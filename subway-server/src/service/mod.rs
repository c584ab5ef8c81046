//! Application service for the subway network.
//!
//! Resolves station and line ids through the repository, applies chain
//! edits through the owning line, and answers shortest-path queries over
//! a network assembled from every line.

mod error;
mod subway;


pub use error::ServiceError;
pub use subway::{NewSegment, SubwayService};
