//! Storage collaborators.
//!
//! The service layer only talks to storage through these traits. Calls
//! are synchronous and each one is expected to be consistent on its own;
//! serializing edits to the same line is the caller's job.
//!
//! Segments have no repository of their own: a line's chain owns them,
//! and `Chain::segment_from` / `Chain::segment_to` answer the up- and
//! down-station lookups.

mod memory;

pub use memory::MemoryRepository;

use crate::domain::{Line, LineId, Station, StationId};

/// Station lookup and storage.
pub trait StationRepository {
    /// Creates a station and assigns it an id.
    fn create_station(&mut self, name: &str) -> Station;

    fn find_station(&self, id: StationId) -> Option<Station>;

    /// All stations, ordered by id.
    fn list_stations(&self) -> Vec<Station>;

    /// Removes a station, returning it if it existed.
    fn delete_station(&mut self, id: StationId) -> Option<Station>;
}

/// Line lookup and storage.
pub trait LineRepository {
    /// Creates a line with an empty chain and assigns it an id.
    fn create_line(&mut self, name: &str, color: &str) -> LineId;

    fn find_line(&self, id: LineId) -> Option<&Line>;

    fn find_line_mut(&mut self, id: LineId) -> Option<&mut Line>;

    /// All lines in a fixed retrieval order (ascending id).
    fn list_lines(&self) -> Vec<&Line>;

    /// Removes a line together with its chain.
    fn delete_line(&mut self, id: LineId) -> Option<Line>;
}
