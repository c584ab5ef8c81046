//! In-memory repository.

use std::collections::BTreeMap;

use super::{LineRepository, StationRepository};
use crate::domain::{Line, LineId, Station, StationId};

/// Stores stations and lines in ordered maps.
///
/// Ids are handed out sequentially starting from 1 and never reused.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    last_station_id: u64,
    last_line_id: u64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StationRepository for MemoryRepository {
    fn create_station(&mut self, name: &str) -> Station {
        self.last_station_id += 1;
        let station = Station::new(StationId(self.last_station_id), name);
        self.stations.insert(station.id(), station.clone());
        station
    }

    fn find_station(&self, id: StationId) -> Option<Station> {
        self.stations.get(&id).cloned()
    }

    fn list_stations(&self) -> Vec<Station> {
        self.stations.values().cloned().collect()
    }

    fn delete_station(&mut self, id: StationId) -> Option<Station> {
        self.stations.remove(&id)
    }
}

impl LineRepository for MemoryRepository {
    fn create_line(&mut self, name: &str, color: &str) -> LineId {
        self.last_line_id += 1;
        let id = LineId(self.last_line_id);
        self.lines.insert(id, Line::new(id, name, color));
        id
    }

    fn find_line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    fn find_line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.lines.get_mut(&id)
    }

    fn list_lines(&self) -> Vec<&Line> {
        self.lines.values().collect()
    }

    fn delete_line(&mut self, id: LineId) -> Option<Line> {
        self.lines.remove(&id)
    }
}
