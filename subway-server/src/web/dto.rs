//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Segment, SegmentId, Station, StationId};
use crate::network::Path;
use crate::service::NewSegment;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

/// Request to create a line, optionally with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: Option<StationId>,
    pub down_station_id: Option<StationId>,
    pub distance: Option<u32>,
}

impl CreateLineRequest {
    /// The first section, if the request names both stations.
    ///
    /// A missing distance becomes zero and is rejected downstream. Naming
    /// only one station, or a distance without stations, is an error.
    pub fn first_section(&self) -> Result<Option<NewSegment>, &'static str> {
        match (self.up_station_id, self.down_station_id, self.distance) {
            (Some(up), Some(down), distance) => {
                Ok(Some(NewSegment::new(up, down, distance.unwrap_or(0))))
            }
            (None, None, None) => Ok(None),
            _ => Err("upStationId, downStationId and distance must be given together"),
        }
    }
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// A section of a line in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub id: SegmentId,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

impl SectionResponse {
    pub fn from_segment(segment: &Segment) -> Self {
        Self {
            id: segment.id(),
            up_station_id: segment.up().id(),
            down_station_id: segment.down().id(),
            distance: segment.distance().get(),
        }
    }
}

/// A line with its ordered stations and sections.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub sections: Vec<SectionResponse>,
    pub distance: u64,
}

impl LineResponse {
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: line
                .stations()
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            sections: line.segments().map(SectionResponse::from_segment).collect(),
            distance: line.chain().total_distance(),
        }
    }
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    pub station_id: StationId,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
}

/// A shortest path.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u64,
}

impl PathResponse {
    pub fn from_path(path: &Path) -> Self {
        Self {
            stations: path
                .stations
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            distance: path.distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
