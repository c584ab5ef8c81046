//! Lines: named routes that own one segment chain.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chain::{Chain, Segments};
use super::topology::{Insertion, Removal, RemovalPolicy};
use super::{Distance, Station, StationId, TopologyError};

/// Opaque line identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rail line. The chain is created empty with the line and can only
/// be reshaped through [`Line::add_segment`] and [`Line::remove_station`].
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    chain: Chain,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            chain: Chain::new(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Segments in line order.
    pub fn segments(&self) -> Segments<'_> {
        self.chain.iter()
    }

    /// Stations in line order.
    pub fn stations(&self) -> Vec<Station> {
        self.chain.stations()
    }

    /// Renames and recolors the line. Topology is untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    pub fn add_segment(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Insertion, TopologyError> {
        let insertion = self.chain.insert(up, down, distance)?;
        debug_assert!(self.chain.is_well_formed());
        Ok(insertion)
    }

    pub fn remove_station(
        &mut self,
        station: StationId,
        policy: RemovalPolicy,
    ) -> Result<Removal, TopologyError> {
        let removal = self.chain.remove_station(station, policy)?;
        debug_assert!(self.chain.is_well_formed());
        Ok(removal)
    }
}
