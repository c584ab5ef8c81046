//! Builds one undirected weighted graph from every line's chain.
//!
//! The graph is assembled fresh for each query from the current chain
//! state and dropped afterwards.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::debug;

use crate::domain::{Line, Station, StationId};

/// The combined multi-line network.
///
/// Vertices are stations (a station shared by several lines is a single
/// vertex); edge weights are segment distances.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(super) graph: UnGraph<Station, u32>,
    index: HashMap<StationId, NodeIndex>,
}

impl Network {
    /// Assembles the network from `lines`, visited in the given order.
    ///
    /// When two lines both join the same pair of stations, the weight
    /// seen first wins and later ones are ignored.
    pub fn assemble<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut network = Network::default();
        let mut lines_seen = 0usize;

        for line in lines {
            lines_seen += 1;
            for station in line.stations() {
                network.add_station(station);
            }

            for segment in line.segments() {
                let (Some(up), Some(down)) = (
                    network.node(segment.up().id()),
                    network.node(segment.down().id()),
                ) else {
                    continue;
                };
                if network.graph.find_edge(up, down).is_none() {
                    network
                        .graph
                        .add_edge(up, down, segment.distance().get());
                }
            }
        }

        debug!(
            lines = lines_seen,
            stations = network.station_count(),
            edges = network.edge_count(),
            "assembled network"
        );

        network
    }

    fn add_station(&mut self, station: Station) -> NodeIndex {
        if let Some(&node) = self.index.get(&station.id()) {
            return node;
        }
        let id = station.id();
        let node = self.graph.add_node(station);
        self.index.insert(id, node);
        node
    }

    pub(super) fn node(&self, station: StationId) -> Option<NodeIndex> {
        self.index.get(&station).copied()
    }

    /// Returns true if the station lies on at least one line.
    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The weight of the edge joining two stations, in either direction.
    pub fn weight_between(&self, a: StationId, b: StationId) -> Option<u32> {
        let edge = self.graph.find_edge(self.node(a)?, self.node(b)?)?;
        self.graph.edge_weight(edge).copied()
    }
}
