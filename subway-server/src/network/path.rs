//! Shortest paths over the assembled network.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::trace;

use super::assembler::Network;
use super::error::PathError;
use crate::domain::{Station, StationId};

/// A minimum-distance route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Stations from source to target, both included.
    pub stations: Vec<Station>,

    /// Sum of segment distances along the route.
    pub distance: u64,
}

impl Path {
    /// The trivial route from a station to itself.
    pub fn single(station: Station) -> Self {
        Self {
            stations: vec![station],
            distance: 0,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    node: NodeIndex,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost; equal costs pop in node insertion order.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Network {
    /// Dijkstra from `source`, stopping once `target` is settled.
    ///
    /// # Errors
    ///
    /// - [`PathError::StationNotFound`] if either station is not on any line
    /// - [`PathError::NoPathExists`] if the stations are in disconnected parts
    ///   of the network
    pub fn shortest_path(&self, source: StationId, target: StationId) -> Result<Path, PathError> {
        let start = self
            .node(source)
            .ok_or(PathError::StationNotFound(source))?;
        let goal = self
            .node(target)
            .ok_or(PathError::StationNotFound(target))?;

        let mut distances: HashMap<NodeIndex, u64> = HashMap::new();
        let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut heap = BinaryHeap::new();

        distances.insert(start, 0);
        heap.push(State {
            cost: 0,
            node: start,
        });

        while let Some(State { cost, node }) = heap.pop() {
            if node == goal {
                break;
            }

            // Stale heap entry
            if distances.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }

            for edge in self.graph.edges(node) {
                let next = edge.target();
                let next_cost = cost + u64::from(*edge.weight());

                match distances.entry(next) {
                    Entry::Vacant(entry) => {
                        entry.insert(next_cost);
                    }
                    Entry::Occupied(mut entry) => {
                        if next_cost >= *entry.get() {
                            continue;
                        }
                        *entry.get_mut() = next_cost;
                    }
                }
                predecessors.insert(next, node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }

        let unreachable = PathError::NoPathExists {
            from: source,
            to: target,
        };
        let distance = *distances.get(&goal).ok_or(unreachable.clone())?;

        let mut nodes = vec![goal];
        let mut current = goal;
        while current != start {
            current = *predecessors.get(&current).ok_or(unreachable.clone())?;
            nodes.push(current);
        }
        nodes.reverse();

        trace!(%source, %target, distance, hops = nodes.len() - 1, "shortest path found");

        Ok(Path {
            stations: nodes.into_iter().map(|n| self.graph[n].clone()).collect(),
            distance,
        })
    }
}
