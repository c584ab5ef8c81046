//! The ordered segment chain owned by a line.
//!
//! Segments live in a per-chain arena of slots. Each occupied slot holds
//! a segment and the slot index of its successor, so the line order is
//! recovered by walking `next` links from `head` regardless of where a
//! segment happens to sit in storage. Freed slots are recycled.
//!
//! Edits that change the shape of the chain live in
//! [`topology`](super::topology); this module only provides storage,
//! traversal and lookups.

use std::collections::HashSet;

use super::{Segment, SegmentId, Station, StationId};

/// Index of a slot in the chain's arena.
pub(super) type Slot = usize;

#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) segment: Segment,
    pub(super) next: Option<Slot>,
}

/// An ordered, simple path of segments.
///
/// # Invariants
///
/// - Walking `next` links from `head` visits every occupied slot once.
/// - `down` of each segment equals `up` of its successor.
/// - No station appears twice in the derived station sequence.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    pub(super) nodes: Vec<Option<Node>>,
    free: Vec<Slot>,
    pub(super) head: Option<Slot>,
    len: usize,
    next_id: u64,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segments in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over segments in line order.
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            chain: self,
            cursor: self.head,
        }
    }

    /// The derived station sequence, `len() + 1` long for a non-empty chain.
    pub fn stations(&self) -> Vec<Station> {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Vec::new();
        };
        let mut stations = Vec::with_capacity(self.len + 1);
        stations.push(first.up().clone());
        stations.push(first.down().clone());
        stations.extend(iter.map(|s| s.down().clone()));
        stations
    }

    /// The up-station of the first segment.
    pub fn first_station(&self) -> Option<&Station> {
        self.iter().next().map(Segment::up)
    }

    /// The down-station of the last segment.
    pub fn last_station(&self) -> Option<&Station> {
        self.iter().last().map(Segment::down)
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.iter().map(|s| u64::from(s.distance().get())).sum()
    }

    /// Returns true if any segment touches the station.
    pub fn contains(&self, station: StationId) -> bool {
        self.occupied()
            .any(|(_, n)| n.segment.up().id() == station || n.segment.down().id() == station)
    }

    /// The segment whose up-station is `station`, if any.
    pub fn segment_from(&self, station: StationId) -> Option<&Segment> {
        self.slot_from(station).map(|slot| &self.node(slot).segment)
    }

    /// The segment whose down-station is `station`, if any.
    pub fn segment_to(&self, station: StationId) -> Option<&Segment> {
        self.slot_to(station).map(|slot| &self.node(slot).segment)
    }

    /// Checks every chain invariant.
    ///
    /// Edits preserve these on their own; this exists for assertions.
    pub fn is_well_formed(&self) -> bool {
        let mut visited = 0;
        let mut seen = HashSet::new();
        let mut prev_down: Option<&Station> = None;

        for segment in self.iter() {
            visited += 1;
            if visited > self.len {
                return false;
            }
            match prev_down {
                Some(down) if down != segment.up() => return false,
                Some(_) => {}
                None => {
                    if !seen.insert(segment.up().id()) {
                        return false;
                    }
                }
            }
            if !seen.insert(segment.down().id()) {
                return false;
            }
            prev_down = Some(segment.down());
        }

        visited == self.len && self.occupied().count() == self.len
    }

    pub(super) fn occupied(&self) -> impl Iterator<Item = (Slot, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(slot, node)| node.as_ref().map(|n| (slot, n)))
    }

    pub(super) fn node(&self, slot: Slot) -> &Node {
        self.nodes[slot]
            .as_ref()
            .unwrap_or_else(|| panic!("chain slot {slot} is vacant"))
    }

    pub(super) fn node_mut(&mut self, slot: Slot) -> &mut Node {
        self.nodes[slot]
            .as_mut()
            .unwrap_or_else(|| panic!("chain slot {slot} is vacant"))
    }

    pub(super) fn slot_from(&self, station: StationId) -> Option<Slot> {
        self.occupied()
            .find(|(_, n)| n.segment.up().id() == station)
            .map(|(slot, _)| slot)
    }

    pub(super) fn slot_to(&self, station: StationId) -> Option<Slot> {
        self.occupied()
            .find(|(_, n)| n.segment.down().id() == station)
            .map(|(slot, _)| slot)
    }

    pub(super) fn slot_of(&self, id: SegmentId) -> Option<Slot> {
        self.occupied()
            .find(|(_, n)| n.segment.id() == id)
            .map(|(slot, _)| slot)
    }

    pub(super) fn tail_slot(&self) -> Option<Slot> {
        let mut cursor = self.head?;
        while let Some(next) = self.node(cursor).next {
            cursor = next;
        }
        Some(cursor)
    }

    /// The slot whose successor is `slot`.
    pub(super) fn predecessor(&self, slot: Slot) -> Option<Slot> {
        self.occupied()
            .find(|(_, n)| n.next == Some(slot))
            .map(|(p, _)| p)
    }

    /// Points the predecessor of a replaced run (or `head`) at `slot`.
    pub(super) fn relink(&mut self, predecessor: Option<Slot>, slot: Slot) {
        match predecessor {
            Some(p) => self.node_mut(p).next = Some(slot),
            None => self.head = Some(slot),
        }
    }

    pub(super) fn next_segment_id(&mut self) -> SegmentId {
        self.next_id += 1;
        SegmentId(self.next_id)
    }

    pub(super) fn allocate(&mut self, segment: Segment, next: Option<Slot>) -> Slot {
        let node = Some(Node { segment, next });
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    pub(super) fn release(&mut self, slot: Slot) -> Node {
        let node = self.nodes[slot]
            .take()
            .unwrap_or_else(|| panic!("chain slot {slot} released twice"));
        self.free.push(slot);
        self.len -= 1;
        node
    }
}

/// Iterator over a chain's segments in line order.
pub struct Segments<'a> {
    chain: &'a Chain,
    cursor: Option<Slot>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.node(self.cursor?);
        self.cursor = node.next;
        Some(&node.segment)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Segment;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
