//! Chain topology edits.
//!
//! Insertion is two-phase: [`Chain::classify`] inspects the chain and
//! decides where a candidate segment would go (or why it cannot), then
//! [`Chain::insert`] dispatches once on that decision. All validation
//! happens during classification, so a rejected edit never touches the
//! chain.

use std::fmt;

use super::chain::{Chain, Slot};
use super::{Distance, Segment, SegmentId, Station, StationId, TopologyError};

/// Where a candidate segment `up -> down` attaches to a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The chain is empty; the segment becomes its only member.
    First,
    /// `down` is the first station; the segment becomes the new head.
    Prepend,
    /// `up` is the last station; the segment becomes the new tail.
    Append,
    /// `up` starts an existing segment, which is split at `down`.
    Split { existing: SegmentId },
    /// The segment cannot be placed.
    Reject(TopologyError),
}

/// The kind of insertion that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    First,
    Prepend,
    Append,
    Split,
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Insertion::First => "first",
            Insertion::Prepend => "prepend",
            Insertion::Append => "append",
            Insertion::Split => "split",
        })
    }
}

/// How removing a station from the middle of a line is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Terminal stations drop their segment; interior stations merge the
    /// two segments around them into one.
    #[default]
    Merge,
    /// Only the last station of a line may be removed.
    TailOnly,
}

/// The kind of removal that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Head,
    Tail,
    Merge,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Removal::Head => "head",
            Removal::Tail => "tail",
            Removal::Merge => "merge",
        })
    }
}

impl Chain {
    /// Decides where the segment `up -> down` of length `distance` would go.
    pub fn classify(&self, up: &Station, down: &Station, distance: Distance) -> Placement {
        if up == down {
            return Placement::Reject(TopologyError::SameStation(up.id()));
        }
        if self.is_empty() {
            return Placement::First;
        }

        if let Some(existing) = self.segment_from(up.id()) {
            if distance >= existing.distance() {
                return Placement::Reject(TopologyError::SegmentTooLong {
                    requested: distance.get(),
                    existing: existing.distance().get(),
                });
            }
            if self.segment_to(down.id()).is_some() {
                return Placement::Reject(TopologyError::DuplicateDownStation(down.id()));
            }
            if self.contains(down.id()) {
                // `down` is the head: splitting here would close a cycle.
                return Placement::Reject(TopologyError::InvalidSegmentPlacement);
            }
            return Placement::Split {
                existing: existing.id(),
            };
        }

        if self.segment_to(down.id()).is_some() {
            return Placement::Reject(TopologyError::DuplicateDownStation(down.id()));
        }

        let first = self.first_station().map(Station::id);
        let last = self.last_station().map(Station::id);

        if first == Some(down.id()) && !self.contains(up.id()) {
            return Placement::Prepend;
        }
        if last == Some(up.id()) && !self.contains(down.id()) {
            return Placement::Append;
        }

        Placement::Reject(TopologyError::InvalidSegmentPlacement)
    }

    /// Inserts the segment `up -> down`, keeping the chain a simple path.
    ///
    /// On error the chain is left unchanged.
    pub fn insert(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Insertion, TopologyError> {
        match self.classify(&up, &down, distance) {
            Placement::Reject(err) => Err(err),
            Placement::First => {
                let segment = self.new_segment(up, down, distance)?;
                let slot = self.allocate(segment, None);
                self.head = Some(slot);
                Ok(Insertion::First)
            }
            Placement::Prepend => {
                let segment = self.new_segment(up, down, distance)?;
                let slot = self.allocate(segment, self.head);
                self.head = Some(slot);
                Ok(Insertion::Prepend)
            }
            Placement::Append => {
                let segment = self.new_segment(up, down, distance)?;
                let tail = self.tail_slot();
                let slot = self.allocate(segment, None);
                self.relink(tail, slot);
                Ok(Insertion::Append)
            }
            Placement::Split { existing } => {
                self.split(existing, up, down, distance)?;
                Ok(Insertion::Split)
            }
        }
    }

    /// Replaces `u -> x (D)` with `u -> d (dist)` and `d -> x (D - dist)`.
    fn split(
        &mut self,
        existing: SegmentId,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), TopologyError> {
        let slot = self
            .slot_of(existing)
            .ok_or(TopologyError::InvalidSegmentPlacement)?;
        let old = &self.node(slot).segment;
        let rest = old
            .distance()
            .checked_sub(distance)
            .ok_or(TopologyError::SegmentTooLong {
                requested: distance.get(),
                existing: old.distance().get(),
            })?;
        let far = old.down().clone();

        let head_part = self.new_segment(up, down.clone(), distance)?;
        let remainder = self.new_segment(down, far, rest)?;

        let predecessor = self.predecessor(slot);
        let after = self.release(slot).next;
        let remainder_slot = self.allocate(remainder, after);
        let head_slot = self.allocate(head_part, Some(remainder_slot));
        self.relink(predecessor, head_slot);
        Ok(())
    }

    /// Removes `station` from the chain according to `policy`.
    ///
    /// On error the chain is left unchanged.
    pub fn remove_station(
        &mut self,
        station: StationId,
        policy: RemovalPolicy,
    ) -> Result<Removal, TopologyError> {
        let left = self.slot_to(station);
        let right = self.slot_from(station);

        if left.is_none() && right.is_none() {
            return Err(TopologyError::StationNotInLine(station));
        }
        if self.len() <= 1 {
            return Err(TopologyError::CannotDeleteSoleSegment);
        }

        match (left, right, policy) {
            (Some(left), None, _) => {
                let predecessor = self.predecessor(left);
                self.release(left);
                if let Some(p) = predecessor {
                    self.node_mut(p).next = None;
                }
                Ok(Removal::Tail)
            }
            (_, _, RemovalPolicy::TailOnly) => {
                Err(TopologyError::CannotDeleteNonTerminalStation(station))
            }
            (None, Some(right), RemovalPolicy::Merge) => {
                self.head = self.release(right).next;
                Ok(Removal::Head)
            }
            (Some(left), Some(right), RemovalPolicy::Merge) => {
                self.merge(left, right)?;
                Ok(Removal::Merge)
            }
            (None, None, _) => Err(TopologyError::StationNotInLine(station)),
        }
    }

    /// Joins `a -> t (D1)` and `t -> b (D2)` into `a -> b (D1 + D2)`.
    ///
    /// Fails before touching any slot if `D1 + D2` overflows.
    fn merge(&mut self, left: Slot, right: Slot) -> Result<(), TopologyError> {
        let l = &self.node(left).segment;
        let r = &self.node(right).segment;
        let (up, down) = (l.up().clone(), r.down().clone());
        let distance = l
            .distance()
            .checked_add(r.distance())
            .ok_or(TopologyError::DistanceOverflow {
                first: l.distance().get(),
                second: r.distance().get(),
            })?;
        let merged = self.new_segment(up, down, distance)?;

        let predecessor = self.predecessor(left);
        self.release(left);
        let after = self.release(right).next;
        let slot = self.allocate(merged, after);
        self.relink(predecessor, slot);
        Ok(())
    }

    fn new_segment(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Segment, TopologyError> {
        Segment::new(self.next_segment_id(), up, down, distance)
    }
}
