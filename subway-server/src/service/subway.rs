//! The subway service: line topology edits and path queries.

use tracing::{debug, info};

use crate::domain::{
    Chain, Distance, Insertion, Line, LineId, Placement, Removal, RemovalPolicy, Station,
    StationId, TopologyError,
};
use crate::network::{Network, Path, PathError};
use crate::repository::{LineRepository, StationRepository};

use super::error::ServiceError;

/// A segment to add, identified by station ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSegment {
    pub up: StationId,
    pub down: StationId,
    pub distance: u32,
}

impl NewSegment {
    pub fn new(up: StationId, down: StationId, distance: u32) -> Self {
        Self { up, down, distance }
    }
}

/// Operations over stations and lines backed by a repository.
///
/// The service keeps a topology version that increases with every
/// change that can alter a path answer, so callers can key cached
/// results on it.
///
/// Mutating methods take `&mut self`; callers sharing a service must
/// serialize edits (e.g. behind a write lock).
#[derive(Debug, Clone)]
pub struct SubwayService<R> {
    repo: R,
    policy: RemovalPolicy,
    version: u64,
}

impl<R> SubwayService<R>
where
    R: StationRepository + LineRepository,
{
    pub fn new(repo: R, policy: RemovalPolicy) -> Self {
        Self {
            repo,
            policy,
            version: 0,
        }
    }

    /// Current topology version.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.policy
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    // Stations

    pub fn create_station(&mut self, name: &str) -> Station {
        let station = self.repo.create_station(name);
        info!(station = %station.id(), name = station.name(), "station created");
        station
    }

    pub fn station(&self, id: StationId) -> Result<Station, ServiceError> {
        self.repo
            .find_station(id)
            .ok_or(ServiceError::StationNotFound(id))
    }

    pub fn stations(&self) -> Vec<Station> {
        self.repo.list_stations()
    }

    /// Deletes a station that no line uses.
    pub fn delete_station(&mut self, id: StationId) -> Result<Station, ServiceError> {
        self.station(id)?;
        if let Some(line) = self
            .repo
            .list_lines()
            .into_iter()
            .find(|l| l.chain().contains(id))
        {
            return Err(ServiceError::StationInUse {
                station: id,
                line: line.id(),
            });
        }

        let station = self
            .repo
            .delete_station(id)
            .ok_or(ServiceError::StationNotFound(id))?;
        self.bump();
        info!(station = %id, "station deleted");
        Ok(station)
    }

    // Lines

    /// Creates a line, optionally seeded with its first segment.
    ///
    /// The first segment is validated before the line is stored, so a
    /// rejected segment leaves the repository untouched.
    pub fn create_line(
        &mut self,
        name: &str,
        color: &str,
        first: Option<NewSegment>,
    ) -> Result<LineId, ServiceError> {
        let seed = first
            .map(|s| self.resolve(s))
            .transpose()?;
        if let Some((up, down, distance)) = &seed {
            if let Placement::Reject(err) = Chain::new().classify(up, down, *distance) {
                return Err(err.into());
            }
        }

        let id = self.repo.create_line(name, color);
        if let Some((up, down, distance)) = seed {
            let line = self
                .repo
                .find_line_mut(id)
                .ok_or(ServiceError::LineNotFound(id))?;
            if let Err(err) = line.add_segment(up, down, distance) {
                self.repo.delete_line(id);
                return Err(err.into());
            }
            self.bump();
        }

        info!(line = %id, name, color, "line created");
        Ok(id)
    }

    pub fn line(&self, id: LineId) -> Result<&Line, ServiceError> {
        self.repo.find_line(id).ok_or(ServiceError::LineNotFound(id))
    }

    pub fn lines(&self) -> Vec<&Line> {
        self.repo.list_lines()
    }

    /// Renames and recolors a line.
    pub fn update_line(&mut self, id: LineId, name: &str, color: &str) -> Result<(), ServiceError> {
        let line = self
            .repo
            .find_line_mut(id)
            .ok_or(ServiceError::LineNotFound(id))?;
        line.update(name, color);
        debug!(line = %id, name, color, "line updated");
        Ok(())
    }

    /// Deletes a line together with its chain.
    pub fn delete_line(&mut self, id: LineId) -> Result<(), ServiceError> {
        self.repo
            .delete_line(id)
            .ok_or(ServiceError::LineNotFound(id))?;
        self.bump();
        info!(line = %id, "line deleted");
        Ok(())
    }

    // Topology

    /// Adds the segment `up -> down` to a line.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::LineNotFound`] / [`ServiceError::StationNotFound`]
    ///   for unknown ids
    /// - [`ServiceError::Topology`] if the chain rejects the segment
    pub fn add_segment(
        &mut self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Insertion, ServiceError> {
        self.line(line)?;
        let (up, down, distance) = self.resolve(NewSegment::new(up, down, distance))?;
        let (up_id, down_id) = (up.id(), down.id());

        let insertion = self
            .repo
            .find_line_mut(line)
            .ok_or(ServiceError::LineNotFound(line))?
            .add_segment(up, down, distance)?;
        self.bump();

        info!(
            line = %line,
            up = %up_id,
            down = %down_id,
            distance = distance.get(),
            kind = %insertion,
            "segment added"
        );
        Ok(insertion)
    }

    /// Removes `station` from a line according to the removal policy.
    pub fn remove_segment(&mut self, line: LineId, station: StationId) -> Result<Removal, ServiceError> {
        self.line(line)?;
        self.station(station)?;

        let policy = self.policy;
        let removal = self
            .repo
            .find_line_mut(line)
            .ok_or(ServiceError::LineNotFound(line))?
            .remove_station(station, policy)?;
        self.bump();

        info!(line = %line, station = %station, kind = %removal, "station removed from line");
        Ok(removal)
    }

    // Paths

    /// Finds the minimum-distance route between two stations across all lines.
    ///
    /// The network is assembled from the current state of every line on
    /// each call.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::StationNotFound`] if either id is unknown
    /// - [`ServiceError::Path`] with [`PathError::NoPathExists`] if the
    ///   stations are not connected (including stations on no line)
    pub fn find_shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<Path, ServiceError> {
        let from = self.station(source)?;
        self.station(target)?;

        if source == target {
            return Ok(Path::single(from));
        }

        let network = Network::assemble(self.repo.list_lines());
        if !network.contains(source) || !network.contains(target) {
            return Err(PathError::NoPathExists {
                from: source,
                to: target,
            }
            .into());
        }

        let path = network.shortest_path(source, target)?;
        debug!(%source, %target, distance = path.distance, "path computed");
        Ok(path)
    }

    fn resolve(&self, segment: NewSegment) -> Result<(Station, Station, Distance), ServiceError> {
        let up = self.station(segment.up)?;
        let down = self.station(segment.down)?;
        let distance = Distance::new(segment.distance).map_err(TopologyError::from)?;
        Ok((up, down, distance))
    }
}
