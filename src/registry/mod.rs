//! Entity registry
//!
//! Holds every tracked point, its derived projection, and the segment that
//! joins them, keyed by stable typed ids. The registry is built once at
//! startup and lives for the whole session as a Bevy resource. Only the
//! sync systems write to it; rendering reads from it.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

use crate::core::errors::ProjectionError;

/// The three kinds of entity the registry tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Point,
    Projection,
    Segment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Point => "point",
            EntityKind::Projection => "projection",
            EntityKind::Segment => "segment",
        };
        f.write_str(name)
    }
}

/// Stable identifier of a registry entity
///
/// Displays as `point_i`, `proj_i` or `line_i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Component)]
pub enum EntityId {
    Point(usize),
    Projection(usize),
    Segment(usize),
}

impl EntityId {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityId::Point(_) => EntityKind::Point,
            EntityId::Projection(_) => EntityKind::Projection,
            EntityId::Segment(_) => EntityKind::Segment,
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            EntityId::Point(i) | EntityId::Projection(i) | EntityId::Segment(i) => i,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Point(i) => write!(f, "point_{i}"),
            EntityId::Projection(i) => write!(f, "proj_{i}"),
            EntityId::Segment(i) => write!(f, "line_{i}"),
        }
    }
}

/// A line between a point and its projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// What the registry stores for one id
///
/// Projection and segment slots are empty until the first sync fills them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegistryEntry {
    Point { position: Vec3 },
    Projection { position: Option<Vec3> },
    Segment { endpoints: Option<Segment> },
}

impl RegistryEntry {
    pub fn kind(&self) -> EntityKind {
        match self {
            RegistryEntry::Point { .. } => EntityKind::Point,
            RegistryEntry::Projection { .. } => EntityKind::Projection,
            RegistryEntry::Segment { .. } => EntityKind::Segment,
        }
    }

    /// Position of a point or projection; `None` for segments and empty slots
    pub fn position(&self) -> Option<Vec3> {
        match *self {
            RegistryEntry::Point { position } => Some(position),
            RegistryEntry::Projection { position } => position,
            RegistryEntry::Segment { .. } => None,
        }
    }

    pub fn endpoints(&self) -> Option<Segment> {
        match *self {
            RegistryEntry::Segment { endpoints } => endpoints,
            _ => None,
        }
    }
}

/// Owner of all point, projection and segment state
#[derive(Resource, Debug, Default, Clone)]
pub struct EntityRegistry {
    entries: HashMap<EntityId, RegistryEntry>,
    point_count: usize,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatters `count` points uniformly in [-1, 1]³, each with an empty
    /// projection slot and segment slot
    pub fn with_random_points<R: Rng>(
        count: usize,
        rng: &mut R,
    ) -> Result<Self, ProjectionError> {
        let mut registry = Self::new();
        for i in 0..count {
            let position = Vec3::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            );
            registry.create_point(EntityId::Point(i), position)?;
            registry.create_projection_slot(EntityId::Projection(i))?;
            registry.create_segment_slot(EntityId::Segment(i))?;
        }
        debug!("Registry created with {} points", count);
        Ok(registry)
    }

    /// Number of points created so far
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// All ids in a stable order (points, projections, segments by index)
    pub fn ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entries.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn create_point(
        &mut self,
        id: EntityId,
        position: Vec3,
    ) -> Result<(), ProjectionError> {
        self.insert(id, EntityKind::Point, RegistryEntry::Point { position })?;
        self.point_count += 1;
        Ok(())
    }

    pub fn create_projection_slot(
        &mut self,
        id: EntityId,
    ) -> Result<(), ProjectionError> {
        self.insert(
            id,
            EntityKind::Projection,
            RegistryEntry::Projection { position: None },
        )
    }

    pub fn create_segment_slot(
        &mut self,
        id: EntityId,
    ) -> Result<(), ProjectionError> {
        self.insert(
            id,
            EntityKind::Segment,
            RegistryEntry::Segment { endpoints: None },
        )
    }

    pub fn get(&self, id: EntityId) -> Result<&RegistryEntry, ProjectionError> {
        self.entries.get(&id).ok_or(ProjectionError::NotFound(id))
    }

    /// Current position of point `index`
    pub fn point_position(&self, index: usize) -> Result<Vec3, ProjectionError> {
        let id = EntityId::Point(index);
        match self.get(id)? {
            RegistryEntry::Point { position } => Ok(*position),
            _ => Err(ProjectionError::KindMismatch {
                id,
                expected: EntityKind::Point,
            }),
        }
    }

    /// Moves a point or fills a projection slot
    pub fn set_position(
        &mut self,
        id: EntityId,
        new_position: Vec3,
    ) -> Result<(), ProjectionError> {
        match self.entry_mut(id)? {
            RegistryEntry::Point { position } => *position = new_position,
            RegistryEntry::Projection { position } => *position = Some(new_position),
            RegistryEntry::Segment { .. } => {
                return Err(ProjectionError::KindMismatch {
                    id,
                    expected: EntityKind::Projection,
                })
            }
        }
        Ok(())
    }

    /// Replaces both endpoints of a segment
    pub fn set_segment_endpoints(
        &mut self,
        id: EntityId,
        start: Vec3,
        end: Vec3,
    ) -> Result<(), ProjectionError> {
        match self.entry_mut(id)? {
            RegistryEntry::Segment { endpoints } => {
                *endpoints = Some(Segment { start, end });
                Ok(())
            }
            _ => Err(ProjectionError::KindMismatch {
                id,
                expected: EntityKind::Segment,
            }),
        }
    }

    /// Filled segments, in index order
    pub fn segments(&self) -> impl Iterator<Item = (usize, Segment)> + '_ {
        (0..self.point_count).filter_map(move |i| {
            self.entries
                .get(&EntityId::Segment(i))
                .and_then(RegistryEntry::endpoints)
                .map(|segment| (i, segment))
        })
    }

    fn insert(
        &mut self,
        id: EntityId,
        expected: EntityKind,
        entry: RegistryEntry,
    ) -> Result<(), ProjectionError> {
        if id.kind() != expected {
            return Err(ProjectionError::KindMismatch { id, expected });
        }
        if self.entries.contains_key(&id) {
            return Err(ProjectionError::DuplicateEntity(id));
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    fn entry_mut(
        &mut self,
        id: EntityId,
    ) -> Result<&mut RegistryEntry, ProjectionError> {
        self.entries.get_mut(&id).ok_or(ProjectionError::NotFound(id))
    }
}
