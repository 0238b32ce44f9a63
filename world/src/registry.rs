//! Fixed registry of independent maps and the active-map selector.

use tile_quest_core::{MapId, Position, MAP_COUNT};
use tracing::debug;

use crate::{
    spatial::{CellKey, SpatialIndex, TileState, DEFAULT_BUCKETS},
    Entity, WorldError,
};

const MAIN_DIMENSIONS: (u32, u32) = (50, 50);
const CAVE_DIMENSIONS: (u32, u32) = (16, 16);
const SECRET_DIMENSIONS: (u32, u32) = (12, 12);

/// Single map owning its own spatial index.
#[derive(Clone, Debug)]
pub struct Map {
    id: MapId,
    width: u32,
    height: u32,
    items: SpatialIndex,
}

impl Map {
    fn new(id: MapId, (width, height): (u32, u32)) -> Result<Self, WorldError> {
        Ok(Self {
            id,
            width,
            height,
            items: SpatialIndex::with_buckets(DEFAULT_BUCKETS)?,
        })
    }

    /// Identity of the map, used as a portal target.
    #[must_use]
    pub const fn id(&self) -> MapId {
        self.id
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of tiles.
    #[must_use]
    pub const fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Reports whether the position lies inside the map.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Map-local key of a position.
    #[must_use]
    pub const fn key(&self, position: Position) -> CellKey {
        CellKey::from_position(position, self.width)
    }

    /// Read-only view of the map's spatial index.
    #[must_use]
    pub fn items(&self) -> &SpatialIndex {
        &self.items
    }

    /// Describes the slot at a position without collapsing cleared markers.
    #[must_use]
    pub fn tile(&self, position: Position) -> TileState<'_> {
        self.items.state(self.key(position))
    }

    /// Live entity at a position, if any.
    #[must_use]
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.items.lookup(self.key(position))
    }

    pub(crate) fn items_mut(&mut self) -> &mut SpatialIndex {
        &mut self.items
    }
}

/// Owns exactly [`MAP_COUNT`] maps and tracks which one gameplay addresses.
#[derive(Clone, Debug)]
pub struct Registry {
    maps: [Map; MAP_COUNT],
    active: MapId,
}

impl Registry {
    /// Builds the three maps (50×50, 16×16, 12×12) with empty indices and
    /// activates the main map.
    pub fn initialize() -> Result<Self, WorldError> {
        Ok(Self {
            maps: [
                Map::new(MapId::MAIN, MAIN_DIMENSIONS)?,
                Map::new(MapId::CAVE, CAVE_DIMENSIONS)?,
                Map::new(MapId::SECRET, SECRET_DIMENSIONS)?,
            ],
            active: MapId::MAIN,
        })
    }

    /// Map currently addressed by gameplay.
    #[must_use]
    pub fn active(&self) -> &Map {
        &self.maps[self.active.index()]
    }

    /// Identifier of the active map.
    #[must_use]
    pub const fn active_index(&self) -> MapId {
        self.active
    }

    /// Switches the active map.
    pub fn set_active(&mut self, map: MapId) -> &Map {
        if map != self.active {
            debug!(from = self.active.index(), to = map.index(), "switching active map");
        }
        self.active = map;
        self.active()
    }

    /// Switches the active map from a raw slot index.
    pub fn set_active_index(&mut self, index: usize) -> Result<&Map, WorldError> {
        let map = MapId::new(index).ok_or(WorldError::UnknownMap { index })?;
        Ok(self.set_active(map))
    }

    /// Any map by identifier.
    #[must_use]
    pub fn map(&self, map: MapId) -> &Map {
        &self.maps[map.index()]
    }

    /// Width of the active map.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.active().width()
    }

    /// Height of the active map.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.active().height()
    }

    /// Area of the active map.
    #[must_use]
    pub fn area(&self) -> u32 {
        self.active().area()
    }

    pub(crate) fn active_mut(&mut self) -> &mut Map {
        &mut self.maps[self.active.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_builds_three_empty_maps() {
        let registry = Registry::initialize().expect("registry");
        assert_eq!(registry.active_index(), MapId::MAIN);
        assert_eq!((registry.width(), registry.height()), (50, 50));
        assert_eq!(registry.area(), 2500);
        assert_eq!(registry.map(MapId::CAVE).width(), 16);
        assert_eq!(registry.map(MapId::SECRET).height(), 12);
        for map in MapId::all() {
            assert!(registry.map(map).items().is_empty());
            assert_eq!(registry.map(map).id(), map);
        }
    }

    #[test]
    fn set_active_delegates_dimension_queries() {
        let mut registry = Registry::initialize().expect("registry");
        let map = registry.set_active(MapId::SECRET);
        assert_eq!(map.id(), MapId::SECRET);
        assert_eq!(registry.area(), 144);
    }

    #[test]
    fn out_of_range_index_fails_fast() {
        let mut registry = Registry::initialize().expect("registry");
        let error = registry.set_active_index(3).unwrap_err();
        assert_eq!(error, WorldError::UnknownMap { index: 3 });
        assert_eq!(registry.active_index(), MapId::MAIN);
    }

    #[test]
    fn contains_rejects_border_overruns() {
        let registry = Registry::initialize().expect("registry");
        let map = registry.active();
        assert!(map.contains(Position::new(0, 0)));
        assert!(map.contains(Position::new(49, 49)));
        assert!(!map.contains(Position::new(-1, 0)));
        assert!(!map.contains(Position::new(50, 3)));
    }
}
