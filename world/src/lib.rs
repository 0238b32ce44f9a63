#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Tile Quest.
//!
//! The world owns the three-map registry, every entity placed on those maps,
//! and the single player. Systems mutate it through the factory and
//! directional-query methods; adapters observe it through [`query`].

mod catalog;
mod directional;
mod player;
mod registry;
mod spatial;

use thiserror::Error;
use tile_quest_core::{MapId, Position, MAP_COUNT};

pub use catalog::{Entity, EntityId};
pub use player::{Player, DEFAULT_MAX_HEALTH, DEFAULT_START};
pub use registry::{Map, Registry};
pub use spatial::{CellKey, SpatialIndex, TileState, DEFAULT_BUCKETS};

/// Errors raised while constructing or addressing the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A spatial index cannot distribute keys over zero buckets.
    #[error("spatial index requires at least one bucket")]
    ZeroBuckets,
    /// A raw map index did not name one of the registry's maps.
    #[error("map index {index} is outside the registry of {} maps", MAP_COUNT)]
    UnknownMap {
        /// Index that was requested.
        index: usize,
    },
}

/// Represents the authoritative Tile Quest world state.
#[derive(Clone, Debug)]
pub struct World {
    registry: Registry,
    player: Player,
    next_entity: u32,
}

impl World {
    /// Creates an empty world with a default player on the main map.
    pub fn new() -> Result<Self, WorldError> {
        Self::with_player(Player::default())
    }

    /// Creates an empty world around an already configured player.
    pub fn with_player(player: Player) -> Result<Self, WorldError> {
        Ok(Self {
            registry: Registry::initialize()?,
            player,
            next_entity: 0,
        })
    }

    /// Read-only view of the map registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read-only view of the player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player for the gameplay system.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Map currently addressed by factories and directional queries.
    #[must_use]
    pub fn active_map(&self) -> &Map {
        self.registry.active()
    }

    /// Identifier of the active map.
    #[must_use]
    pub fn active_map_index(&self) -> MapId {
        self.registry.active_index()
    }

    /// Switches the active map.
    pub fn set_active(&mut self, map: MapId) -> &Map {
        self.registry.set_active(map)
    }

    /// Switches the active map from a raw slot index.
    pub fn set_active_index(&mut self, index: usize) -> Result<&Map, WorldError> {
        self.registry.set_active_index(index)
    }

    /// Width of the active map.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.registry.width()
    }

    /// Height of the active map.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.registry.height()
    }

    /// Area of the active map.
    #[must_use]
    pub fn area(&self) -> u32 {
        self.registry.area()
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_entity);
        self.next_entity = self.next_entity.wrapping_add(1);
        id
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::fmt::Write as _;

    use super::{EntityId, Map, Player, TileState, World};
    use tile_quest_core::{MapId, Position};

    /// Map currently addressed by gameplay.
    #[must_use]
    pub fn active_map(world: &World) -> &Map {
        world.active_map()
    }

    /// Identifier of the active map.
    #[must_use]
    pub fn active_map_index(world: &World) -> MapId {
        world.active_map_index()
    }

    /// Width and height of the active map.
    #[must_use]
    pub fn dimensions(world: &World) -> (u32, u32) {
        (world.width(), world.height())
    }

    /// Peeks at a tile of the active map without collapsing cleared markers.
    #[must_use]
    pub fn tile(world: &World, position: Position) -> TileState<'_> {
        world.active_map().tile(position)
    }

    /// Identity of the live occupant of a tile on the active map.
    #[must_use]
    pub fn occupant(world: &World, position: Position) -> Option<EntityId> {
        world.active_map().entity_at(position).map(|entity| entity.id())
    }

    /// Read-only view of the player.
    #[must_use]
    pub fn player(world: &World) -> &Player {
        world.player()
    }

    /// Renders every map as rows of glyphs, separated by blank lines.
    #[must_use]
    pub fn dump(world: &World) -> String {
        let mut out = String::new();
        for id in MapId::all() {
            let map = world.registry().map(id);
            let _ = writeln!(
                out,
                "map {} ({}x{}, {} entries)",
                id.index(),
                map.width(),
                map.height(),
                map.items().len()
            );
            out.push_str(&dump_map(map));
            out.push('\n');
        }
        out
    }

    /// Renders a single map as rows of glyphs.
    ///
    /// Vacant tiles and cleared markers both print as a space.
    #[must_use]
    pub fn dump_map(map: &Map) -> String {
        let mut out = String::with_capacity(map.area() as usize + map.height() as usize);
        for y in 0..map.height() as i32 {
            for x in 0..map.width() as i32 {
                let glyph = match map.tile(Position::new(x, y)) {
                    TileState::Occupied(entity) => entity.kind().glyph(),
                    TileState::Cleared | TileState::Vacant => ' ',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

/// Reports whether `position` lies inside the active map.
#[must_use]
pub fn in_bounds(world: &World, position: Position) -> bool {
    world.active_map().contains(position)
}
