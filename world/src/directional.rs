//! Neighbour lookups on the active map.
//!
//! Reading a tile through these methods also collapses an erased tile's
//! cleared marker, so a tile read twice after an erase is vacant both times
//! and the index stops carrying the stale entry.

use tile_quest_core::{Neighbor, Position};
use tracing::trace;

use crate::{Entity, TileState, World};

impl World {
    /// Returns the live entity at the neighbour of `position`, if any.
    ///
    /// A cleared marker found at that tile is removed and reported as
    /// absence. Tiles outside the map never hold anything.
    pub fn look(&mut self, neighbor: Neighbor, position: Position) -> Option<&Entity> {
        let target = position.neighbor(neighbor);
        let map = self.registry.active_mut();
        if !map.contains(target) {
            return None;
        }
        let key = map.key(target);
        if matches!(map.items().state(key), TileState::Cleared) {
            let _ = map.items_mut().remove(key);
            trace!(position = ?target, "collapsed cleared tile");
            return None;
        }
        map.items().lookup(key)
    }

    /// Entity one tile north of `position`.
    pub fn north(&mut self, position: Position) -> Option<&Entity> {
        self.look(Neighbor::North, position)
    }

    /// Entity one tile south of `position`.
    pub fn south(&mut self, position: Position) -> Option<&Entity> {
        self.look(Neighbor::South, position)
    }

    /// Entity one tile east of `position`.
    pub fn east(&mut self, position: Position) -> Option<&Entity> {
        self.look(Neighbor::East, position)
    }

    /// Entity one tile west of `position`.
    pub fn west(&mut self, position: Position) -> Option<&Entity> {
        self.look(Neighbor::West, position)
    }

    /// Entity at `position` itself.
    pub fn here(&mut self, position: Position) -> Option<&Entity> {
        self.look(Neighbor::Here, position)
    }
}

#[cfg(test)]
mod tests {
    use tile_quest_core::{EntityKind, MapId, Orientation};

    use super::*;
    use crate::query;

    #[test]
    fn each_direction_addresses_its_neighbour() {
        let mut world = World::new().expect("world");
        let origin = Position::new(10, 10);
        world.add_plant(Position::new(10, 9));
        world.add_bush(Position::new(10, 11));
        world.add_pebble(Position::new(11, 10));
        world.add_hole(Position::new(9, 10));
        world.add_mushroom(origin);

        assert_eq!(world.north(origin).map(Entity::kind), Some(EntityKind::Plant));
        assert_eq!(world.south(origin).map(Entity::kind), Some(EntityKind::Bush));
        assert_eq!(world.east(origin).map(Entity::kind), Some(EntityKind::Pebble));
        assert_eq!(world.west(origin).map(Entity::kind), Some(EntityKind::Hole));
        assert_eq!(world.here(origin).map(Entity::kind), Some(EntityKind::Mushroom));
    }

    #[test]
    fn reading_an_erased_tile_collapses_the_marker() {
        let mut world = World::new().expect("world");
        let tile = Position::new(20, 20);
        world.add_power_up(tile);
        world.erase(tile);
        assert_eq!(query::tile(&world, tile), TileState::Cleared);

        assert!(world.here(tile).is_none());
        assert_eq!(query::tile(&world, tile), TileState::Vacant);
        assert!(world.here(tile).is_none());
        assert!(world.active_map().items().is_empty());
    }

    #[test]
    fn collapse_only_touches_the_active_map() {
        let mut world = World::new().expect("world");
        let tile = Position::new(3, 3);
        world.add_power_up(tile);
        world.erase(tile);

        let _ = world.set_active(MapId::CAVE);
        world.add_pebble(tile);
        assert_eq!(world.here(tile).map(Entity::kind), Some(EntityKind::Pebble));

        let _ = world.set_active(MapId::MAIN);
        assert_eq!(query::tile(&world, tile), TileState::Cleared);
    }

    #[test]
    fn probing_past_the_border_finds_nothing() {
        let mut world = World::new().expect("world");
        world.add_wall(Position::new(0, 0), Orientation::Vertical, 3);
        world.add_wall(Position::new(49, 0), Orientation::Vertical, 1);
        assert!(world.west(Position::new(0, 1)).is_none());
        assert_eq!(world.here(Position::new(0, 1)).map(Entity::kind), Some(EntityKind::Wall));
    }
}
