//! Entity definitions and the factories that place them on the active map.

use tile_quest_core::{CaveTile, EntityKind, Orientation, PortalTarget, Position, Sprite};
use tracing::{debug, trace};

use crate::World;

/// Unique identity assigned to every placed entity.
///
/// The render layer diffs frames by identity, so two plants at different
/// tiles never compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// World entity owned by exactly one spatial index slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    sprite: Sprite,
    walkable: bool,
    portal: Option<PortalTarget>,
}

impl Entity {
    /// Builds an entity whose walkability follows its kind.
    #[must_use]
    pub const fn new(
        id: EntityId,
        kind: EntityKind,
        sprite: Sprite,
        portal: Option<PortalTarget>,
    ) -> Self {
        Self {
            id,
            kind,
            sprite,
            walkable: kind.walkable(),
            portal,
        }
    }

    /// Identity of the entity.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Behavioural kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Draw capability handle.
    #[must_use]
    pub const fn sprite(&self) -> Sprite {
        self.sprite
    }

    /// Whether the player may step onto the tile without Ramblin' mode.
    #[must_use]
    pub const fn walkable(&self) -> bool {
        self.walkable
    }

    /// Destination of portal kinds (stairs, caves, secret doors).
    #[must_use]
    pub const fn portal(&self) -> Option<PortalTarget> {
        self.portal
    }
}

impl World {
    /// Places a line of walls starting at `origin`.
    pub fn add_wall(&mut self, origin: Position, orientation: Orientation, len: u32) {
        self.place_line(origin, orientation, len, EntityKind::Wall, Sprite::Wall);
    }

    /// Places a line of doors starting at `origin`.
    pub fn add_door(&mut self, origin: Position, orientation: Orientation, len: u32) {
        self.place_line(origin, orientation, len, EntityKind::Door, Sprite::Door);
    }

    /// Places a line of mud starting at `origin`.
    pub fn add_mud(&mut self, origin: Position, orientation: Orientation, len: u32) {
        self.place_line(origin, orientation, len, EntityKind::Mud, Sprite::Mud);
    }

    /// Places a plant.
    pub fn add_plant(&mut self, position: Position) {
        self.place(position, EntityKind::Plant, Sprite::Plant, None);
    }

    /// Places the quest giver.
    pub fn add_npc(&mut self, position: Position) {
        self.place(position, EntityKind::Npc, Sprite::Npc, None);
    }

    /// Places a water spell.
    pub fn add_water(&mut self, position: Position) {
        self.place(position, EntityKind::Water, Sprite::Water, None);
    }

    /// Places a fire spell.
    pub fn add_fire(&mut self, position: Position) {
        self.place(position, EntityKind::Fire, Sprite::Fire, None);
    }

    /// Places an earth spell.
    pub fn add_earth(&mut self, position: Position) {
        self.place(position, EntityKind::Earth, Sprite::Earth, None);
    }

    /// Places Buzz.
    pub fn add_buzz(&mut self, position: Position) {
        self.place(position, EntityKind::Buzz, Sprite::Buzz, None);
    }

    /// Places a defeated Buzz, typically over the live one.
    pub fn add_slain_buzz(&mut self, position: Position) {
        self.place(position, EntityKind::SlainBuzz, Sprite::SlainBuzz, None);
    }

    /// Places the Ramblin' Wreck.
    pub fn add_wreck(&mut self, position: Position) {
        self.place(position, EntityKind::RamblinWreck, Sprite::Wreck, None);
    }

    /// Places a pebble.
    pub fn add_pebble(&mut self, position: Position) {
        self.place(position, EntityKind::Pebble, Sprite::Pebble, None);
    }

    /// Places a power-up.
    pub fn add_power_up(&mut self, position: Position) {
        self.place(position, EntityKind::PowerUp, Sprite::PowerUp, None);
    }

    /// Places a gift box.
    pub fn add_gift_box(&mut self, position: Position) {
        self.place(position, EntityKind::GiftBox, Sprite::GiftBox, None);
    }

    /// Places a bush.
    pub fn add_bush(&mut self, position: Position) {
        self.place(position, EntityKind::Bush, Sprite::Bush, None);
    }

    /// Places a hole.
    pub fn add_hole(&mut self, position: Position) {
        self.place(position, EntityKind::Hole, Sprite::Hole, None);
    }

    /// Places a mushroom.
    pub fn add_mushroom(&mut self, position: Position) {
        self.place(position, EntityKind::Mushroom, Sprite::Mushroom, None);
    }

    /// Places stairs leading to `target`.
    pub fn add_stairs(&mut self, position: Position, target: PortalTarget) {
        self.place(position, EntityKind::Stairs, Sprite::Stairs, Some(target));
    }

    /// Places one quadrant of the cave mouth leading to `target`.
    pub fn add_cave(&mut self, position: Position, tile: CaveTile, target: PortalTarget) {
        self.place(position, EntityKind::Cave, Sprite::Cave(tile), Some(target));
    }

    /// Places the secret entrance leading to `target`.
    pub fn add_secret_entrance(&mut self, position: Position, target: PortalTarget) {
        self.place(
            position,
            EntityKind::SecretDoor,
            Sprite::SecretEntrance,
            Some(target),
        );
    }

    /// Places the stairs out of the secret map leading to `target`.
    pub fn add_secret_stairs(&mut self, position: Position, target: PortalTarget) {
        self.place(
            position,
            EntityKind::Stairs,
            Sprite::SecretStairs,
            Some(target),
        );
    }

    /// Marks a tile as explicitly emptied.
    ///
    /// The occupant, if any, is dropped. The next directional read of the
    /// tile collapses the marker into true absence. Tiles outside the active
    /// map are ignored.
    pub fn erase(&mut self, position: Position) {
        if !self.accepts(position, "erase") {
            return;
        }
        let map = self.registry.active_mut();
        let key = map.key(position);
        if let Some(previous) = map.items_mut().clear(key) {
            trace!(?position, kind = ?previous.kind(), "erased entity");
        }
    }

    /// Removes the entry at a tile outright, dropping its occupant.
    pub fn delete(&mut self, position: Position) {
        if !self.accepts(position, "delete") {
            return;
        }
        let map = self.registry.active_mut();
        let key = map.key(position);
        if let Some(previous) = map.items_mut().remove(key) {
            trace!(?position, kind = ?previous.kind(), "deleted entity");
        }
    }

    /// Writes outside the active map would alias another row's key.
    fn accepts(&self, position: Position, operation: &'static str) -> bool {
        let inside = self.registry.active().contains(position);
        if !inside {
            debug!(?position, operation, "ignored write outside the active map");
        }
        inside
    }

    fn place_line(
        &mut self,
        origin: Position,
        orientation: Orientation,
        len: u32,
        kind: EntityKind,
        sprite: Sprite,
    ) {
        for offset in 0..len {
            let position = orientation.offset(origin, offset as i32);
            self.place(position, kind, sprite, None);
        }
    }

    fn place(
        &mut self,
        position: Position,
        kind: EntityKind,
        sprite: Sprite,
        portal: Option<PortalTarget>,
    ) {
        if !self.accepts(position, "place") {
            return;
        }
        let entity = Entity::new(self.allocate_id(), kind, sprite, portal);
        let map = self.registry.active_mut();
        let key = map.key(position);
        if let Some(previous) = map.items_mut().insert(key, entity) {
            trace!(
                ?position,
                displaced = ?previous.kind(),
                replacement = ?kind,
                "overwrote occupied tile"
            );
        }
    }
}
