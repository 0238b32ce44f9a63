#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Tile Quest engine.
//!
//! This crate defines the vocabulary that connects adapters, the
//! authoritative world, and pure systems. Adapters reduce raw button state
//! into a single [`Action`] per frame, the gameplay system interprets that
//! action against the world and answers with a [`FrameResult`], and the
//! rendering layer maps every [`Sprite`] to a concrete draw routine.

use serde::Deserialize;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Tile Quest.";

/// Number of independent maps owned by the world registry.
pub const MAP_COUNT: usize = 3;

/// Location of a single tile expressed as signed column and row coordinates.
///
/// Coordinates are signed so that probing one tile past the border of a map
/// is representable; such probes simply never find anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Position {
    /// Zero-based column of the tile.
    pub x: i32,
    /// Zero-based row of the tile.
    pub y: i32,
}

impl Position {
    /// Creates a new tile position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position `distance` tiles away in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }

    /// Returns the position addressed by a directional probe.
    #[must_use]
    pub const fn neighbor(self, neighbor: Neighbor) -> Self {
        match neighbor.direction() {
            Some(direction) => self.step(direction, 1),
            None => self,
        }
    }
}

/// Cardinal movement directions available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Column and row offsets of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

/// Tiles that a directional query can address relative to a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbor {
    /// Tile immediately above.
    North,
    /// Tile immediately below.
    South,
    /// Tile immediately to the right.
    East,
    /// Tile immediately to the left.
    West,
    /// The tile at the position itself.
    Here,
}

impl Neighbor {
    /// Probe order used when scanning the surroundings of the player.
    pub const SCAN_ORDER: [Neighbor; 5] = [
        Neighbor::North,
        Neighbor::South,
        Neighbor::East,
        Neighbor::West,
        Neighbor::Here,
    ];

    /// Direction of the probe, or `None` for [`Neighbor::Here`].
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::North => Some(Direction::North),
            Self::South => Some(Direction::South),
            Self::East => Some(Direction::East),
            Self::West => Some(Direction::West),
            Self::Here => None,
        }
    }
}

impl From<Direction> for Neighbor {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Self::North,
            Direction::East => Self::East,
            Direction::South => Self::South,
            Direction::West => Self::West,
        }
    }
}

/// Axis along which line factories lay out consecutive entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Consecutive tiles along increasing columns.
    Horizontal,
    /// Consecutive tiles along increasing rows.
    Vertical,
}

impl Orientation {
    /// Position of the `offset`-th tile of a line starting at `origin`.
    #[must_use]
    pub const fn offset(self, origin: Position, offset: i32) -> Position {
        match self {
            Self::Horizontal => Position::new(origin.x + offset, origin.y),
            Self::Vertical => Position::new(origin.x, origin.y + offset),
        }
    }
}

/// Identifier of one of the registry's maps.
///
/// Only values below [`MAP_COUNT`] can be constructed, which keeps the
/// registry's active selector valid by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(u8);

impl MapId {
    /// The 50×50 overworld.
    pub const MAIN: MapId = MapId(0);
    /// The 16×16 cave that houses Buzz.
    pub const CAVE: MapId = MapId(1);
    /// The 12×12 secret room.
    pub const SECRET: MapId = MapId(2);

    /// Validates a raw map index.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < MAP_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based slot of the map inside the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterator over every valid map identifier in slot order.
    pub fn all() -> impl Iterator<Item = MapId> {
        (0..MAP_COUNT).filter_map(MapId::new)
    }
}

/// Destination attached to a portal-bearing entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortalTarget {
    /// Map activated when the portal is taken.
    pub map: MapId,
    /// Tile the player lands on inside the target map.
    pub position: Position,
}

impl PortalTarget {
    /// Creates a new portal destination.
    #[must_use]
    pub const fn new(map: MapId, position: Position) -> Self {
        Self { map, position }
    }
}

/// Behavioural kind of a world entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Impassable wall segment.
    Wall,
    /// Locked door guarding the Ramblin' Wreck.
    Door,
    /// Decorative plant.
    Plant,
    /// Walkable mud.
    Mud,
    /// The quest giver.
    Npc,
    /// Portal leading back out of a side map.
    Stairs,
    /// Portal into Buzz's cave.
    Cave,
    /// Water spell pickup.
    Water,
    /// Fire spell pickup.
    Fire,
    /// Earth spell pickup.
    Earth,
    /// Wizard Buzz, the boss.
    Buzz,
    /// Buzz after being defeated.
    SlainBuzz,
    /// The Ramblin' Wreck car.
    RamblinWreck,
    /// Hazard costing health when bumped into.
    Pebble,
    /// Small health pickup.
    PowerUp,
    /// One-shot gift granting the fancy hat.
    GiftBox,
    /// Decorative bush.
    Bush,
    /// Hazard costing health when stepped near.
    Hole,
    /// Hidden portal into the secret map.
    SecretDoor,
    /// Large health pickup.
    Mushroom,
}

impl EntityKind {
    /// Fixed walkability of the kind.
    #[must_use]
    pub const fn walkable(self) -> bool {
        !matches!(
            self,
            Self::Wall
                | Self::Door
                | Self::Npc
                | Self::Buzz
                | Self::SlainBuzz
                | Self::RamblinWreck
                | Self::GiftBox
        )
    }

    /// Single character used by the console map dump.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => 'W',
            Self::Door => 'D',
            Self::Plant => 'P',
            Self::Mud => 'M',
            Self::Npc => 'N',
            Self::Stairs => 'S',
            Self::Cave => 'C',
            Self::Water => 'w',
            Self::Fire => 'f',
            Self::Earth => 'e',
            Self::Buzz => 'B',
            Self::SlainBuzz => 'b',
            Self::RamblinWreck => 'R',
            Self::Pebble => '.',
            Self::PowerUp => '+',
            Self::GiftBox => 'G',
            Self::Bush => '*',
            Self::Hole => 'O',
            Self::SecretDoor => '?',
            Self::Mushroom => 'm',
        }
    }
}

/// Quadrant of the 2×2 cave mouth, selecting a cosmetic tile variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaveTile {
    /// Upper-left quadrant.
    TopLeft,
    /// Upper-right quadrant.
    TopRight,
    /// Lower-left quadrant.
    BottomLeft,
    /// Lower-right quadrant.
    BottomRight,
}

/// Draw capability handle carried by every entity.
///
/// The rendering layer owns the lookup from sprite to pixels, so entities
/// never embed a callable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Blank floor; also used for explicitly cleared tiles.
    Nothing,
    /// Wall segment.
    Wall,
    /// Door.
    Door,
    /// Plant.
    Plant,
    /// Mud.
    Mud,
    /// Quest giver.
    Npc,
    /// Stairs.
    Stairs,
    /// Stairs hidden inside the secret map.
    SecretStairs,
    /// One quadrant of the cave mouth.
    Cave(CaveTile),
    /// Water spell.
    Water,
    /// Fire spell.
    Fire,
    /// Earth spell.
    Earth,
    /// Buzz.
    Buzz,
    /// Defeated Buzz.
    SlainBuzz,
    /// Ramblin' Wreck.
    Wreck,
    /// Pebble.
    Pebble,
    /// Power-up.
    PowerUp,
    /// Gift box.
    GiftBox,
    /// Bush.
    Bush,
    /// Hole.
    Hole,
    /// Secret entrance.
    SecretEntrance,
    /// Mushroom.
    Mushroom,
}

/// Discrete action derived from the input snapshot of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Nothing was pressed.
    NoAction,
    /// Context-sensitive interaction with the surroundings.
    ActionButton,
    /// Shows the inventory.
    MenuButton,
    /// Toggles Ramblin' mode (walk through walls).
    RamblinMode,
    /// Toggles four-tile teleport strides.
    Run,
    /// Attempts to walk one tile (or one stride) in a direction.
    Move(Direction),
}

/// Button and navigation-switch state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Primary action button.
    pub action_button: bool,
    /// Menu button.
    pub menu_button: bool,
    /// Special button that toggles Ramblin' mode.
    pub special_button: bool,
    /// Navigation switch pushed left.
    pub left: bool,
    /// Navigation switch pushed right.
    pub right: bool,
    /// Navigation switch pushed up.
    pub up: bool,
    /// Navigation switch pushed down.
    pub down: bool,
    /// Navigation switch pressed in.
    pub center: bool,
}

impl InputSnapshot {
    /// Reduces the snapshot to exactly one action using the fixed priority
    /// action > menu > special > left > right > up > down > center.
    #[must_use]
    pub const fn action(&self) -> Action {
        if self.action_button {
            Action::ActionButton
        } else if self.menu_button {
            Action::MenuButton
        } else if self.special_button {
            Action::RamblinMode
        } else if self.left {
            Action::Move(Direction::West)
        } else if self.right {
            Action::Move(Direction::East)
        } else if self.up {
            Action::Move(Direction::North)
        } else if self.down {
            Action::Move(Direction::South)
        } else if self.center {
            Action::Run
        } else {
            Action::NoAction
        }
    }
}

/// Classification of a processed frame for the render layer and game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameResult {
    /// Incremental redraw is sufficient.
    NoResult,
    /// Every visible tile must be repainted.
    FullDraw,
    /// The door was unlocked with the key; the game is won.
    GameOver,
}

/// Text presentation collaborator consumed by the gameplay system.
pub trait Dialogue {
    /// Displays an ordered sequence of short lines to the player.
    fn speak(&mut self, lines: &[&str]);

    /// Shows the configuration screen and blocks until the player continues.
    fn show_configuration(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_priority_prefers_action_button() {
        let snapshot = InputSnapshot {
            action_button: true,
            menu_button: true,
            left: true,
            center: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snapshot.action(), Action::ActionButton);
    }

    #[test]
    fn input_priority_orders_navigation_switch() {
        let snapshot = InputSnapshot {
            right: true,
            up: true,
            down: true,
            center: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snapshot.action(), Action::Move(Direction::East));

        let snapshot = InputSnapshot {
            special_button: true,
            left: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snapshot.action(), Action::RamblinMode);

        let snapshot = InputSnapshot {
            center: true,
            ..InputSnapshot::default()
        };
        assert_eq!(snapshot.action(), Action::Run);
        assert_eq!(InputSnapshot::default().action(), Action::NoAction);
    }

    #[test]
    fn map_id_rejects_out_of_range_slots() {
        assert_eq!(MapId::new(2), Some(MapId::SECRET));
        assert_eq!(MapId::new(3), None);
        assert_eq!(MapId::all().count(), MAP_COUNT);
    }

    #[test]
    fn neighbor_positions_follow_screen_axes() {
        let origin = Position::new(4, 4);
        assert_eq!(origin.neighbor(Neighbor::North), Position::new(4, 3));
        assert_eq!(origin.neighbor(Neighbor::South), Position::new(4, 5));
        assert_eq!(origin.neighbor(Neighbor::East), Position::new(5, 4));
        assert_eq!(origin.neighbor(Neighbor::West), Position::new(3, 4));
        assert_eq!(origin.neighbor(Neighbor::Here), origin);
        assert_eq!(origin.step(Direction::West, 4), Position::new(0, 4));
    }

    #[test]
    fn walkability_table_blocks_solid_kinds() {
        assert!(!EntityKind::Wall.walkable());
        assert!(!EntityKind::GiftBox.walkable());
        assert!(EntityKind::Hole.walkable());
        assert!(EntityKind::SecretDoor.walkable());
    }
}
