#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure bootstrap system that prepares the Tile Quest experience.

use tile_quest_core::{
    CaveTile, MapId, Orientation, PortalTarget, Position, WELCOME_BANNER,
};
use tile_quest_world::{Player, World, WorldError};
use tracing::{debug, info};

/// Upper-left tile of the 2×2 cave mouth on the main map.
pub const CAVE_MOUTH: Position = Position::new(5, 20);

/// Tile of the secret entrance on the main map.
pub const SECRET_ENTRANCE: Position = Position::new(48, 48);

const CAVE_ARRIVAL: Position = Position::new(4, 4);
const SECRET_ARRIVAL: Position = Position::new(5, 5);
const STAIRS: Position = Position::new(4, 6);

const PLANT_STRIDE: usize = 39;
const PEBBLE_STRIDE: usize = 63;

/// Produces the stock world the game starts in.
#[derive(Debug, Default)]
pub struct Bootstrap;

impl Bootstrap {
    /// Derives the banner that should be shown when the experience starts.
    #[must_use]
    pub fn welcome_banner(&self) -> &'static str {
        WELCOME_BANNER
    }

    /// Builds a world around `player`, populates all three maps and leaves
    /// the main map active.
    pub fn build(&self, player: Player) -> Result<World, WorldError> {
        let mut world = World::with_player(player)?;
        self.populate(&mut world);
        Ok(world)
    }

    /// Populates every map of `world` with the stock content.
    pub fn populate(&self, world: &mut World) {
        populate_secret(world);
        populate_cave(world);
        populate_main(world);
        info!(
            main = world.registry().map(MapId::MAIN).items().len(),
            cave = world.registry().map(MapId::CAVE).items().len(),
            secret = world.registry().map(MapId::SECRET).items().len(),
            "maps populated"
        );
    }
}

fn populate_main(world: &mut World) {
    let _ = world.set_active(MapId::MAIN);
    let width = world.width() as usize;
    let height = world.height() as usize;
    let area = world.area() as usize;

    for i in (width + 3..area).step_by(PLANT_STRIDE) {
        place_at(world, i % width, i / width, World::add_plant);
        place_at(world, (i + 5) / height, (i + 5) % height, World::add_bush);
    }
    for i in (width + 3..area).step_by(PEBBLE_STRIDE) {
        place_at(world, i / (width / 2), i % width + 5, World::add_pebble);
        if let Some(x) = (i % height).checked_sub(2) {
            place_at(world, x, i / (height / 3), World::add_power_up);
        }
    }

    add_border(world);

    world.add_wall(Position::new(30, 0), Orientation::Vertical, 10);
    world.add_wall(Position::new(30, 10), Orientation::Horizontal, 10);
    world.add_wall(Position::new(39, 0), Orientation::Vertical, 10);
    world.add_door(Position::new(33, 10), Orientation::Horizontal, 4);

    let cave = PortalTarget::new(MapId::CAVE, CAVE_ARRIVAL);
    for (dx, dy, tile) in [
        (0, 0, CaveTile::TopLeft),
        (1, 0, CaveTile::TopRight),
        (0, 1, CaveTile::BottomLeft),
        (1, 1, CaveTile::BottomRight),
    ] {
        let position = Position::new(CAVE_MOUTH.x + dx, CAVE_MOUTH.y + dy);
        world.add_cave(position, tile, cave);
    }

    world.add_npc(Position::new(20, 5));
    world.add_wreck(Position::new(35, 9));
    for corner in [10, 20, 30, 40] {
        world.add_hole(Position::new(corner, corner));
    }
    world.add_secret_entrance(
        SECRET_ENTRANCE,
        PortalTarget::new(MapId::SECRET, SECRET_ARRIVAL),
    );
    debug!(entries = world.active_map().items().len(), "main map ready");
}

fn populate_cave(world: &mut World) {
    let _ = world.set_active(MapId::CAVE);
    add_border(world);

    world.add_water(Position::new(5, 5));
    world.add_fire(Position::new(13, 1));
    world.add_earth(Position::new(8, 12));
    let centre = Position::new(world.width() as i32 / 2, world.height() as i32 / 2);
    world.add_buzz(centre);
    world.add_stairs(STAIRS, PortalTarget::new(MapId::MAIN, CAVE_MOUTH));
    world.add_pebble(Position::new(9, 5));
    world.add_power_up(Position::new(13, 12));
    debug!(entries = world.active_map().items().len(), "cave map ready");
}

fn populate_secret(world: &mut World) {
    let _ = world.set_active(MapId::SECRET);
    add_border(world);

    world.add_secret_stairs(STAIRS, PortalTarget::new(MapId::MAIN, SECRET_ENTRANCE));
    world.add_power_up(Position::new(9, 9));
    world.add_power_up(Position::new(7, 7));
    world.add_mushroom(Position::new(10, 10));
    // The gift box lands on the second power-up and replaces it.
    let centre = Position::new(world.width() as i32 / 2 + 1, world.height() as i32 / 2 + 1);
    world.add_gift_box(centre);
    debug!(entries = world.active_map().items().len(), "secret map ready");
}

fn add_border(world: &mut World) {
    let width = world.width();
    let height = world.height();
    let right = width as i32 - 1;
    let bottom = height as i32 - 1;
    world.add_wall(Position::new(0, 0), Orientation::Horizontal, width);
    world.add_wall(Position::new(0, bottom), Orientation::Horizontal, width);
    world.add_wall(Position::new(0, 0), Orientation::Vertical, height);
    world.add_wall(Position::new(right, 0), Orientation::Vertical, height);
}

/// Scattered decoration formulas can overshoot the map; the factories drop
/// those tiles.
fn place_at(world: &mut World, x: usize, y: usize, add: fn(&mut World, Position)) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        add(world, Position::new(x, y));
    }
}
