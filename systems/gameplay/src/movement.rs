//! Walking, teleport strides, proximity hazards and the two movement toggles.

use tile_quest_core::{Dialogue, Direction, EntityKind, FrameResult, Neighbor, Position};
use tile_quest_world::{in_bounds, Entity, World};
use tracing::debug;

use crate::{lines, Surroundings};

const STRIDE: i32 = 4;
const HAZARD_DAMAGE: i32 = 10;
const POWER_UP_HEAL: i32 = 5;
const MUSHROOM_HEAL: i32 = 10;

pub(crate) fn step(
    world: &mut World,
    dialogue: &mut dyn Dialogue,
    surroundings: &Surroundings,
    direction: Direction,
) -> FrameResult {
    let origin = world.player().position;
    let ahead = surroundings.get(Neighbor::from(direction));
    let walkable = ahead.map_or(true, Entity::walkable);

    if walkable || world.player().ramblin_active {
        if world.player().teleporting && stride_is_clear(world, origin, direction) {
            let destination = origin.step(direction, STRIDE);
            debug!(?origin, ?destination, "teleport stride");
            world.player_mut().position = destination;
            return FrameResult::FullDraw;
        }
        world.player_mut().position = origin.step(direction, 1);
    }

    // Hazards and pickups react to the tile that was ahead, entered or not.
    match ahead.map(Entity::kind) {
        Some(EntityKind::Pebble) => {
            dialogue.speak(lines::PEBBLE);
            world.player_mut().damage(HAZARD_DAMAGE);
            FrameResult::FullDraw
        }
        Some(EntityKind::Hole) => {
            dialogue.speak(lines::HOLE);
            world.player_mut().damage(HAZARD_DAMAGE);
            FrameResult::FullDraw
        }
        Some(EntityKind::PowerUp) => heal(world, dialogue, POWER_UP_HEAL, lines::POWER_UP),
        Some(EntityKind::Mushroom) => heal(world, dialogue, MUSHROOM_HEAL, lines::MUSHROOM),
        _ => FrameResult::NoResult,
    }
}

pub(crate) fn toggle_teleport(world: &mut World, dialogue: &mut dyn Dialogue) -> FrameResult {
    let player = world.player_mut();
    player.teleporting = !player.teleporting;
    debug!(enabled = player.teleporting, "teleporting toggled");
    dialogue.speak(if player.teleporting {
        lines::TELEPORT_ON
    } else {
        lines::TELEPORT_OFF
    });
    FrameResult::FullDraw
}

pub(crate) fn toggle_ramblin(world: &mut World, dialogue: &mut dyn Dialogue) -> FrameResult {
    let player = world.player_mut();
    player.ramblin_active = !player.ramblin_active;
    debug!(enabled = player.ramblin_active, "ramblin' mode toggled");
    dialogue.speak(if player.ramblin_active {
        lines::RAMBLIN_ON
    } else {
        lines::RAMBLIN_OFF
    });
    FrameResult::FullDraw
}

/// Every tile of the stride must lie on the map and be walkable on its own
/// merits.
fn stride_is_clear(world: &mut World, origin: Position, direction: Direction) -> bool {
    (1..=STRIDE).all(|distance| {
        let tile = origin.step(direction, distance);
        in_bounds(world, tile) && world.look(Neighbor::Here, tile).map_or(true, Entity::walkable)
    })
}

fn heal(
    world: &mut World,
    dialogue: &mut dyn Dialogue,
    amount: i32,
    script: &[&str],
) -> FrameResult {
    let player = world.player_mut();
    if player.below_max_health() {
        dialogue.speak(script);
        player.heal(amount);
    } else {
        dialogue.speak(lines::MAX_HEALTH);
    }
    FrameResult::FullDraw
}
