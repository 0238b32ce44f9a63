//! Context-sensitive action button and the inventory menu.

use tile_quest_core::{Dialogue, EntityKind, FrameResult, Sprite};
use tile_quest_world::{Entity, World};
use tracing::{info, warn};

use crate::{lines, Probe, Surroundings};

const WATER_DAMAGE: i32 = 25;
const EARTH_DAMAGE: i32 = 15;
const UNARMED_DAMAGE: i32 = 5;

pub(crate) fn interact(
    world: &mut World,
    dialogue: &mut dyn Dialogue,
    surroundings: &Surroundings,
) -> FrameResult {
    if surroundings.find(EntityKind::Npc).is_some() {
        return talk_to_npc(world, dialogue);
    }

    if surroundings.find(EntityKind::Door).is_some() {
        if world.player().has_key {
            info!("door unlocked with the key");
            return FrameResult::GameOver;
        }
        dialogue.speak(lines::DOOR_LOCKED);
        return FrameResult::FullDraw;
    }

    if let Some(probe) = surroundings.find(EntityKind::Cave) {
        if world.player().talked_to_npc {
            dialogue.speak(lines::CAVE_ENTER);
            take_portal(world, probe);
        } else {
            dialogue.speak(lines::CAVE_CURIOUS);
        }
        return FrameResult::FullDraw;
    }

    if let Some(probe) = surroundings.find(EntityKind::SecretDoor) {
        dialogue.speak(lines::SECRET_DOOR);
        take_portal(world, probe);
        return FrameResult::FullDraw;
    }

    if let Some(probe) = surroundings.find(EntityKind::Stairs) {
        let secret = probe
            .entity
            .as_ref()
            .is_some_and(|entity| entity.sprite() == Sprite::SecretStairs);
        dialogue.speak(if secret {
            lines::SECRET_EXIT
        } else {
            lines::CAVE_EXIT
        });
        take_portal(world, probe);
        return FrameResult::FullDraw;
    }

    if let Some(probe) = surroundings.find(EntityKind::GiftBox) {
        dialogue.speak(lines::GIFT_BOX);
        world.player_mut().fancy_hat = true;
        world.erase(probe.position);
        info!("fancy hat equipped");
        return FrameResult::FullDraw;
    }

    if surroundings.find(EntityKind::Water).is_some() {
        return equip(dialogue, &mut world.player_mut().water_spell, Spell::Water);
    }
    if surroundings.find(EntityKind::Fire).is_some() {
        return equip(dialogue, &mut world.player_mut().fire_spell, Spell::Fire);
    }
    if surroundings.find(EntityKind::Earth).is_some() {
        return equip(dialogue, &mut world.player_mut().earth_spell, Spell::Earth);
    }

    if let Some(probe) = surroundings.find(EntityKind::Buzz) {
        return fight_buzz(world, dialogue, probe);
    }

    dialogue.speak(lines::CONFIGURATION);
    dialogue.show_configuration();
    FrameResult::FullDraw
}

pub(crate) fn show_inventory(world: &World, dialogue: &mut dyn Dialogue) -> FrameResult {
    let player = world.player();
    let state = |equipped: bool| if equipped { lines::EQUIPPED } else { lines::NONE };
    dialogue.speak(&[
        "Inventory",
        "of Spells...",
        "Water Spell:",
        state(player.water_spell),
        "Earth Spell:",
        state(player.earth_spell),
        "Fire Spell:",
        state(player.fire_spell),
        "Fancy Hat:",
        state(player.fancy_hat),
    ]);
    FrameResult::FullDraw
}

fn talk_to_npc(world: &mut World, dialogue: &mut dyn Dialogue) -> FrameResult {
    let player = world.player_mut();
    match (player.talked_to_npc, player.game_solved) {
        (true, false) => dialogue.speak(lines::NPC_REMINDER),
        (true, true) => {
            player.has_key = true;
            info!("key to the Ramblin' Wreck granted");
            dialogue.speak(lines::NPC_REWARD);
        }
        (false, _) => {
            player.talked_to_npc = true;
            info!("quest accepted");
            dialogue.speak(lines::NPC_QUEST);
        }
    }
    FrameResult::FullDraw
}

#[derive(Clone, Copy)]
enum Spell {
    Water,
    Fire,
    Earth,
}

fn equip(dialogue: &mut dyn Dialogue, slot: &mut bool, spell: Spell) -> FrameResult {
    let (equipped, already) = match spell {
        Spell::Water => (lines::WATER_EQUIPPED, lines::WATER_ALREADY),
        Spell::Fire => (lines::FIRE_EQUIPPED, lines::FIRE_ALREADY),
        Spell::Earth => (lines::EARTH_EQUIPPED, lines::EARTH_ALREADY),
    };
    if *slot {
        dialogue.speak(already);
    } else {
        *slot = true;
        dialogue.speak(equipped);
    }
    FrameResult::FullDraw
}

fn fight_buzz(world: &mut World, dialogue: &mut dyn Dialogue, buzz: &Probe) -> FrameResult {
    let player = world.player_mut();
    if player.water_spell {
        dialogue.speak(lines::BUZZ_WATER);
        player.damage(WATER_DAMAGE);
        player.water_spell = false;
    } else if player.earth_spell {
        dialogue.speak(lines::BUZZ_EARTH);
        player.damage(EARTH_DAMAGE);
        player.earth_spell = false;
    } else if player.fire_spell {
        dialogue.speak(lines::BUZZ_FIRE);
        player.fire_spell = false;
        player.game_solved = true;
        world.add_slain_buzz(buzz.position);
        info!(position = ?buzz.position, "Buzz defeated");
    } else {
        dialogue.speak(lines::BUZZ_NO_SPELL);
        player.damage(UNARMED_DAMAGE);
    }
    FrameResult::FullDraw
}

fn take_portal(world: &mut World, probe: &Probe) {
    let Some(target) = probe.entity.as_ref().and_then(Entity::portal) else {
        warn!(position = ?probe.position, "portal tile without a destination");
        return;
    };
    let from = world.active_map_index();
    let _ = world.set_active(target.map);
    world.player_mut().position = target.position;
    info!(
        from = from.index(),
        to = target.map.index(),
        position = ?target.position,
        "portal taken"
    );
}
