use tile_quest_core::{
    Action, Dialogue, Direction, EntityKind, FrameResult, MapId, Orientation, PortalTarget,
    Position,
};
use tile_quest_system_gameplay::Gameplay;
use tile_quest_world::{query, Entity, TileState, World};

#[derive(Debug, Default)]
struct Transcript {
    lines: Vec<String>,
    configurations: usize,
}

impl Transcript {
    fn said(&self, line: &str) -> bool {
        self.lines.iter().any(|spoken| spoken == line)
    }
}

impl Dialogue for Transcript {
    fn speak(&mut self, lines: &[&str]) {
        self.lines.extend(lines.iter().map(|line| line.to_string()));
    }

    fn show_configuration(&mut self) {
        self.configurations += 1;
    }
}

fn world_with_player_at(position: Position) -> World {
    let mut world = World::new().expect("world");
    world.player_mut().position = position;
    world
}

fn press(world: &mut World, transcript: &mut Transcript, action: Action) -> FrameResult {
    Gameplay.update(world, transcript, action)
}

#[test]
fn fire_spell_defeats_buzz_and_leaves_slain_buzz_in_place() {
    let mut world = world_with_player_at(Position::new(8, 9));
    let _ = world.set_active(MapId::CAVE);
    world.add_buzz(Position::new(8, 8));
    world.player_mut().fire_spell = true;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::ActionButton);

    assert_eq!(result, FrameResult::FullDraw);
    let player = query::player(&world);
    assert!(player.game_solved);
    assert!(!player.fire_spell);
    assert_eq!(player.health, 50);
    let slot = world.active_map().entity_at(Position::new(8, 8)).map(Entity::kind);
    assert_eq!(slot, Some(EntityKind::SlainBuzz));
    assert!(transcript.said("Success!"));
}

#[test]
fn buzz_spells_are_tried_water_then_earth_then_unarmed() {
    let mut world = world_with_player_at(Position::new(8, 9));
    world.add_buzz(Position::new(8, 8));
    {
        let player = world.player_mut();
        player.water_spell = true;
        player.earth_spell = true;
    }
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(query::player(&world).health, 25);
    assert!(!query::player(&world).water_spell);
    assert!(query::player(&world).earth_spell);

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(query::player(&world).health, 10);
    assert!(!query::player(&world).earth_spell);
    assert!(transcript.said("Damage: 15"));
    assert!(!transcript.said("Try another one"));

    let result = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::player(&world).health, 5);
    assert!(!query::player(&world).game_solved);
    assert!(transcript.said("Damage: 5"));
}

#[test]
fn locked_door_requires_the_key() {
    let mut world = world_with_player_at(Position::new(33, 11));
    world.add_door(Position::new(33, 10), Orientation::Horizontal, 4);
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(result, FrameResult::FullDraw);
    assert!(!query::player(&world).has_key);
    assert!(transcript.said("this locked door"));
    assert!(!transcript.said("Find the key"));

    world.player_mut().has_key = true;
    let result = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(result, FrameResult::GameOver);
}

#[test]
fn secret_door_moves_player_to_its_target() {
    let mut world = world_with_player_at(Position::new(47, 48));
    world.add_secret_entrance(
        Position::new(48, 48),
        PortalTarget::new(MapId::SECRET, Position::new(5, 5)),
    );
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::ActionButton);

    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::active_map_index(&world), MapId::SECRET);
    assert_eq!(query::player(&world).position, Position::new(5, 5));
}

#[test]
fn cave_is_gated_on_talking_to_the_npc() {
    let mut world = world_with_player_at(Position::new(5, 19));
    world.add_cave(
        Position::new(5, 20),
        tile_quest_core::CaveTile::TopLeft,
        PortalTarget::new(MapId::CAVE, Position::new(4, 4)),
    );
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(query::active_map_index(&world), MapId::MAIN);
    assert!(transcript.said("interesting"));

    world.player_mut().talked_to_npc = true;
    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(query::active_map_index(&world), MapId::CAVE);
    assert_eq!(query::player(&world).position, Position::new(4, 4));
}

#[test]
fn stairs_lead_back_to_the_main_map() {
    let mut world = world_with_player_at(Position::new(4, 5));
    let _ = world.set_active(MapId::SECRET);
    world.add_secret_stairs(
        Position::new(4, 6),
        PortalTarget::new(MapId::MAIN, Position::new(48, 48)),
    );
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);

    assert_eq!(query::active_map_index(&world), MapId::MAIN);
    assert_eq!(query::player(&world).position, Position::new(48, 48));
    assert!(transcript.said("main map."));
}

#[test]
fn npc_conversation_advances_through_three_stages() {
    let mut world = world_with_player_at(Position::new(20, 6));
    world.add_npc(Position::new(20, 5));
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert!(query::player(&world).talked_to_npc);
    assert!(transcript.said("Hello there!"));

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert!(transcript.said("Please don't"));
    assert!(!query::player(&world).has_key);

    world.player_mut().game_solved = true;
    let result = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(result, FrameResult::FullDraw);
    assert!(query::player(&world).has_key);
}

#[test]
fn npc_takes_priority_over_a_neighbouring_door() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_door(Position::new(10, 9), Orientation::Horizontal, 1);
    world.add_npc(Position::new(10, 11));
    world.player_mut().has_key = true;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::ActionButton);

    assert_eq!(result, FrameResult::FullDraw);
    assert!(query::player(&world).talked_to_npc);
}

#[test]
fn gift_box_is_opened_once() {
    let mut world = world_with_player_at(Position::new(6, 7));
    let _ = world.set_active(MapId::SECRET);
    world.add_power_up(Position::new(7, 7));
    world.add_gift_box(Position::new(7, 7));
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert!(query::player(&world).fancy_hat);
    assert_eq!(query::tile(&world, Position::new(7, 7)), TileState::Cleared);

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    assert_eq!(query::tile(&world, Position::new(7, 7)), TileState::Vacant);
    assert_eq!(transcript.configurations, 1);
}

#[test]
fn spells_equip_once() {
    let mut world = world_with_player_at(Position::new(5, 6));
    world.add_water(Position::new(5, 5));
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::ActionButton);
    let _ = press(&mut world, &mut transcript, Action::ActionButton);

    assert!(query::player(&world).water_spell);
    assert_eq!(
        transcript.lines,
        ["WATER spell", "equipped.", "WATER spell", "already equipped"]
    );
}

#[test]
fn teleport_stride_is_all_or_nothing() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.player_mut().teleporting = true;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::Move(Direction::East));
    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::player(&world).position, Position::new(14, 10));

    world.add_wall(Position::new(17, 10), Orientation::Vertical, 1);
    let result = press(&mut world, &mut transcript, Action::Move(Direction::East));
    assert_eq!(result, FrameResult::NoResult);
    assert_eq!(query::player(&world).position, Position::new(15, 10));
}

#[test]
fn walls_block_unless_ramblin_mode_is_active() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_wall(Position::new(10, 9), Orientation::Horizontal, 1);
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::Move(Direction::North));
    assert_eq!(query::player(&world).position, Position::new(10, 10));

    let result = press(&mut world, &mut transcript, Action::RamblinMode);
    assert_eq!(result, FrameResult::FullDraw);
    let _ = press(&mut world, &mut transcript, Action::Move(Direction::North));
    assert_eq!(query::player(&world).position, Position::new(10, 9));
    assert!(query::player(&world).moved());
}

#[test]
fn hazards_hurt_when_walked_into() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_pebble(Position::new(11, 10));
    world.add_hole(Position::new(9, 10));
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::Move(Direction::East));
    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::player(&world).health, 40);
    assert_eq!(query::player(&world).previous_health, 50);
    assert_eq!(query::player(&world).position, Position::new(11, 10));

    // Standing on the pebble, the hole is now two tiles away.
    let _ = press(&mut world, &mut transcript, Action::Move(Direction::West));
    let _ = press(&mut world, &mut transcript, Action::Move(Direction::West));
    assert_eq!(query::player(&world).health, 30);
    assert!(transcript.said("a hole!"));
}

#[test]
fn teleport_stride_skips_hazard_checks() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_pebble(Position::new(11, 10));
    world.player_mut().teleporting = true;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::Move(Direction::East));

    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::player(&world).position, Position::new(14, 10));
    assert_eq!(query::player(&world).health, 50);
    assert!(transcript.lines.is_empty());
}

#[test]
fn stride_reads_collapse_erased_tiles() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_bush(Position::new(12, 10));
    world.erase(Position::new(12, 10));
    world.player_mut().teleporting = true;
    let mut transcript = Transcript::default();

    let _ = press(&mut world, &mut transcript, Action::Move(Direction::East));

    assert_eq!(query::player(&world).position, Position::new(14, 10));
    assert_eq!(query::tile(&world, Position::new(12, 10)), TileState::Vacant);
}

#[test]
fn pickups_heal_up_to_the_maximum_without_being_consumed() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.add_mushroom(Position::new(10, 11));
    world.player_mut().health = 45;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::Move(Direction::South));
    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(query::player(&world).health, 50);

    let _ = press(&mut world, &mut transcript, Action::Move(Direction::North));
    let _ = press(&mut world, &mut transcript, Action::Move(Direction::South));
    assert_eq!(query::player(&world).health, 50);
    assert!(transcript.said("max health."));
    let kind = world.active_map().entity_at(Position::new(10, 11)).map(Entity::kind);
    assert_eq!(kind, Some(EntityKind::Mushroom));
}

#[test]
fn menu_lists_inventory() {
    let mut world = world_with_player_at(Position::new(10, 10));
    world.player_mut().fire_spell = true;
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::MenuButton);

    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(
        transcript.lines,
        [
            "Inventory",
            "of Spells...",
            "Water Spell:",
            "none",
            "Earth Spell:",
            "none",
            "Fire Spell:",
            "equipped",
            "Fancy Hat:",
            "none",
        ]
    );
}

#[test]
fn run_toggles_teleporting_and_idle_frames_do_nothing() {
    let mut world = world_with_player_at(Position::new(10, 10));
    let mut transcript = Transcript::default();

    assert_eq!(press(&mut world, &mut transcript, Action::Run), FrameResult::FullDraw);
    assert!(query::player(&world).teleporting);
    assert_eq!(press(&mut world, &mut transcript, Action::Run), FrameResult::FullDraw);
    assert!(!query::player(&world).teleporting);

    let result = press(&mut world, &mut transcript, Action::NoAction);
    assert_eq!(result, FrameResult::NoResult);
    assert_eq!(transcript.lines.len(), 8);
}

#[test]
fn nothing_nearby_falls_back_to_configuration() {
    let mut world = world_with_player_at(Position::new(10, 10));
    let mut transcript = Transcript::default();

    let result = press(&mut world, &mut transcript, Action::ActionButton);

    assert_eq!(result, FrameResult::FullDraw);
    assert_eq!(transcript.configurations, 1);
    assert!(transcript.said("configuration..."));
}
