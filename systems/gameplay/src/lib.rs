#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame-by-frame game state machine for Tile Quest.
//!
//! The system owns no state of its own: every transition is encoded in the
//! player's flags and the entities of the active map. Each call to
//! [`Gameplay::update`] consumes exactly one [`Action`] and reports how the
//! render layer should respond.

mod interaction;
mod lines;
mod movement;

use tile_quest_core::{Action, Dialogue, EntityKind, FrameResult, Neighbor, Position};
use tile_quest_world::{Entity, World};
use tracing::trace;

/// Pure system that interprets one action per frame against the world.
#[derive(Debug, Default)]
pub struct Gameplay;

impl Gameplay {
    /// Applies `action` to the world and classifies the resulting frame.
    ///
    /// Health dropping to zero is not reported here; the game loop checks
    /// the player after every frame.
    pub fn update(
        &mut self,
        world: &mut World,
        dialogue: &mut dyn Dialogue,
        action: Action,
    ) -> FrameResult {
        world.player_mut().begin_frame();
        let origin = world.player().position;
        let surroundings = Surroundings::scan(world, origin);
        trace!(?action, ?origin, "processing frame");

        match action {
            Action::Move(direction) => movement::step(world, dialogue, &surroundings, direction),
            Action::Run => movement::toggle_teleport(world, dialogue),
            Action::RamblinMode => movement::toggle_ramblin(world, dialogue),
            Action::ActionButton => interaction::interact(world, dialogue, &surroundings),
            Action::MenuButton => interaction::show_inventory(world, dialogue),
            Action::NoAction => FrameResult::NoResult,
        }
    }
}

/// Entity found by one directional probe at the start of a frame.
#[derive(Clone, Debug)]
pub(crate) struct Probe {
    pub(crate) position: Position,
    pub(crate) entity: Option<Entity>,
}

/// Snapshot of the player's four neighbours and own tile, in scan order.
#[derive(Clone, Debug)]
pub(crate) struct Surroundings {
    probes: Vec<(Neighbor, Probe)>,
}

impl Surroundings {
    /// Reads every probe through the self-healing directional query.
    pub(crate) fn scan(world: &mut World, origin: Position) -> Self {
        let probes = Neighbor::SCAN_ORDER
            .iter()
            .map(|&neighbor| {
                let probe = Probe {
                    position: origin.neighbor(neighbor),
                    entity: world.look(neighbor, origin).cloned(),
                };
                (neighbor, probe)
            })
            .collect();
        Self { probes }
    }

    /// Entity observed in a specific direction.
    pub(crate) fn get(&self, neighbor: Neighbor) -> Option<&Entity> {
        self.probes
            .iter()
            .find(|(candidate, _)| *candidate == neighbor)
            .and_then(|(_, probe)| probe.entity.as_ref())
    }

    /// First probe in scan order holding an entity of `kind`.
    pub(crate) fn find(&self, kind: EntityKind) -> Option<&Probe> {
        self.probes.iter().map(|(_, probe)| probe).find(|probe| {
            probe
                .entity
                .as_ref()
                .is_some_and(|entity| entity.kind() == kind)
        })
    }
}
