//! Player state mutated by the gameplay system.

use tile_quest_core::Position;

/// Health granted to a fresh player.
pub const DEFAULT_MAX_HEALTH: i32 = 50;

/// Tile a fresh player starts on.
pub const DEFAULT_START: Position = Position::new(5, 5);

/// Mutable state of the single player.
///
/// The previous position and health are kept only so the render layer can
/// diff consecutive frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Current tile.
    pub position: Position,
    /// Tile occupied at the start of the last processed frame.
    pub previous_position: Position,
    /// Current health. May drop below zero before the game loop notices.
    pub health: i32,
    /// Health at the start of the last processed frame.
    pub previous_health: i32,
    /// Upper bound for healing.
    pub max_health: i32,
    /// The key to the Ramblin' Wreck has been granted.
    pub has_key: bool,
    /// Buzz has been defeated.
    pub game_solved: bool,
    /// The quest giver has explained the quest.
    pub talked_to_npc: bool,
    /// Ramblin' mode: walls no longer block movement.
    pub ramblin_active: bool,
    /// Water spell equipped.
    pub water_spell: bool,
    /// Fire spell equipped.
    pub fire_spell: bool,
    /// Earth spell equipped.
    pub earth_spell: bool,
    /// Movement advances four tiles per step when the path is clear.
    pub teleporting: bool,
    /// The fancy hat from the gift box is worn.
    pub fancy_hat: bool,
}

impl Player {
    /// Creates a player at `position` with full health.
    #[must_use]
    pub const fn new(position: Position, max_health: i32) -> Self {
        Self {
            position,
            previous_position: position,
            health: max_health,
            previous_health: max_health,
            max_health,
            has_key: false,
            game_solved: false,
            talked_to_npc: false,
            ramblin_active: false,
            water_spell: false,
            fire_spell: false,
            earth_spell: false,
            teleporting: false,
            fancy_hat: false,
        }
    }

    /// Snapshots position and health before a frame mutates them.
    pub fn begin_frame(&mut self) {
        self.previous_position = self.position;
        self.previous_health = self.health;
    }

    /// Reports whether the player can still be healed.
    #[must_use]
    pub const fn below_max_health(&self) -> bool {
        self.health < self.max_health
    }

    /// Restores health, never exceeding the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Removes health. The result may become negative.
    pub fn damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Reports the loss condition.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Reports whether the last frame changed the player's tile.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.position != self.previous_position
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_MAX_HEALTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_clamps_at_max_health() {
        let mut player = Player::default();
        player.damage(3);
        player.heal(10);
        assert_eq!(player.health, DEFAULT_MAX_HEALTH);
    }

    #[test]
    fn damage_may_go_negative() {
        let mut player = Player::new(Position::new(0, 0), 10);
        player.damage(25);
        assert_eq!(player.health, -15);
        assert!(player.is_defeated());
    }

    #[test]
    fn begin_frame_records_previous_state() {
        let mut player = Player::default();
        player.position = Position::new(6, 5);
        player.begin_frame();
        assert_eq!(player.previous_position, Position::new(6, 5));
        assert!(!player.moved());
    }
}
