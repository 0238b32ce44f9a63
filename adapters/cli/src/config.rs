use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tile_quest_core::Position;
use tile_quest_world::{DEFAULT_MAX_HEALTH, DEFAULT_START};

const DEFAULT_FRAME_BUDGET_MS: u64 = 100;

/// Tunables loaded from the optional TOML configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameConfig {
    /// Minimum wall-clock duration of one frame.
    pub(crate) frame_budget_ms: u64,
    /// Starting and maximum health of the player.
    pub(crate) max_health: i32,
    /// Starting tile on the main map.
    pub(crate) start: Position,
    /// Whether the terminal renderer emits ANSI colors.
    pub(crate) color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            max_health: DEFAULT_MAX_HEALTH,
            start: DEFAULT_START,
            color: true,
        }
    }
}

impl GameConfig {
    /// Reads and validates a configuration file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid config at {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).context("failed to parse config toml contents")?;
        if config.max_health <= 0 {
            bail!("max_health must be positive (received {})", config.max_health);
        }
        Ok(config)
    }

    pub(crate) fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.frame_budget_ms)
    }
}
