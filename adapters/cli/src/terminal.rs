use std::io::Write;

use anyhow::{Context, Result as AnyResult};
use glam::IVec2;
use tile_quest_core::Sprite;
use tile_quest_rendering::{
    style, viewport_cell, Avatar, Color, SpriteStyle, StatusBar, TileCanvas, VIEW_COLUMNS,
    VIEW_ROWS,
};

const PLAYER: SpriteStyle = SpriteStyle {
    glyph: '@',
    color: Color::from_rgb_u8(0xff, 0xff, 0xff),
};
const PLAYER_WITH_HAT: char = '&';
const KEY_COLOR: Color = Color::from_rgb_u8(0xff, 0xd7, 0x00);
const HEALTH_BAR_WIDTH: usize = 20;

/// Character-cell canvas that keeps the viewport in memory and prints it on
/// demand.
#[derive(Debug)]
pub(crate) struct TerminalCanvas {
    cells: [[SpriteStyle; VIEW_COLUMNS]; VIEW_ROWS],
    status: Option<StatusBar>,
    color: bool,
}

impl TerminalCanvas {
    pub(crate) fn new(color: bool) -> Self {
        Self {
            cells: [[style(Sprite::Nothing); VIEW_COLUMNS]; VIEW_ROWS],
            status: None,
            color,
        }
    }

    /// Writes the status bars and the viewport.
    pub(crate) fn present(&self, out: &mut impl Write) -> AnyResult<()> {
        if let Some(status) = self.status {
            writeln!(
                out,
                " Player:({},{})  Has Key: {}",
                status.position.x, status.position.y, status.has_key
            )?;
        }
        let border = "+".to_string() + &"-".repeat(VIEW_COLUMNS) + "+";
        writeln!(out, "{border}")?;
        for row in &self.cells {
            let line: String = row.iter().map(|cell| self.paint(*cell)).collect();
            writeln!(out, "|{line}|")?;
        }
        writeln!(out, "{border}")?;
        if let Some(status) = self.status {
            writeln!(out, " Health: {}", health_bar(status.health, status.max_health))?;
        }
        out.flush().context("failed to flush terminal output")
    }

    fn paint(&self, cell: SpriteStyle) -> String {
        if !self.color || cell.glyph == ' ' {
            return cell.glyph.to_string();
        }
        let Color { red, green, blue } = cell.color;
        format!("\x1b[38;2;{red};{green};{blue}m{}\x1b[0m", cell.glyph)
    }

    fn put(&mut self, origin: IVec2, cell: SpriteStyle) -> AnyResult<()> {
        let (column, row) = viewport_cell(origin)
            .with_context(|| format!("pixel origin {origin} is not a viewport tile"))?;
        self.cells[row][column] = cell;
        Ok(())
    }
}

impl TileCanvas for TerminalCanvas {
    fn draw_border(&mut self) -> AnyResult<()> {
        self.cells = [[style(Sprite::Nothing); VIEW_COLUMNS]; VIEW_ROWS];
        Ok(())
    }

    fn draw_tile(&mut self, sprite: Sprite, origin: IVec2) -> AnyResult<()> {
        self.put(origin, style(sprite))
    }

    fn draw_player(&mut self, origin: IVec2, avatar: Avatar) -> AnyResult<()> {
        let mut cell = PLAYER;
        if avatar.fancy_hat {
            cell.glyph = PLAYER_WITH_HAT;
        }
        if avatar.has_key {
            cell.color = KEY_COLOR;
        }
        self.put(origin, cell)
    }

    fn draw_status(&mut self, status: StatusBar) -> AnyResult<()> {
        self.status = Some(status);
        Ok(())
    }
}

fn health_bar(health: i32, max_health: i32) -> String {
    let filled = if max_health <= 0 {
        0
    } else {
        (health.clamp(0, max_health) as usize * HEALTH_BAR_WIDTH) / max_health as usize
    };
    format!(
        "[{}{}] {health}/{max_health}",
        "=".repeat(filled),
        " ".repeat(HEALTH_BAR_WIDTH - filled)
    )
}
