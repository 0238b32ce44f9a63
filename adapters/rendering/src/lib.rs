#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Tile Quest adapters.
//!
//! The world never draws itself. Every entity carries a [`Sprite`] handle and
//! this crate owns the lookup from handle to presentation, the 11×9 viewport
//! walk that decides which tiles need repainting, and the pagination of
//! speech into two-line bubbles.

mod speech;

use anyhow::Result as AnyResult;
use glam::IVec2;
use tile_quest_core::{CaveTile, Position, Sprite};
use tile_quest_world::{query, EntityId, Map, TileState, World};

pub use speech::{paginate, SpeechPage, SPEECH_LINE_WIDTH};

/// Edge length of one tile in pixels.
pub const TILE_PIXELS: i32 = 11;

/// Columns visible on each side of the player.
pub const VIEW_RADIUS_X: i32 = 5;

/// Rows visible above and below the player.
pub const VIEW_RADIUS_Y: i32 = 4;

/// Number of visible tile columns.
pub const VIEW_COLUMNS: usize = (2 * VIEW_RADIUS_X + 1) as usize;

/// Number of visible tile rows.
pub const VIEW_ROWS: usize = (2 * VIEW_RADIUS_Y + 1) as usize;

const ORIGIN_U: i32 = 3;
const ORIGIN_V: i32 = 15;

/// RGB color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

/// Presentation of a sprite for character-cell backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteStyle {
    /// Character drawn for the tile.
    pub glyph: char,
    /// Foreground color of the glyph.
    pub color: Color,
}

impl SpriteStyle {
    const fn new(glyph: char, rgb: u32) -> Self {
        Self {
            glyph,
            color: Color::from_hex(rgb),
        }
    }
}

/// Looks up how a sprite is presented.
#[must_use]
pub const fn style(sprite: Sprite) -> SpriteStyle {
    match sprite {
        Sprite::Nothing => SpriteStyle::new(' ', 0x000000),
        Sprite::Wall => SpriteStyle::new('#', 0xa0a0a0),
        Sprite::Door => SpriteStyle::new('D', 0xd2691e),
        Sprite::Plant => SpriteStyle::new('"', 0x009e60),
        Sprite::Mud => SpriteStyle::new('~', 0xd2691e),
        Sprite::Npc => SpriteStyle::new('N', 0xffff00),
        Sprite::Stairs => SpriteStyle::new('>', 0xf6f6f6),
        Sprite::SecretStairs => SpriteStyle::new('<', 0xa020f0),
        Sprite::Cave(CaveTile::TopLeft) => SpriteStyle::new('/', 0x8b4513),
        Sprite::Cave(CaveTile::TopRight) => SpriteStyle::new('\\', 0x8b4513),
        Sprite::Cave(CaveTile::BottomLeft) => SpriteStyle::new('[', 0x8b4513),
        Sprite::Cave(CaveTile::BottomRight) => SpriteStyle::new(']', 0x8b4513),
        Sprite::Water => SpriteStyle::new('w', 0x1e90ff),
        Sprite::Fire => SpriteStyle::new('f', 0xff4500),
        Sprite::Earth => SpriteStyle::new('e', 0x8b4513),
        Sprite::Buzz => SpriteStyle::new('B', 0xffff00),
        Sprite::SlainBuzz => SpriteStyle::new('x', 0x808080),
        Sprite::Wreck => SpriteStyle::new('R', 0xb3a369),
        Sprite::Pebble => SpriteStyle::new('.', 0xc0c0c0),
        Sprite::PowerUp => SpriteStyle::new('+', 0xff0000),
        Sprite::GiftBox => SpriteStyle::new('G', 0xa020f0),
        Sprite::Bush => SpriteStyle::new('*', 0xafe1af),
        Sprite::Hole => SpriteStyle::new('O', 0x404040),
        Sprite::SecretEntrance => SpriteStyle::new('?', 0x009e60),
        Sprite::Mushroom => SpriteStyle::new('m', 0xff69b4),
    }
}

/// Variant of the player sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Avatar {
    /// The player carries the key.
    pub has_key: bool,
    /// The player wears the fancy hat.
    pub fancy_hat: bool,
}

/// Contents of the upper and lower status bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusBar {
    /// Player tile.
    pub position: Position,
    /// The player carries the key.
    pub has_key: bool,
    /// Current health.
    pub health: i32,
    /// Maximum health.
    pub max_health: i32,
}

/// Pixel-addressed drawing surface implemented by adapters.
pub trait TileCanvas {
    /// Paints the frame around the viewport.
    fn draw_border(&mut self) -> AnyResult<()>;

    /// Paints one tile whose top-left corner sits at `origin`.
    fn draw_tile(&mut self, sprite: Sprite, origin: IVec2) -> AnyResult<()>;

    /// Paints the player at `origin`.
    fn draw_player(&mut self, origin: IVec2, avatar: Avatar) -> AnyResult<()>;

    /// Repaints both status bars.
    fn draw_status(&mut self, status: StatusBar) -> AnyResult<()>;
}

/// Pixel origin of the viewport tile at column offset `i` and row offset `j`
/// from the player.
#[must_use]
pub const fn tile_origin(i: i32, j: i32) -> IVec2 {
    IVec2::new(
        (i + VIEW_RADIUS_X) * TILE_PIXELS + ORIGIN_U,
        (j + VIEW_RADIUS_Y) * TILE_PIXELS + ORIGIN_V,
    )
}

/// Inverse of [`tile_origin`] expressed as zero-based column and row.
#[must_use]
pub fn viewport_cell(origin: IVec2) -> Option<(usize, usize)> {
    let offset = origin - IVec2::new(ORIGIN_U, ORIGIN_V);
    if offset.x < 0 || offset.y < 0 || offset.x % TILE_PIXELS != 0 || offset.y % TILE_PIXELS != 0 {
        return None;
    }
    let (column, row) = (
        (offset.x / TILE_PIXELS) as usize,
        (offset.y / TILE_PIXELS) as usize,
    );
    (column < VIEW_COLUMNS && row < VIEW_ROWS).then_some((column, row))
}

/// Number of draw calls issued for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Tiles painted, excluding the player.
    pub tiles: usize,
    /// Whether the status bars were repainted.
    pub status: bool,
}

/// Paints the viewport centred on the player.
///
/// With `full_redraw` every tile is painted and out-of-bounds tiles show as
/// wall. Otherwise a tile is painted only when its occupant differs from the
/// occupant of the tile that sat in the same screen slot before the player
/// moved, or when it holds a cleared marker.
pub fn draw_game(
    world: &World,
    canvas: &mut dyn TileCanvas,
    full_redraw: bool,
) -> AnyResult<DrawStats> {
    let player = query::player(world);
    let map = query::active_map(world);
    let mut stats = DrawStats::default();

    if full_redraw {
        canvas.draw_border()?;
    }

    for i in -VIEW_RADIUS_X..=VIEW_RADIUS_X {
        for j in -VIEW_RADIUS_Y..=VIEW_RADIUS_Y {
            let origin = tile_origin(i, j);
            if i == 0 && j == 0 {
                canvas.draw_player(
                    origin,
                    Avatar {
                        has_key: player.has_key,
                        fancy_hat: player.fancy_hat,
                    },
                )?;
                continue;
            }

            let current = Position::new(player.position.x + i, player.position.y + j);
            let previous = Position::new(
                player.previous_position.x + i,
                player.previous_position.y + j,
            );

            let sprite = if map.contains(current) {
                let state = map.tile(current);
                let changed = occupant_at(map, current) != occupant_at(map, previous);
                match state {
                    TileState::Occupied(entity) if full_redraw || changed => Some(entity.sprite()),
                    TileState::Vacant if full_redraw || changed => Some(Sprite::Nothing),
                    TileState::Cleared => Some(Sprite::Nothing),
                    _ => None,
                }
            } else if full_redraw {
                Some(Sprite::Wall)
            } else {
                None
            };

            if let Some(sprite) = sprite {
                canvas.draw_tile(sprite, origin)?;
                stats.tiles += 1;
            }
        }
    }

    if full_redraw || player.moved() {
        canvas.draw_status(StatusBar {
            position: player.position,
            has_key: player.has_key,
            health: player.health,
            max_health: player.max_health,
        })?;
        stats.status = true;
    }

    Ok(stats)
}

fn occupant_at(map: &Map, position: Position) -> Option<EntityId> {
    if !map.contains(position) {
        return None;
    }
    map.entity_at(position).map(|entity| entity.id())
}
