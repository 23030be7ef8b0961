//! Core types module - shared constants and small value types
//!
//! Everything here is plain data with no dependencies, so it can be shared by the
//! screen, the game loop and the terminal surface alike.
//!
//! # Tile Grid
//!
//! The background is a fixed grid of square tiles:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SHIFT` | 4 | `x >> TILE_SHIFT` is the tile column of pixel `x` |
//! | `TILE_SIZE` | 16 | Tile edge length in pixels |
//! | `TILE_GRID` | 64 | Tiles per row and per column |
//! | `TILE_COUNT` | 4096 | Entries in the tile table |
//!
//! # Default Screen
//!
//! - **Width**: 300 pixels
//! - **Height**: `300 / 16 * 9` = 162 pixels (integer arithmetic, as the classic window did)
//! - **Presentation buffers**: 3 (triple buffering)
//!
//! # Examples
//!
//! ```
//! use tui_rain_types::{rgb, split_rgb, RenderMode, TILE_COUNT, TILE_GRID};
//!
//! assert_eq!(TILE_COUNT, TILE_GRID * TILE_GRID);
//!
//! let c = rgb(0xff, 0x00, 0xff);
//! assert_eq!(c, 0xff00ff);
//! assert_eq!(split_rgb(c), (0xff, 0x00, 0xff));
//!
//! assert_eq!(RenderMode::from_str("cursor"), Some(RenderMode::Cursor));
//! ```

/// A 24-bit RGB colour packed as `0x00RRGGBB`.
pub type Color = u32;

/// Mask selecting the 24 colour bits.
pub const COLOR_MASK: Color = 0x00ff_ffff;

pub const BLACK: Color = 0x000000;

/// Cursor colour used by the animated render mode.
pub const MAGENTA: Color = 0xff00ff;

/// Shift that divides a pixel coordinate by the tile size.
pub const TILE_SHIFT: u32 = 4;

/// Tile edge length in pixels (16).
pub const TILE_SIZE: u32 = 1 << TILE_SHIFT;

/// Tiles per row/column of the tile table (64).
pub const TILE_GRID: usize = 64;

/// Number of entries in the tile table (64 * 64).
pub const TILE_COUNT: usize = TILE_GRID * TILE_GRID;

/// Largest accepted screen width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

/// Default logical screen width in pixels.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default logical screen height in pixels (16:9 of the width, integer maths).
pub const DEFAULT_HEIGHT: u32 = DEFAULT_WIDTH / 16 * 9;

/// Horizontal bias used by the scrolled tile layout.
pub const DEFAULT_HORIZONTAL_BIAS: i32 = 16;

/// Renders between horizontal cursor steps.
pub const CURSOR_X_PERIOD: u64 = 10;

/// Renders between vertical cursor steps.
pub const CURSOR_Y_PERIOD: u64 = 80;

/// Buffers requested from the display when the presentation surface is created.
pub const PRESENT_BUFFER_COUNT: usize = 3;

/// Window title.
pub const TITLE: &str = "Rain";

/// Pack three channels into a [`Color`].
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    ((r as Color) << 16) | ((g as Color) << 8) | (b as Color)
}

/// Split a [`Color`] into `(r, g, b)`. Bits above the 24 colour bits are ignored.
pub const fn split_rgb(color: Color) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}

/// How the screen fills its pixel buffer on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Map every pixel through the tile table, biased by the scroll offset.
    #[default]
    Tiles,
    /// Plot a single magenta pixel at a cursor that drifts right and down.
    Cursor,
}

impl RenderMode {
    /// Parse a render mode (case-insensitive).
    ///
    /// ```
    /// use tui_rain_types::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_str("Tiles"), Some(RenderMode::Tiles));
    /// assert_eq!(RenderMode::from_str("nope"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tiles" | "tile" => Some(RenderMode::Tiles),
            "cursor" => Some(RenderMode::Cursor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Tiles => "tiles",
            RenderMode::Cursor => "cursor",
        }
    }
}

/// How the tile table is populated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePalette {
    /// Pseudo-random colours in `[0, 0xFFFFFF]`, reproducible from the seed.
    Random { seed: u32 },
    /// Every tile gets the same colour.
    Solid(Color),
}

impl Default for TilePalette {
    fn default() -> Self {
        TilePalette::Random { seed: 0 }
    }
}

/// Parse a colour written as `RRGGBB`, `#RRGGBB` or `0xRRGGBB`.
///
/// ```
/// use tui_rain_types::parse_color;
///
/// assert_eq!(parse_color("#ff00ff"), Some(0xff00ff));
/// assert_eq!(parse_color("0x0000FF"), Some(0x0000ff));
/// assert_eq!(parse_color("1000000"), None);
/// assert_eq!(parse_color("+ff"), None);
/// ```
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if hex.is_empty() || hex.len() > 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Color::from_str_radix(hex, 16).ok()
}
