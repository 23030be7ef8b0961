//! TileScreen - maps the tile table onto a flat pixel buffer.
//!
//! The screen owns its pixels exclusively. Once a screen is handed to the game
//! loop it lives on the worker thread, and nothing else reads or writes the buffer
//! until the worker hands it back, so no lock is involved.

use crate::animation::{CursorState, ScrollState};
use crate::tiles::{tile_index, TileTable};
use crate::types::{Color, RenderMode, TilePalette, BLACK, MAGENTA, MAX_DIMENSION};

#[derive(Debug, Clone)]
pub struct TileScreen {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    tiles: TileTable,
    mode: RenderMode,
    scroll: ScrollState,
    cursor: CursorState,
}

impl TileScreen {
    /// Create a `width` x `height` screen with zeroed pixels.
    ///
    /// Each dimension is clamped into `[1, MAX_DIMENSION]`.
    pub fn new(width: u32, height: u32, palette: TilePalette) -> Self {
        Self::with_tiles(width, height, TileTable::new(palette))
    }

    pub fn with_tiles(width: u32, height: u32, tiles: TileTable) -> Self {
        let width = width.clamp(1, MAX_DIMENSION);
        let height = height.clamp(1, MAX_DIMENSION);
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BLACK; len],
            tiles,
            mode: RenderMode::default(),
            scroll: ScrollState::default(),
            cursor: CursorState::default(),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the bias subtracted from pixel coordinates before the tile lookup.
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        let (step_x, step_y) = self.scroll.step();
        self.scroll = ScrollState::new(x, y).with_step(step_x, step_y);
        self
    }

    /// Move the offset by `(dx, dy)` after every tile render.
    pub fn with_scroll_step(mut self, dx: i32, dy: i32) -> Self {
        self.scroll = self.scroll.with_step(dx, dy);
        self
    }

    pub fn with_cursor_periods(mut self, x_period: u64, y_period: u64) -> Self {
        self.cursor = CursorState::new(x_period, y_period);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn tiles(&self) -> &TileTable {
        &self.tiles
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    /// Produce the next frame into the pixel buffer.
    pub fn render(&mut self) {
        match self.mode {
            RenderMode::Tiles => self.render_tiles(),
            RenderMode::Cursor => self.render_cursor(),
        }
    }

    /// Tile index that pixel `(x, y)` samples under the current offset.
    pub fn tile_index_at(&self, x: u32, y: u32) -> usize {
        let (ox, oy) = self.scroll.offset();
        let xx = clamp_axis(x as i64 - ox as i64, self.width);
        let yy = clamp_axis(y as i64 - oy as i64, self.height);
        tile_index(xx, yy)
    }

    fn render_tiles(&mut self) {
        let (ox, oy) = self.scroll.offset();
        let width = self.width as usize;

        for (y, row) in self.pixels.chunks_exact_mut(width).enumerate() {
            // Clamped rather than skipped: pixels biased off the edge repeat the
            // border tile instead of keeping last frame's colour.
            let yy = clamp_axis(y as i64 - oy as i64, self.height);
            for (x, px) in row.iter_mut().enumerate() {
                let xx = clamp_axis(x as i64 - ox as i64, self.width);
                *px = self.tiles.get(tile_index(xx, yy));
            }
        }

        self.scroll.advance();
    }

    fn render_cursor(&mut self) {
        self.cursor.tick();
        let (cx, cy) = self.cursor.position();
        let x = clamp_axis(cx.min(i64::MAX as u64) as i64, self.width) as usize;
        let y = clamp_axis(cy.min(i64::MAX as u64) as i64, self.height) as usize;
        self.pixels[x + y * self.width as usize] = MAGENTA;
    }
}

/// Clamp `v` into `[0, len - 1]`. `len` is never zero for a constructed screen.
#[inline(always)]
fn clamp_axis(v: i64, len: u32) -> u32 {
    v.clamp(0, len.saturating_sub(1) as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TILE_COUNT, TILE_GRID};

    fn indexed_tiles() -> TileTable {
        let mut colors = [0; TILE_COUNT];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = i as Color;
        }
        TileTable::from_colors(colors)
    }

    #[test]
    fn new_screen_is_black() {
        let screen = TileScreen::new(8, 4, TilePalette::Solid(0xffffff));
        assert_eq!(screen.pixels().len(), 32);
        assert!(screen.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn zero_dimensions_become_one_pixel() {
        let screen = TileScreen::new(0, 0, TilePalette::default());
        assert_eq!((screen.width(), screen.height()), (1, 1));
        assert_eq!(screen.pixels().len(), 1);
    }

    #[test]
    fn oversized_dimensions_are_capped() {
        let screen = TileScreen::new(u32::MAX, 1, TilePalette::default());
        assert_eq!((screen.width(), screen.height()), (MAX_DIMENSION, 1));
        assert_eq!(screen.pixels().len(), MAX_DIMENSION as usize);
    }

    #[test]
    fn render_maps_pixels_to_tiles() {
        let mut screen = TileScreen::with_tiles(40, 20, indexed_tiles());
        screen.render();
        let px = screen.pixels();
        assert_eq!(px[0], 0);
        assert_eq!(px[16], 1);
        assert_eq!(px[39 + 19 * 40], (2 + TILE_GRID) as Color);
    }

    #[test]
    fn clear_resets_index_zero_too() {
        let mut screen = TileScreen::new(3, 1, TilePalette::Solid(0x00ff00));
        screen.render();
        assert!(screen.pixels().iter().all(|&p| p == 0x00ff00));
        screen.clear();
        assert_eq!(screen.pixels(), &[0, 0, 0]);
    }

    #[test]
    fn horizontal_bias_repeats_the_border_tile() {
        let mut screen = TileScreen::with_tiles(64, 16, indexed_tiles()).with_offset(16, 0);
        screen.render();
        let px = screen.pixels();
        // Columns 0..=16 all clamp to xx = 0.
        for x in 0..=16 {
            assert_eq!(px[x], 0, "x = {}", x);
        }
        assert_eq!(px[32], 1);
        assert_eq!(px[63], 2);
    }

    #[test]
    fn scroll_step_moves_the_offset_each_render() {
        let mut screen = TileScreen::new(4, 4, TilePalette::default()).with_scroll_step(3, 1);
        screen.render();
        screen.render();
        assert_eq!(screen.scroll().offset(), (6, 2));
    }

    #[test]
    fn cursor_mode_plots_one_magenta_pixel() {
        let mut screen = TileScreen::new(8, 8, TilePalette::Solid(0x111111))
            .with_mode(RenderMode::Cursor)
            .with_cursor_periods(1, 2);
        screen.render();
        // Counter 1: x advanced, y did not.
        assert_eq!(screen.pixels()[1], MAGENTA);
        assert_eq!(screen.pixels().iter().filter(|&&p| p == MAGENTA).count(), 1);
    }

    #[test]
    fn cursor_is_clamped_to_the_screen() {
        let mut screen = TileScreen::new(2, 2, TilePalette::default())
            .with_mode(RenderMode::Cursor)
            .with_cursor_periods(1, 1);
        for _ in 0..50 {
            screen.render();
        }
        assert_eq!(screen.cursor().position(), (50, 50));
        assert_eq!(screen.pixels()[3], MAGENTA);
    }
}
