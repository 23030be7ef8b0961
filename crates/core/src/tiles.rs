//! Tile table - the 64x64 grid of tile colours
//!
//! The table is filled once from a [`TilePalette`] and never changes afterwards.

use crate::rng::SimpleRng;
use crate::types::{Color, TilePalette, COLOR_MASK, TILE_COUNT, TILE_GRID, TILE_SHIFT};

/// Fixed-size table of tile colours indexed by `tile_x + tile_y * 64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileTable {
    colors: Box<[Color; TILE_COUNT]>,
}

impl TileTable {
    pub fn new(palette: TilePalette) -> Self {
        let mut colors = Box::new([0; TILE_COUNT]);
        match palette {
            TilePalette::Random { seed } => {
                let mut rng = SimpleRng::new(seed);
                for c in colors.iter_mut() {
                    *c = rng.next_color();
                }
            }
            TilePalette::Solid(color) => colors.fill(color & COLOR_MASK),
        }
        Self { colors }
    }

    /// Build a table from explicit colours (masked to 24 bits).
    pub fn from_colors(colors: [Color; TILE_COUNT]) -> Self {
        let mut colors = Box::new(colors);
        for c in colors.iter_mut() {
            *c &= COLOR_MASK;
        }
        Self { colors }
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Color {
        self.colors[index]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors[..]
    }

    pub fn len(&self) -> usize {
        TILE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Tile index of the in-range pixel coordinate `(xx, yy)`.
///
/// The shift replaces a division by the tile size. Tile coordinates are clamped to
/// the grid, so the result is always `< TILE_COUNT` even for screens wider or taller
/// than the grid covers.
#[inline(always)]
pub fn tile_index(xx: u32, yy: u32) -> usize {
    let col = ((xx >> TILE_SHIFT) as usize).min(TILE_GRID - 1);
    let row = ((yy >> TILE_SHIFT) as usize).min(TILE_GRID - 1);
    col + row * TILE_GRID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_palette_fills_every_tile() {
        let table = TileTable::new(TilePalette::Solid(0x123456));
        assert!(table.colors().iter().all(|&c| c == 0x123456));
        assert_eq!(table.len(), TILE_COUNT);
    }

    #[test]
    fn solid_palette_is_masked() {
        let table = TileTable::new(TilePalette::Solid(0xff00_00ff));
        assert_eq!(table.get(0), 0x0000ff);
    }

    #[test]
    fn random_palette_is_reproducible() {
        let a = TileTable::new(TilePalette::Random { seed: 9 });
        let b = TileTable::new(TilePalette::Random { seed: 9 });
        let c = TileTable::new(TilePalette::Random { seed: 10 });
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn tile_index_uses_sixteen_pixel_tiles() {
        assert_eq!(tile_index(0, 0), 0);
        assert_eq!(tile_index(15, 15), 0);
        assert_eq!(tile_index(16, 0), 1);
        assert_eq!(tile_index(0, 16), 64);
        assert_eq!(tile_index(35, 40), 2 + 2 * 64);
    }

    #[test]
    fn tile_index_clamps_to_grid() {
        assert_eq!(tile_index(1024, 0), 63);
        assert_eq!(tile_index(u32::MAX, u32::MAX), TILE_COUNT - 1);
    }
}
