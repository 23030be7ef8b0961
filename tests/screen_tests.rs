//! TileScreen behaviour: tile mapping, bounds, clearing and the draw cursor.

use tui_rain::core::{TileScreen, TileTable};
use tui_rain::types::{
    Color, RenderMode, TilePalette, MAGENTA, TILE_COUNT, TILE_GRID,
};

/// Tile table whose colour equals its index, so pixels reveal which tile they sampled.
fn indexed_tiles() -> TileTable {
    let mut colors = [0; TILE_COUNT];
    for (i, c) in colors.iter_mut().enumerate() {
        *c = i as Color;
    }
    TileTable::from_colors(colors)
}

#[test]
fn zero_bias_maps_every_pixel_to_its_tile() {
    for (w, h) in [(1, 1), (17, 3), (300, 162), (1024, 1024)] {
        let table = TileTable::new(TilePalette::Random { seed: 77 });
        let mut screen = TileScreen::with_tiles(w, h, table.clone());
        screen.render();

        let px = screen.pixels();
        for y in 0..h {
            for x in 0..w {
                let expected = table.get(((x >> 4) + (y >> 4) * 64) as usize);
                assert_eq!(px[(x + y * w) as usize], expected, "({}, {}) on {}x{}", x, y, w, h);
            }
        }
    }
}

#[test]
fn tile_index_stays_in_table_for_any_bias() {
    let biases = [
        i32::MIN,
        -100_000,
        -1025,
        -17,
        -16,
        -1,
        0,
        1,
        15,
        16,
        299,
        300,
        301,
        5000,
        i32::MAX,
    ];
    for (w, h) in [(1, 1), (300, 162), (2000, 1500)] {
        for &bx in &biases {
            for &by in &biases {
                let screen = TileScreen::new(w, h, TilePalette::default()).with_offset(bx, by);
                for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (w / 2, h / 2)] {
                    let idx = screen.tile_index_at(x, y);
                    assert!(idx < TILE_COUNT, "bias ({}, {}) on {}x{} gave {}", bx, by, w, h, idx);
                }
            }
        }
    }
}

#[test]
fn render_with_extreme_bias_does_not_panic() {
    for bias in [i32::MIN, -5000, 5000, i32::MAX] {
        let mut screen = TileScreen::new(40, 30, TilePalette::default()).with_offset(bias, bias);
        screen.render();
    }
}

#[test]
fn oversized_screens_clamp_to_the_last_tile() {
    let mut screen = TileScreen::with_tiles(1100, 1100, indexed_tiles());
    screen.render();
    let px = screen.pixels();
    assert_eq!(px[1099], (TILE_GRID - 1) as Color);
    assert_eq!(px[1099 + 1099 * 1100], (TILE_COUNT - 1) as Color);
}

#[test]
fn biased_render_leaves_no_stale_pixels() {
    let mut screen = TileScreen::new(48, 32, TilePalette::Solid(0x00ff00)).with_offset(16, 0);
    screen.render();
    assert!(screen.pixels().iter().all(|&p| p == 0x00ff00));

    // Past the right edge as well.
    let mut screen = TileScreen::new(48, 32, TilePalette::Solid(0x0000ff)).with_offset(-200, 500);
    screen.render();
    assert!(screen.pixels().iter().all(|&p| p == 0x0000ff));
}

#[test]
fn horizontal_bias_shifts_tiles_right() {
    let mut screen = TileScreen::with_tiles(64, 32, indexed_tiles()).with_offset(16, 0);
    screen.render();
    let px = screen.pixels();
    // Row 20 is in tile row 1.
    let row = 20 * 64;
    assert_eq!(px[row], 64);
    assert_eq!(px[row + 16], 64);
    assert_eq!(px[row + 32], 65);
    assert_eq!(px[row + 48], 66);
}

#[test]
fn clear_blanks_every_pixel_for_all_sizes() {
    for (w, h) in [(1, 1), (1, 7), (7, 1), (16, 16), (301, 163)] {
        let mut screen = TileScreen::new(w, h, TilePalette::Solid(0xffffff));
        screen.render();
        assert!(screen.pixels().iter().all(|&p| p == 0xffffff));

        screen.clear();
        assert_eq!(screen.pixels().len(), (w * h) as usize);
        assert!(screen.pixels().iter().all(|&p| p == 0), "{}x{}", w, h);
    }
}

#[test]
fn random_palette_colours_are_24_bit() {
    let screen = TileScreen::new(1, 1, TilePalette::Random { seed: 3 });
    assert_eq!(screen.tiles().len(), TILE_COUNT);
    assert!(screen.tiles().colors().iter().all(|&c| c <= 0xffffff));
}

#[test]
fn cursor_advances_once_per_ten_renders() {
    let mut screen = TileScreen::new(300, 162, TilePalette::default()).with_mode(RenderMode::Cursor);
    for _ in 0..35 {
        screen.render();
    }
    assert_eq!(screen.cursor().counter(), 35);
    assert_eq!(screen.cursor().position(), (3, 0));
}

#[test]
fn cursor_cadence_matches_floor_of_calls_over_period() {
    let mut screen = TileScreen::new(300, 162, TilePalette::default()).with_mode(RenderMode::Cursor);
    for calls in 1..=400u64 {
        screen.render();
        assert_eq!(screen.cursor().position(), (calls / 10, calls / 80));
    }
}

#[test]
fn cursor_leaves_a_magenta_trail() {
    let mut screen = TileScreen::new(16, 16, TilePalette::default())
        .with_mode(RenderMode::Cursor)
        .with_cursor_periods(1, 1000);
    for _ in 0..5 {
        screen.render();
    }
    // Without clearing, each visited pixel keeps its colour.
    let row0 = &screen.pixels()[..16];
    assert_eq!(row0.iter().filter(|&&p| p == MAGENTA).count(), 5);
    assert_eq!(row0[0], 0);
}

#[test]
fn scrolling_moves_the_image() {
    let mut screen = TileScreen::with_tiles(64, 16, indexed_tiles()).with_scroll_step(16, 0);
    screen.render();
    assert_eq!(screen.pixels()[32], 2);
    screen.render();
    // Offset 16 now: pixel 32 samples tile 1.
    assert_eq!(screen.pixels()[32], 1);
}
