//! Raster: scales a logical pixel buffer into a half-block framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::types::{Color, BLACK};

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Height in half-block pixels.
    pub fn pixel_height(&self) -> u32 {
        u32::from(self.height) * 2
    }
}

/// Where the scaled image lands, in half-block pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Largest aspect-preserving fit of a `src_w` x `src_h` image, centred in the viewport.
pub fn fit(src_w: u32, src_h: u32, viewport: Viewport) -> Placement {
    let avail_w = u64::from(viewport.width);
    let avail_h = u64::from(viewport.pixel_height());
    let src_w64 = u64::from(src_w.max(1));
    let src_h64 = u64::from(src_h.max(1));

    let (width, height) = if avail_w * src_h64 <= avail_h * src_w64 {
        (avail_w, avail_w * src_h64 / src_w64)
    } else {
        (avail_h * src_w64 / src_h64, avail_h)
    };

    Placement {
        x: ((avail_w - width) / 2) as u32,
        y: ((avail_h - height) / 2) as u32,
        width: width as u32,
        height: height as u32,
    }
}

/// Nearest-neighbour scale `pixels` (row-major, `src_w` wide) into `fb`.
///
/// Cells outside the placement are black. Missing source pixels read as black.
pub fn rasterize(pixels: &[Color], src_w: u32, src_h: u32, fb: &mut FrameBuffer) {
    let black = Cell::new(Rgb::from_packed(BLACK), Rgb::from_packed(BLACK));
    fb.clear(black);

    let viewport = Viewport::new(fb.width(), fb.height());
    let place = fit(src_w, src_h, viewport);
    if place.width == 0 || place.height == 0 {
        return;
    }

    let sample = |px: u32, py: u32| -> Rgb {
        if px < place.x || py < place.y {
            return Rgb::from_packed(BLACK);
        }
        let (dx, dy) = (px - place.x, py - place.y);
        if dx >= place.width || dy >= place.height {
            return Rgb::from_packed(BLACK);
        }
        let sx = u64::from(dx) * u64::from(src_w) / u64::from(place.width);
        let sy = u64::from(dy) * u64::from(src_h) / u64::from(place.height);
        let i = (sy * u64::from(src_w) + sx) as usize;
        Rgb::from_packed(pixels.get(i).copied().unwrap_or(BLACK))
    };

    for cy in 0..fb.height() {
        let upper_y = u32::from(cy) * 2;
        for cx in 0..fb.width() {
            let x = u32::from(cx);
            let cell = Cell::new(sample(x, upper_y), sample(x, upper_y + 1));
            fb.set(cx, cy, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_is_width_limited_for_wide_images() {
        let place = fit(300, 162, Viewport::new(100, 100));
        assert_eq!(place.width, 100);
        assert_eq!(place.height, 54);
        assert_eq!(place.x, 0);
        assert_eq!(place.y, (200 - 54) / 2);
    }

    #[test]
    fn fit_is_height_limited_for_short_viewports() {
        let place = fit(300, 162, Viewport::new(200, 20));
        assert_eq!(place.height, 40);
        assert_eq!(place.width, 300 * 40 / 162);
        assert_eq!(place.y, 0);
    }

    #[test]
    fn identity_scale_maps_pixel_pairs_to_cells() {
        // 2x2 image in a 2x1 viewport: exact fit, one cell per column.
        let pixels = [0xff0000, 0x00ff00, 0x0000ff, 0xffffff];
        let mut fb = FrameBuffer::new(2, 1);
        rasterize(&pixels, 2, 2, &mut fb);

        assert_eq!(
            fb.get(0, 0),
            Some(Cell::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)))
        );
        assert_eq!(
            fb.get(1, 0),
            Some(Cell::new(Rgb::new(0, 255, 0), Rgb::new(255, 255, 255)))
        );
    }

    #[test]
    fn empty_viewport_draws_nothing() {
        let mut fb = FrameBuffer::new(0, 0);
        rasterize(&[0xffffff], 1, 1, &mut fb);
        assert!(fb.cells().is_empty());
    }
}
