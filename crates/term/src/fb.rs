//! Cell framebuffer for terminal presentation.
//!
//! Each terminal cell shows two stacked pixels: the upper one as the foreground of
//! an upper-half-block glyph, the lower one as the background.

use crate::types::{split_rgb, Color};

/// Glyph that paints the upper half of a cell in the foreground colour.
pub const UPPER_HALF: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_packed(color: Color) -> Self {
        let (r, g, b) = split_rgb(color);
        Self { r, g, b }
    }
}

/// One terminal cell holding two vertically stacked pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub upper: Rgb,
    pub lower: Rgb,
}

impl Cell {
    pub const fn new(upper: Rgb, lower: Rgb) -> Self {
        Self { upper, lower }
    }
}

/// 2D framebuffer of half-block cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        let red = Cell::new(Rgb::new(255, 0, 0), Rgb::new(255, 0, 0));
        fb.set(5, 5, red);
        assert_eq!(fb.get(5, 5), None);
        assert!(fb.cells().iter().all(|&c| c == Cell::default()));
    }

    #[test]
    fn resize_keeps_cell_count_in_step() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(4, 3);
        assert_eq!(fb.cells().len(), 12);
        assert_eq!((fb.width(), fb.height()), (4, 3));
    }

    #[test]
    fn packed_colour_unpacks() {
        assert_eq!(Rgb::from_packed(0x102030), Rgb::new(0x10, 0x20, 0x30));
    }
}
