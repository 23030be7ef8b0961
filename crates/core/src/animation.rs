//! Animation state owned by the screen.
//!
//! Both structs are only mutated from `TileScreen::render`.

use crate::types::{CURSOR_X_PERIOD, CURSOR_Y_PERIOD};

/// Offset subtracted from pixel coordinates before the tile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
}

impl ScrollState {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            step_x: 0,
            step_y: 0,
        }
    }

    pub fn with_step(mut self, step_x: i32, step_y: i32) -> Self {
        self.step_x = step_x;
        self.step_y = step_y;
        self
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn step(&self) -> (i32, i32) {
        (self.step_x, self.step_y)
    }

    /// Move the offset by one step.
    pub fn advance(&mut self) {
        self.x = self.x.wrapping_add(self.step_x);
        self.y = self.y.wrapping_add(self.step_y);
    }
}

/// A draw cursor that advances right every `x_period` renders and down every
/// `y_period` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    counter: u64,
    x: u64,
    y: u64,
    x_period: u64,
    y_period: u64,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(CURSOR_X_PERIOD, CURSOR_Y_PERIOD)
    }
}

impl CursorState {
    /// Periods of zero are treated as one.
    pub fn new(x_period: u64, y_period: u64) -> Self {
        Self {
            counter: 0,
            x: 0,
            y: 0,
            x_period: x_period.max(1),
            y_period: y_period.max(1),
        }
    }

    /// Count one render and advance the cursor on period boundaries.
    pub fn tick(&mut self) {
        self.counter = self.counter.wrapping_add(1);
        if self.counter % self.x_period == 0 {
            self.x = self.x.saturating_add(1);
        }
        if self.counter % self.y_period == 0 {
            self.y = self.y.saturating_add(1);
        }
    }

    /// Renders counted so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn position(&self) -> (u64, u64) {
        (self.x, self.y)
    }

    pub fn periods(&self) -> (u64, u64) {
        (self.x_period, self.y_period)
    }
}
