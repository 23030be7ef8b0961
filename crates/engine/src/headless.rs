//! In-memory display used by tests, benches and `--headless` runs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};

use crate::display::{Display, Surface};
use crate::types::{Color, BLACK};

#[derive(Debug, Default)]
struct Counters {
    surfaces_created: AtomicU64,
    buffer_requests: AtomicU64,
    presents: AtomicU64,
    last_frame: Mutex<Vec<Color>>,
}

/// Read-only view of what a [`HeadlessDisplay`] has been asked to do.
///
/// Cloneable so it can be kept on the controlling thread while the display itself
/// moves to the loop's worker.
#[derive(Debug, Clone)]
pub struct HeadlessProbe {
    counters: Arc<Counters>,
}

impl HeadlessProbe {
    pub fn surfaces_created(&self) -> u64 {
        self.counters.surfaces_created.load(Ordering::Acquire)
    }

    /// Times a back buffer was handed out (one per copied frame).
    pub fn buffer_requests(&self) -> u64 {
        self.counters.buffer_requests.load(Ordering::Acquire)
    }

    pub fn presents(&self) -> u64 {
        self.counters.presents.load(Ordering::Acquire)
    }

    /// Copy of the most recently presented buffer (empty before the first present).
    pub fn last_frame(&self) -> Vec<Color> {
        match self.counters.last_frame.lock() {
            Ok(frame) => frame.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// A display that presents into memory.
#[derive(Debug)]
pub struct HeadlessDisplay {
    width: u32,
    height: u32,
    counters: Arc<Counters>,
}

impl HeadlessDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn probe(&self) -> HeadlessProbe {
        HeadlessProbe {
            counters: Arc::clone(&self.counters),
        }
    }
}

impl Display for HeadlessDisplay {
    type Surface = HeadlessSurface;

    fn create_presentation_surface(&mut self, buffer_count: usize) -> Result<HeadlessSurface> {
        if buffer_count == 0 {
            bail!("presentation surface needs at least one buffer");
        }
        let len = (self.width as usize) * (self.height as usize);
        let buffers = (0..buffer_count).map(|_| vec![BLACK; len]).collect();
        if let Ok(mut last) = self.counters.last_frame.lock() {
            last.reserve(len);
        }
        self.counters.surfaces_created.fetch_add(1, Ordering::AcqRel);
        Ok(HeadlessSurface {
            buffers,
            back: 0,
            counters: Arc::clone(&self.counters),
        })
    }
}

/// Ring of equally sized buffers; `present` records the back buffer and flips.
#[derive(Debug)]
pub struct HeadlessSurface {
    buffers: Vec<Vec<Color>>,
    back: usize,
    counters: Arc<Counters>,
}

impl HeadlessSurface {
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Index of the buffer the next frame will be written into.
    pub fn back_index(&self) -> usize {
        self.back
    }
}

impl Surface for HeadlessSurface {
    fn backing_pixels(&mut self) -> &mut [Color] {
        self.counters.buffer_requests.fetch_add(1, Ordering::AcqRel);
        &mut self.buffers[self.back]
    }

    fn present(&mut self) -> Result<()> {
        let shown = &self.buffers[self.back];
        if let Ok(mut last) = self.counters.last_frame.lock() {
            last.clear();
            last.extend_from_slice(shown);
        }
        self.back = (self.back + 1) % self.buffers.len();
        self.counters.presents.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
