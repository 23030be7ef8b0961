//! Terminal-backed presentation surface.
//!
//! The back buffers hold logical pixels; `present` scales the current back buffer
//! into half-block cells, diffs it against what is on screen and flips.

use std::io::{self, Write};

use anyhow::{anyhow, bail, Result};

use crate::engine::{Display, Surface};
use crate::fb::FrameBuffer;
use crate::raster::{rasterize, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::{Color, BLACK};

/// Fallback when the terminal size cannot be queried.
const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

pub struct TerminalDisplay<W: Write + Send + 'static = io::Stdout> {
    width: u32,
    height: u32,
    out: Option<W>,
    viewport: Option<Viewport>,
}

impl TerminalDisplay<io::Stdout> {
    /// Display a `width` x `height` logical image on stdout, fitted to the terminal.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_writer(width, height, io::stdout())
    }
}

impl<W: Write + Send + 'static> TerminalDisplay<W> {
    pub fn with_writer(width: u32, height: u32, out: W) -> Self {
        Self {
            width,
            height,
            out: Some(out),
            viewport: None,
        }
    }

    /// Use a fixed viewport instead of following the terminal size.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }
}

impl<W: Write + Send + 'static> Display for TerminalDisplay<W> {
    type Surface = TerminalSurface<W>;

    fn create_presentation_surface(&mut self, buffer_count: usize) -> Result<TerminalSurface<W>> {
        if buffer_count == 0 {
            bail!("presentation surface needs at least one buffer");
        }
        let out = self
            .out
            .take()
            .ok_or_else(|| anyhow!("terminal surface was already created"))?;

        let len = (self.width as usize) * (self.height as usize);
        let viewport = self.viewport.unwrap_or_else(terminal_viewport);
        Ok(TerminalSurface {
            width: self.width,
            height: self.height,
            buffers: (0..buffer_count).map(|_| vec![BLACK; len]).collect(),
            back: 0,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            renderer: TerminalRenderer::new(out),
            viewport,
            follow_terminal: self.viewport.is_none(),
        })
    }
}

pub struct TerminalSurface<W: Write + Send + 'static = io::Stdout> {
    width: u32,
    height: u32,
    buffers: Vec<Vec<Color>>,
    back: usize,
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
    viewport: Viewport,
    follow_terminal: bool,
}

impl<W: Write + Send + 'static> TerminalSurface<W> {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn back_index(&self) -> usize {
        self.back
    }

    pub fn writer(&self) -> &W {
        self.renderer.writer()
    }
}

impl<W: Write + Send + 'static> Surface for TerminalSurface<W> {
    fn backing_pixels(&mut self) -> &mut [Color] {
        &mut self.buffers[self.back]
    }

    fn present(&mut self) -> Result<()> {
        if self.follow_terminal {
            let viewport = terminal_viewport();
            if viewport != self.viewport {
                self.viewport = viewport;
                self.fb.resize(viewport.width, viewport.height);
                self.renderer.invalidate();
            }
        }

        rasterize(&self.buffers[self.back], self.width, self.height, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;
        self.back = (self.back + 1) % self.buffers.len();
        Ok(())
    }
}

fn terminal_viewport() -> Viewport {
    crossterm::terminal::size()
        .map(|(w, h)| Viewport::new(w, h))
        .unwrap_or(FALLBACK_VIEWPORT)
}
