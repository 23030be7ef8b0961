//! One update/render cycle: screen in, presented surface out.

use anyhow::{bail, Result};

use crate::core::TileScreen;
use crate::display::{Display, Surface};
use crate::types::PRESENT_BUFFER_COUNT;

/// What a call to [`Frame::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The presentation surface was created; nothing was drawn this cycle.
    SurfaceCreated,
    /// A full frame was copied into the surface and presented.
    Presented,
}

/// A screen paired with the display it is shown on.
///
/// The surface is created lazily on the first render, so it is allocated on
/// whichever thread runs the loop.
pub struct Frame<D: Display> {
    screen: TileScreen,
    display: D,
    surface: Option<D::Surface>,
    clear_before_render: bool,
}

impl<D: Display> Frame<D> {
    pub fn new(screen: TileScreen, display: D) -> Self {
        Self {
            screen,
            display,
            surface: None,
            clear_before_render: false,
        }
    }

    /// Clear the screen to black before every render.
    pub fn with_clear_before_render(mut self, clear: bool) -> Self {
        self.clear_before_render = clear;
        self
    }

    pub fn screen(&self) -> &TileScreen {
        &self.screen
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Advance the simulation. There is no simulation yet.
    pub fn update(&mut self) {}

    /// Render the screen and present it.
    ///
    /// The first call only creates the presentation surface and drops the frame.
    pub fn render(&mut self) -> Result<RenderOutcome> {
        let Some(surface) = self.surface.as_mut() else {
            let surface = self
                .display
                .create_presentation_surface(PRESENT_BUFFER_COUNT)?;
            self.surface = Some(surface);
            return Ok(RenderOutcome::SurfaceCreated);
        };

        if self.clear_before_render {
            self.screen.clear();
        }
        self.screen.render();

        let src = self.screen.pixels();
        let dst = surface.backing_pixels();
        if dst.len() != src.len() {
            bail!(
                "surface buffer holds {} pixels, screen has {}",
                dst.len(),
                src.len()
            );
        }
        dst.copy_from_slice(src);
        surface.present()?;

        Ok(RenderOutcome::Presented)
    }
}
