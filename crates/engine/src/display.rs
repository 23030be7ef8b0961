//! Boundary to whatever makes pixels visible.
//!
//! The loop never draws on its own: it asks a [`Display`] for a multi-buffered
//! [`Surface`] once, then every frame writes into the surface's back buffer and
//! asks it to present.

use anyhow::Result;

use crate::types::Color;

/// Something that can hand out a presentation surface.
pub trait Display: Send + 'static {
    type Surface: Surface;

    /// Allocate a surface with `buffer_count` buffers at the logical resolution.
    ///
    /// The frame calls this at most once and keeps the surface.
    fn create_presentation_surface(&mut self, buffer_count: usize) -> Result<Self::Surface>;
}

/// A multi-buffered drawable target.
pub trait Surface: Send + 'static {
    /// The buffer to overwrite for the next frame, one colour per logical pixel.
    ///
    /// Callers must not hold on to it across frames.
    fn backing_pixels(&mut self) -> &mut [Color];

    /// Make the buffer just written visible and move to the next one.
    ///
    /// May block (for instance on a slow terminal).
    fn present(&mut self) -> Result<()>;
}
