//! Terminal presentation module.
//!
//! A [`TerminalDisplay`] is the game loop's display collaborator for a real
//! terminal. It renders each logical frame as 24-bit coloured half-block cells, two
//! pixels per cell, so the image keeps roughly square pixels.
//!
//! Pipeline per present:
//! - [`raster`]: scale the back buffer into a cell [`FrameBuffer`] (pure, testable)
//! - [`renderer`]: diff against the previous frame and write only changed runs
//! - [`session`]: raw mode and the alternate screen for the duration of a run

pub mod fb;
pub mod raster;
pub mod renderer;
pub mod session;
pub mod surface;

pub use tui_rain_engine as engine;
pub use tui_rain_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, UPPER_HALF};
pub use raster::{fit, rasterize, Placement, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::TerminalSession;
pub use surface::{TerminalDisplay, TerminalSurface};
