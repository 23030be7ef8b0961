//! Game loop module - the update/render cycle and its worker thread
//!
//! # Pieces
//!
//! - [`Frame`]: one screen plus the [`Display`] it is shown on. `update()` is a
//!   placeholder; `render()` draws the screen, copies it into the surface's back
//!   buffer and presents it.
//! - [`GameLoop`]: moves a frame onto a dedicated worker and runs
//!   `update(); render();` until stopped. The frame comes back on `stop()`, so a
//!   loop can be restarted.
//! - [`Display`] / [`Surface`]: the boundary to whatever makes pixels visible.
//!   [`HeadlessDisplay`] keeps them in memory.
//!
//! # Lifecycle
//!
//! ```text
//! Stopped --start()--> Running --stop()--> Stopped
//! ```
//!
//! The very first render of a frame only creates the presentation surface
//! (triple-buffered) and draws nothing.
//!
//! # Example
//!
//! ```
//! use tui_rain_core::TileScreen;
//! use tui_rain_engine::{Frame, GameLoop, HeadlessDisplay};
//! use tui_rain_types::TilePalette;
//!
//! let screen = TileScreen::new(64, 36, TilePalette::Random { seed: 1 });
//! let display = HeadlessDisplay::new(64, 36);
//! let probe = display.probe();
//!
//! let mut game = GameLoop::new(Frame::new(screen, display));
//! game.start().unwrap();
//! while probe.presents() == 0 {
//!     std::thread::yield_now();
//! }
//! game.stop().unwrap();
//! assert_eq!(probe.surfaces_created(), 1);
//! ```

pub mod display;
pub mod error;
pub mod frame;
pub mod game_loop;
pub mod headless;
pub mod stats;

pub use tui_rain_core as core;
pub use tui_rain_types as types;

pub use display::{Display, Surface};
pub use error::LoopError;
pub use frame::{Frame, RenderOutcome};
pub use game_loop::{GameLoop, LoopOptions};
pub use headless::{HeadlessDisplay, HeadlessProbe, HeadlessSurface};
pub use stats::{FrameMeter, LoopStats};
