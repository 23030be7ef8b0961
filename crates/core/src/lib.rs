//! Core rendering module - pure, deterministic, and testable
//!
//! This crate turns a table of tile colours into a full-resolution pixel buffer.
//! It has **zero dependencies** on threads, terminals or I/O:
//!
//! - **Deterministic**: a seeded palette always produces the same background
//! - **Bounded**: every tile lookup is clamped into the 64x64 table
//! - **Allocation-free rendering**: buffers are sized once at construction
//!
//! # Module Structure
//!
//! - [`screen`]: the [`TileScreen`] pixel buffer and its render modes
//! - [`tiles`]: the 4096-entry [`TileTable`] and the shift-based index maths
//! - [`animation`]: scroll offset and draw cursor state
//! - [`rng`]: seeded LCG used to colour random palettes
//!
//! # Example
//!
//! ```
//! use tui_rain_core::TileScreen;
//! use tui_rain_types::TilePalette;
//!
//! let mut screen = TileScreen::new(32, 32, TilePalette::Solid(0x336699));
//! screen.render();
//! assert!(screen.pixels().iter().all(|&p| p == 0x336699));
//!
//! screen.clear();
//! assert!(screen.pixels().iter().all(|&p| p == 0));
//! ```

pub mod animation;
pub mod rng;
pub mod screen;
pub mod tiles;

pub use tui_rain_types as types;

pub use animation::{CursorState, ScrollState};
pub use rng::SimpleRng;
pub use screen::TileScreen;
pub use tiles::{tile_index, TileTable};
