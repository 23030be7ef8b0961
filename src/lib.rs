//! Rain (workspace facade crate).
//!
//! A tile-to-pixel renderer driven by a threaded game loop, presented in the
//! terminal. The implementation lives in dedicated crates under `crates/`:
//!
//! - `core`: the tile table and the [`TileScreen`](core::TileScreen) pixel buffer
//! - `engine`: the [`GameLoop`](engine::GameLoop) worker and the display boundary
//! - `term`: the terminal display
//! - `types`: shared constants
//!
//! This crate adds the run configuration and log setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_rain_core as core;
pub use tui_rain_engine as engine;
pub use tui_rain_term as term;
pub use tui_rain_types as types;
