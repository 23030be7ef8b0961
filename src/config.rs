//! Run configuration: defaults, then environment variables, then flags.
//!
//! Environment variables (unparseable values fall back to the default):
//!
//! - `RAIN_WIDTH`, `RAIN_HEIGHT`: logical resolution in pixels (default 300x162)
//! - `RAIN_MODE`: `tiles` or `cursor`
//! - `RAIN_SEED`: seed for the random tile palette (default 0)
//! - `RAIN_SOLID`: paint every tile with one `RRGGBB` colour instead
//! - `RAIN_OFFSET_X`, `RAIN_OFFSET_Y`: tile bias (default 16, 0)
//! - `RAIN_SCROLL_X`, `RAIN_SCROLL_Y`: bias change per frame (default 0)
//! - `RAIN_CLEAR`: "1"/"true" clears the screen before every render
//! - `RAIN_MAX_FPS`: frame cap (default unlimited)
//! - `RAIN_HEADLESS`: "1"/"true" runs without a terminal
//! - `RAIN_RUN_MS`: stop after this many milliseconds
//! - `RAIN_LOG_PATH`: write logs to this file

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use crate::core::TileScreen;
use crate::engine::LoopOptions;
use crate::types::{
    parse_color, RenderMode, TilePalette, DEFAULT_HEIGHT, DEFAULT_HORIZONTAL_BIAS, DEFAULT_WIDTH,
    MAX_DIMENSION,
};

/// How long a headless run lasts when no duration is given.
pub const DEFAULT_HEADLESS_RUN_MS: u64 = 1000;

pub const USAGE: &str = "\
usage: tui-rain [options]

  --width N          logical width in pixels (default 300)
  --height N         logical height in pixels (default 162)
  --mode M           tiles | cursor (default tiles)
  --seed N           random tile palette seed (default 0)
  --solid RRGGBB     paint every tile with one colour
  --offset-x N       horizontal tile bias (default 16)
  --offset-y N       vertical tile bias (default 0)
  --scroll-x N       horizontal bias change per frame (default 0)
  --scroll-y N       vertical bias change per frame (default 0)
  --clear            clear the screen before every render
  --max-fps N        cap the frame rate (default unlimited)
  --headless         render in memory and print a summary
  --run-ms N         stop after N milliseconds
  --log PATH         write logs to PATH
  -h, --help         show this help

Press q, Esc or Ctrl-C to quit.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainConfig {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    pub palette: TilePalette,
    pub offset_x: i32,
    pub offset_y: i32,
    pub scroll_x: i32,
    pub scroll_y: i32,
    /// `None` picks per mode: the cursor mode clears, the tile mode does not.
    pub clear_each_frame: Option<bool>,
    pub max_fps: Option<u32>,
    pub headless: bool,
    pub run_ms: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: RenderMode::Tiles,
            palette: TilePalette::default(),
            offset_x: DEFAULT_HORIZONTAL_BIAS,
            offset_y: 0,
            scroll_x: 0,
            scroll_y: 0,
            clear_each_frame: None,
            max_fps: None,
            headless: false,
            run_ms: None,
            log_path: None,
        }
    }
}

impl RainConfig {
    /// Defaults, then the process environment, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        let config = Self::from_env().apply_args(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from a variable lookup, so tests need not touch the real environment.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T, G>(get: &G, key: &str) -> Option<T>
        where
            T: std::str::FromStr,
            G: Fn(&str) -> Option<String>,
        {
            get(key).and_then(|s| s.trim().parse().ok())
        }
        fn flag<G: Fn(&str) -> Option<String>>(get: &G, key: &str) -> Option<bool> {
            get(key).map(|s| {
                let s = s.trim();
                s == "1" || s.eq_ignore_ascii_case("true")
            })
        }

        let d = Self::default();

        let palette = match get("RAIN_SOLID").as_deref().and_then(parse_color) {
            Some(color) => TilePalette::Solid(color),
            None => match parsed(&get, "RAIN_SEED") {
                Some(seed) => TilePalette::Random { seed },
                None => d.palette,
            },
        };

        Self {
            width: parsed(&get, "RAIN_WIDTH").unwrap_or(d.width),
            height: parsed(&get, "RAIN_HEIGHT").unwrap_or(d.height),
            mode: get("RAIN_MODE")
                .as_deref()
                .and_then(RenderMode::from_str)
                .unwrap_or(d.mode),
            palette,
            offset_x: parsed(&get, "RAIN_OFFSET_X").unwrap_or(d.offset_x),
            offset_y: parsed(&get, "RAIN_OFFSET_Y").unwrap_or(d.offset_y),
            scroll_x: parsed(&get, "RAIN_SCROLL_X").unwrap_or(d.scroll_x),
            scroll_y: parsed(&get, "RAIN_SCROLL_Y").unwrap_or(d.scroll_y),
            clear_each_frame: flag(&get, "RAIN_CLEAR").or(d.clear_each_frame),
            max_fps: parsed(&get, "RAIN_MAX_FPS").or(d.max_fps),
            headless: flag(&get, "RAIN_HEADLESS").unwrap_or(d.headless),
            run_ms: parsed(&get, "RAIN_RUN_MS").or(d.run_ms),
            log_path: get("RAIN_LOG_PATH")
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
                .or(d.log_path),
        }
    }

    /// Override fields from command-line flags.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--clear" => self.clear_each_frame = Some(true),
                "--headless" => self.headless = true,
                _ => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--width" => self.width = number(flag, v)?,
                        "--height" => self.height = number(flag, v)?,
                        "--mode" => {
                            self.mode = RenderMode::from_str(v)
                                .ok_or_else(|| anyhow!("invalid --mode value: {}", v))?
                        }
                        "--seed" => self.palette = TilePalette::Random { seed: number(flag, v)? },
                        "--solid" => {
                            let color = parse_color(v)
                                .ok_or_else(|| anyhow!("invalid --solid colour: {}", v))?;
                            self.palette = TilePalette::Solid(color);
                        }
                        "--offset-x" => self.offset_x = number(flag, v)?,
                        "--offset-y" => self.offset_y = number(flag, v)?,
                        "--scroll-x" => self.scroll_x = number(flag, v)?,
                        "--scroll-y" => self.scroll_y = number(flag, v)?,
                        "--max-fps" => self.max_fps = Some(number(flag, v)?),
                        "--run-ms" => self.run_ms = Some(number(flag, v)?),
                        "--log" => self.log_path = Some(PathBuf::from(v)),
                        other => bail!("unknown argument: {}", other),
                    }
                }
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "screen size must be at least 1x1, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            bail!(
                "screen size must be at most {}x{}, got {}x{}",
                MAX_DIMENSION,
                MAX_DIMENSION,
                self.width,
                self.height
            );
        }
        if self.max_fps == Some(0) {
            bail!("--max-fps must be at least 1");
        }
        Ok(())
    }

    pub fn clear_each_frame(&self) -> bool {
        self.clear_each_frame
            .unwrap_or(self.mode == RenderMode::Cursor)
    }

    pub fn build_screen(&self) -> TileScreen {
        TileScreen::new(self.width, self.height, self.palette)
            .with_mode(self.mode)
            .with_offset(self.offset_x, self.offset_y)
            .with_scroll_step(self.scroll_x, self.scroll_y)
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            max_fps: self.max_fps,
        }
    }
}

fn number<T: std::str::FromStr>(flag: &str, v: &str) -> Result<T> {
    v.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
