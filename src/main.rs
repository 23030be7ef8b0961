//! Rain runner (default binary).
//!
//! Builds one screen and one game loop from the configuration, starts the loop
//! and waits for the quit key (or the configured run time), then stops it.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_rain::config::{RainConfig, DEFAULT_HEADLESS_RUN_MS, USAGE};
use tui_rain::engine::{Display, Frame, GameLoop, HeadlessDisplay};
use tui_rain::logging;
use tui_rain::term::{TerminalDisplay, TerminalSession};
use tui_rain::types::TITLE;

/// How long the controlling thread waits for input between checks on the loop.
const POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = RainConfig::load(&args)?;
    logging::init(&config)?;
    tracing::info!(
        width = config.width,
        height = config.height,
        mode = config.mode.as_str(),
        headless = config.headless,
        "starting"
    );

    if config.headless {
        run_headless(&config)
    } else {
        run_terminal(&config)
    }
}

fn build_loop<D: Display>(config: &RainConfig, display: D) -> GameLoop<D> {
    let frame = Frame::new(config.build_screen(), display)
        .with_clear_before_render(config.clear_each_frame());
    GameLoop::with_options(frame, config.loop_options())
}

fn run_headless(config: &RainConfig) -> Result<()> {
    let display = HeadlessDisplay::new(config.width, config.height);
    let probe = display.probe();
    let mut game = build_loop(config, display);
    let stats = game.stats();

    let run_for = Duration::from_millis(config.run_ms.unwrap_or(DEFAULT_HEADLESS_RUN_MS));
    let started = Instant::now();
    game.start()?;
    while started.elapsed() < run_for && game.is_active() {
        thread::sleep(Duration::from_millis(POLL_MS).min(run_for));
    }
    let failed = !game.is_active();
    game.stop()?;

    if failed {
        bail!("game loop stopped on a render error");
    }

    let elapsed_ms = started.elapsed().as_millis().max(1);
    println!(
        "{}: presented {} frames in {} ms ({} fps, {} cycles)",
        TITLE,
        probe.presents(),
        elapsed_ms,
        u128::from(probe.presents()) * 1000 / elapsed_ms,
        stats.cycles()
    );
    Ok(())
}

fn run_terminal(config: &RainConfig) -> Result<()> {
    let mut session = TerminalSession::enter(TITLE)?;

    let result = run_until_quit(config);

    // Always try to restore terminal state.
    let _ = session.exit();
    result
}

fn run_until_quit(config: &RainConfig) -> Result<()> {
    let display = TerminalDisplay::new(config.width, config.height);
    let mut game = build_loop(config, display);

    let deadline = config
        .run_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    game.start()?;
    let mut failed = false;
    loop {
        if !game.is_active() {
            failed = true;
            break;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    break;
                }
            }
        }
    }
    game.stop()?;

    if failed {
        bail!("game loop stopped on a render error");
    }
    Ok(())
}

/// The terminal stand-in for closing the window.
fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
