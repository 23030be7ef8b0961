//! GameLoop: runs `update` then `render` on a dedicated worker thread.
//!
//! The [`Frame`] (screen, display and surface) moves into the worker on `start`
//! and comes back out of the join handle on `stop`. While the worker runs it is
//! the only owner of the pixel buffer; the controlling thread only shares the
//! running flag and the [`LoopStats`] counters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::display::Display;
use crate::error::LoopError;
use crate::frame::Frame;
use crate::stats::{FrameMeter, LoopStats};

/// Name of the worker thread.
pub const WORKER_NAME: &str = "Display";

/// How often the worker logs its frame rate.
pub const FPS_LOG_INTERVAL_MS: u64 = 1000;

/// Scheduling options for the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopOptions {
    /// Cap on cycles per second. `None` runs as fast as the host allows.
    pub max_fps: Option<u32>,
}

impl LoopOptions {
    fn frame_period(&self) -> Option<Duration> {
        self.max_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps)))
    }
}

enum LoopState<D: Display> {
    Stopped(Box<Frame<D>>),
    Running(JoinHandle<Frame<D>>),
    Lost,
}

pub struct GameLoop<D: Display> {
    running: Arc<AtomicBool>,
    stats: Arc<LoopStats>,
    options: LoopOptions,
    state: LoopState<D>,
}

impl<D: Display> GameLoop<D> {
    pub fn new(frame: Frame<D>) -> Self {
        Self::with_options(frame, LoopOptions::default())
    }

    pub fn with_options(frame: Frame<D>, options: LoopOptions) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(LoopStats::default()),
            options,
            state: LoopState::Stopped(Box::new(frame)),
        }
    }

    /// Whether a worker is currently attached.
    ///
    /// A worker that stopped itself after a render error still counts until
    /// [`stop`](Self::stop) joins it.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    /// Whether the worker is still cycling. Turns false on its own when a render
    /// fails or the worker panics.
    pub fn is_active(&self) -> bool {
        match &self.state {
            LoopState::Running(handle) => {
                !handle.is_finished() && self.running.load(Ordering::Acquire)
            }
            LoopState::Stopped(_) | LoopState::Lost => false,
        }
    }

    pub fn stats(&self) -> Arc<LoopStats> {
        Arc::clone(&self.stats)
    }

    /// The frame, when the loop is stopped.
    pub fn frame(&self) -> Option<&Frame<D>> {
        match &self.state {
            LoopState::Stopped(frame) => Some(&**frame),
            LoopState::Running(_) | LoopState::Lost => None,
        }
    }

    /// Spawn the worker. Does nothing if it is already running.
    ///
    /// A worker that exited on its own (after a render error) is joined first and
    /// a fresh one is spawned from the returned frame.
    pub fn start(&mut self) -> Result<(), LoopError> {
        let frame = match std::mem::replace(&mut self.state, LoopState::Lost) {
            LoopState::Stopped(frame) => frame,
            LoopState::Running(handle) if handle.is_finished() => match handle.join() {
                Ok(frame) => {
                    tracing::info!("game loop worker had exited; restarting");
                    Box::new(frame)
                }
                Err(_) => {
                    tracing::error!("game loop worker panicked; frame is lost");
                    return Err(LoopError::WorkerLost);
                }
            },
            LoopState::Running(handle) => {
                self.state = LoopState::Running(handle);
                return Ok(());
            }
            LoopState::Lost => return Err(LoopError::WorkerLost),
        };

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);
        let stats = Arc::clone(&self.stats);
        let options = self.options;

        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_owned())
            .spawn(move || run_worker(*frame, &running, &stats, options));

        match spawned {
            Ok(handle) => {
                tracing::info!(max_fps = ?options.max_fps, "game loop started");
                self.state = LoopState::Running(handle);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::Release);
                Err(LoopError::Spawn(err))
            }
        }
    }

    /// Signal the worker to finish its current cycle and wait for it.
    ///
    /// A worker that panicked is logged and treated as stopped; the next
    /// [`start`](Self::start) then reports [`LoopError::WorkerLost`].
    pub fn stop(&mut self) -> Result<(), LoopError> {
        let handle = match std::mem::replace(&mut self.state, LoopState::Lost) {
            LoopState::Running(handle) => handle,
            LoopState::Stopped(frame) => {
                self.state = LoopState::Stopped(frame);
                return Err(LoopError::NotStarted);
            }
            LoopState::Lost => return Err(LoopError::NotStarted),
        };

        self.running.store(false, Ordering::Release);
        match handle.join() {
            Ok(frame) => {
                tracing::info!(cycles = self.stats.cycles(), "game loop stopped");
                self.state = LoopState::Stopped(Box::new(frame));
            }
            Err(_) => {
                tracing::error!("game loop worker panicked during shutdown; treating it as stopped");
            }
        }
        Ok(())
    }
}

impl<D: Display> Drop for GameLoop<D> {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(e) = self.stop() {
                tracing::warn!(error = %e, "error stopping game loop on drop");
            }
        }
    }
}

fn run_worker<D: Display>(
    mut frame: Frame<D>,
    running: &AtomicBool,
    stats: &LoopStats,
    options: LoopOptions,
) -> Frame<D> {
    let epoch = Instant::now();
    let period = options.frame_period();
    let mut meter = FrameMeter::new(FPS_LOG_INTERVAL_MS, 0);

    while running.load(Ordering::Acquire) {
        let cycle_start = Instant::now();

        frame.update();
        match frame.render() {
            Ok(outcome) => stats.record(outcome),
            Err(e) => {
                tracing::error!(error = %e, "render failed; stopping game loop");
                running.store(false, Ordering::Release);
                break;
            }
        }

        let now_ms = epoch.elapsed().as_millis() as u64;
        if let Some(fps) = meter.tick(now_ms) {
            tracing::debug!(fps, "frame rate");
        }

        if let Some(period) = period {
            let elapsed = cycle_start.elapsed();
            if elapsed < period {
                spin_sleep::sleep(period - elapsed);
            }
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileScreen;
    use crate::headless::HeadlessDisplay;
    use crate::types::TilePalette;

    fn small_loop() -> GameLoop<HeadlessDisplay> {
        let screen = TileScreen::new(8, 8, TilePalette::default());
        GameLoop::new(Frame::new(screen, HeadlessDisplay::new(8, 8)))
    }

    #[test]
    fn starting_twice_keeps_one_worker() {
        let mut game = small_loop();
        game.start().unwrap();
        game.start().unwrap();
        assert!(game.is_running());
        game.stop().unwrap();
        assert!(!game.is_running());
        assert!(matches!(game.stop(), Err(LoopError::NotStarted)));
    }

    #[test]
    fn frame_period_respects_cap() {
        let options = LoopOptions { max_fps: Some(50) };
        assert_eq!(options.frame_period(), Some(Duration::from_millis(20)));
        assert_eq!(LoopOptions { max_fps: Some(0) }.frame_period(), None);
        assert_eq!(LoopOptions::default().frame_period(), None);
    }
}
