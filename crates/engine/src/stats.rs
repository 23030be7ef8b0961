//! Loop counters and frame-rate measurement.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::frame::RenderOutcome;

/// Counters written by the worker and readable from any thread.
#[derive(Debug, Default)]
pub struct LoopStats {
    cycles: AtomicU64,
    surfaces_created: AtomicU64,
    frames_presented: AtomicU64,
}

impl LoopStats {
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::Acquire)
    }

    pub fn surfaces_created(&self) -> u64 {
        self.surfaces_created.load(Ordering::Acquire)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented.load(Ordering::Acquire)
    }

    pub(crate) fn record(&self, outcome: RenderOutcome) {
        self.cycles.fetch_add(1, Ordering::AcqRel);
        match outcome {
            RenderOutcome::SurfaceCreated => {
                self.surfaces_created.fetch_add(1, Ordering::AcqRel);
            }
            RenderOutcome::Presented => {
                self.frames_presented.fetch_add(1, Ordering::AcqRel);
            }
        }
    }
}

/// Counts frames and reports the rate once per window.
#[derive(Debug, Clone)]
pub struct FrameMeter {
    window_ms: u64,
    window_start_ms: u64,
    frames: u32,
}

impl FrameMeter {
    pub fn new(window_ms: u64, now_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            window_start_ms: now_ms,
            frames: 0,
        }
    }

    /// Count one frame at `now_ms`.
    ///
    /// Returns frames per second once a full window has elapsed, then starts a new
    /// window.
    pub fn tick(&mut self, now_ms: u64) -> Option<u32> {
        self.frames = self.frames.saturating_add(1);
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed < self.window_ms {
            return None;
        }

        let fps = (u64::from(self.frames) * 1000 / elapsed).min(u64::from(u32::MAX)) as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_waits_for_a_full_window() {
        let mut m = FrameMeter::new(1000, 0);
        assert_eq!(m.tick(10), None);
        assert_eq!(m.tick(999), None);
        assert_eq!(m.tick(1000), Some(3));
    }

    #[test]
    fn meter_restarts_after_reporting() {
        let mut m = FrameMeter::new(1000, 0);
        for t in 1..=1000 {
            m.tick(t);
        }
        assert_eq!(m.tick(1500), None);
        assert_eq!(m.tick(2000), Some(2));
    }

    #[test]
    fn stats_split_outcomes() {
        let stats = LoopStats::default();
        stats.record(RenderOutcome::SurfaceCreated);
        stats.record(RenderOutcome::Presented);
        stats.record(RenderOutcome::Presented);
        assert_eq!(stats.cycles(), 3);
        assert_eq!(stats.surfaces_created(), 1);
        assert_eq!(stats.frames_presented(), 2);
    }
}
