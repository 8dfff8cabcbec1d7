use std::time::Instant;

use crate::detection::domain::face_detector::Engine;

/// Wall-clock timer for per-frame stages.
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Instantaneous rate: one event per elapsed interval so far.
    pub fn fps(&self) -> f64 {
        fps_from_ms(self.elapsed_ms())
    }
}

/// Converts a per-frame duration into an instantaneous frames-per-second
/// figure. A zero duration reports 0.0 rather than infinity.
pub fn fps_from_ms(ms: f64) -> f64 {
    if ms > 0.0 {
        1000.0 / ms
    } else {
        0.0
    }
}

/// Per-iteration snapshot rendered by the HUD.
///
/// `detect_fps` covers the detector call only; `total_fps` covers the whole
/// capture-to-render iteration.
#[derive(Clone, Copy, Debug)]
pub struct FrameStats {
    pub width: i32,
    pub height: i32,
    pub engine: Engine,
    pub detect_fps: f64,
    pub total_fps: f64,
}
