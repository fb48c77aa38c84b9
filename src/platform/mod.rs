//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Frame timing (turning display frames into fixed simulation ticks)
//! - The browser entry point (wasm32)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Fixed-step accumulator.
///
/// Display frames arrive at whatever rate the host manages; the simulation
/// always advances in whole `SIM_DT` steps. Long stalls (tab switch, debugger)
/// are clamped so the game never fast-forwards through a crash.
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed time, get the number of ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // A NaN would poison the accumulator for good
        if !frame_dt.is_finite() {
            return 0;
        }
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop whatever the substep cap left behind
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
