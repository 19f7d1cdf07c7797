//! Fixed timestep accumulator
//!
//! Turns variable display-frame durations into whole simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    max_frame: f32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS, MAX_FRAME_DT)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32, max_frame: f32) -> Self {
        Self {
            step,
            max_substeps,
            max_frame,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's duration; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Tab switches and debugger pauses show up as huge frames
        let frame_dt = frame_dt.clamp(0.0, self.max_frame);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }

    /// Drop any partial tick (on round start)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
