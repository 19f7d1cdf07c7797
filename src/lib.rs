//! Hold It Together - keep a drifting orb inside the field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, chaos, scoring, round state machine)
//! - `feedback`: Presentation adapter contract (frame updates, haptic cues, flash)
//! - `tuning`: Field geometry and physics constants
//! - `palette`: Chaos tier glow colours
//! - `settings`: Host-side feedback preferences

pub mod feedback;
pub mod palette;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use feedback::{Flash, FrameUpdate, GatedPresenter, Intensity, LogPresenter, Presenter, RoundSummary};
pub use settings::FeedbackSettings;
pub use tuning::{Config, Field, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Orb geometry
    pub const ORB_RADIUS: f32 = 50.0;
    /// Distance at which steering saturates
    pub const HOLD_RADIUS: f32 = 120.0;
    /// Pointer closer than this to the orb centre does nothing
    pub const DEAD_ZONE: f32 = 20.0;

    /// Max fraction of the pointer offset applied to the orb per tick
    pub const MAX_PUSH: f32 = 0.06;

    /// Chaos (jitter amplitude, px per tick per axis)
    pub const INITIAL_CHAOS: f32 = 2.0;
    pub const CHAOS_STEP: f32 = 0.5;
    pub const ESCALATION_INTERVAL: f32 = 2.0;

    /// Score accrues `multiplier` points every interval
    pub const SCORE_INTERVAL: f32 = 0.25;

    /// Light cue every N ticks once chaos has escalated
    pub const JITTER_FRAME_INTERVAL: u64 = 4;

    /// Directional cue placement and fade
    pub const CUE_GAP: f32 = 14.0;
    pub const CUE_MAX_OPACITY: f32 = 0.6;
    pub const CUE_OPACITY_GAIN: f32 = 50.0;

    /// End-of-round flash
    pub const FLASH_ALPHA: f32 = 0.8;
    pub const FLASH_FADE_SECS: f32 = 0.4;
}

/// Centre of a `width` x `height` field
#[inline]
pub fn field_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}

/// Heading of `v` in radians, counter-clockwise from +x
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_center() {
        assert_eq!(field_center(390.0, 844.0), Vec2::new(195.0, 422.0));
    }

    #[test]
    fn test_heading() {
        assert!(heading(Vec2::X).abs() < 1e-6);
        assert!((heading(Vec2::Y) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((heading(-Vec2::X) - std::f32::consts::PI).abs() < 1e-6);
    }
}
