//! Field geometry and physics tunables
//!
//! Defaults live in `crate::consts`. A host may override a subset from JSON;
//! everything is validated once when the `Config` is built and never mutated.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::field_center;

/// Problems with a field or tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("field {width}x{height} cannot hold an orb of radius {orb_radius}")]
    FieldTooSmall {
        width: f32,
        height: f32,
        orb_radius: f32,
    },
    #[error("`{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("`max_push` must be in (0, 1], got {0}")]
    PushOutOfRange(f32),
    #[error("`jitter_frame_interval` must be at least 1")]
    ZeroJitterInterval,
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Play field dimensions (host viewport, in points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        field_center(self.width, self.height)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Physics and feedback constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub hold_radius: f32,
    pub orb_radius: f32,
    pub dead_zone: f32,
    /// Max fraction of the pointer offset applied per tick
    pub max_push: f32,
    pub initial_chaos: f32,
    /// Chaos added per escalation
    pub chaos_step: f32,
    pub escalation_interval: f32,
    pub score_interval: f32,
    /// Light cue cadence in ticks (frame-count based, not time based)
    pub jitter_frame_interval: u64,
    pub cue_gap: f32,
    pub cue_max_opacity: f32,
    pub cue_opacity_gain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hold_radius: HOLD_RADIUS,
            orb_radius: ORB_RADIUS,
            dead_zone: DEAD_ZONE,
            max_push: MAX_PUSH,
            initial_chaos: INITIAL_CHAOS,
            chaos_step: CHAOS_STEP,
            escalation_interval: ESCALATION_INTERVAL,
            score_interval: SCORE_INTERVAL,
            jitter_frame_interval: JITTER_FRAME_INTERVAL,
            cue_gap: CUE_GAP,
            cue_max_opacity: CUE_MAX_OPACITY,
            cue_opacity_gain: CUE_OPACITY_GAIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("hold_radius", self.hold_radius),
            ("orb_radius", self.orb_radius),
            ("escalation_interval", self.escalation_interval),
            ("score_interval", self.score_interval),
        ];
        for (name, value) in positive {
            // `!(v > 0)` also rejects NaN
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        let non_negative = [
            ("dead_zone", self.dead_zone),
            ("initial_chaos", self.initial_chaos),
            ("chaos_step", self.chaos_step),
            ("cue_gap", self.cue_gap),
            ("cue_max_opacity", self.cue_max_opacity),
            ("cue_opacity_gain", self.cue_opacity_gain),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { name, value });
            }
        }
        if !(self.max_push > 0.0 && self.max_push <= 1.0) {
            return Err(TuningError::PushOutOfRange(self.max_push));
        }
        if self.jitter_frame_interval == 0 {
            return Err(TuningError::ZeroJitterInterval);
        }
        Ok(())
    }
}

/// Immutable per-round configuration: field plus tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub field: Field,
    pub tuning: Tuning,
}

impl Config {
    pub fn new(field: Field, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let min_side = 2.0 * tuning.orb_radius;
        if !(field.width > min_side && field.height > min_side) {
            return Err(TuningError::FieldTooSmall {
                width: field.width,
                height: field.height,
                orb_radius: tuning.orb_radius,
            });
        }
        Ok(Self { field, tuning })
    }

    /// Default tuning on a viewport of the given size
    pub fn for_viewport(width: f32, height: f32) -> Result<Self, TuningError> {
        Self::new(Field::new(width, height), Tuning::default())
    }
}
