//! Round and pointer state
//!
//! Plain data only. The host's scene graph mirrors this; it never owns it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Config;

/// Where the round controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Nothing played yet, waiting for the first touch
    #[default]
    Idle,
    /// Simulation advancing
    Running,
    /// Round over, waiting for a touch to restart
    Ended,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Pointer lifted or the touch was cancelled
    Released,
    /// Orb crossed the field edge
    Escaped,
}

impl EndReason {
    /// Stable reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Released => "released",
            EndReason::Escaped => "escaped",
        }
    }

    /// Status line shown to the player
    pub fn status_text(&self) -> &'static str {
        match self {
            EndReason::Released => "Let go!",
            EndReason::Escaped => "Orb escaped!",
        }
    }
}

/// Single continuous pointer/touch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub active: bool,
    pub position: Vec2,
}

impl PointerState {
    pub fn pressed_at(position: Vec2) -> Self {
        Self {
            active: true,
            position,
        }
    }
}

/// Per-round simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub orb_position: Vec2,
    pub score: u64,
    /// Points per score interval; +1 per escalation
    pub score_multiplier: u32,
    /// Jitter amplitude per axis per tick
    pub chaos_magnitude: f32,
    pub chaos_timer: f32,
    pub score_timer: f32,
    /// Simulated seconds since the round started
    pub elapsed: f32,
    pub frame_counter: u64,
    pub phase: RoundPhase,
}

impl Default for RoundState {
    /// An idle state with nothing played
    fn default() -> Self {
        Self {
            orb_position: Vec2::ZERO,
            score: 0,
            score_multiplier: 1,
            chaos_magnitude: 0.0,
            chaos_timer: 0.0,
            score_timer: 0.0,
            elapsed: 0.0,
            frame_counter: 0,
            phase: RoundPhase::Idle,
        }
    }
}

impl RoundState {
    /// Fresh running round with the orb at the field centre
    pub fn start(config: &Config) -> Self {
        Self {
            orb_position: config.field.center(),
            score: 0,
            score_multiplier: 1,
            chaos_magnitude: config.tuning.initial_chaos,
            chaos_timer: 0.0,
            score_timer: 0.0,
            elapsed: 0.0,
            frame_counter: 0,
            phase: RoundPhase::Running,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Escalations so far this round
    #[inline]
    pub fn tier(&self) -> u32 {
        self.score_multiplier.saturating_sub(1)
    }
}

/// Notable things a single physics step produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score increased this step
    Scored { score: u64 },
    /// Chaos escalated `steps` times this step, reaching `tier`
    ChaosAdvanced {
        tier: u32,
        steps: u32,
        magnitude: f32,
        multiplier: u32,
    },
    /// Sampled jitter tick, drives a light cue
    Jitter,
    /// Orb left the field
    Escaped,
}
