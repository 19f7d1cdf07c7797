//! Physics step
//!
//! Advances a running round by one tick. Order matters: steering moves the orb
//! before jitter is added, so a still pointer never fully cancels the drift.

use glam::Vec2;
use rand::Rng;

use super::bounds::orb_escaped;
use super::state::{GameEvent, PointerState, RoundState};
use super::steering::{DirectionalCue, steer};
use crate::tuning::Config;

/// Timer slack in ulps of the interval, so float accumulation of `dt`
/// never skips a beat
const TIMER_SLACK_ULPS: f32 = 128.0;

/// What one step produced besides the mutated state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Directional cue pose, `None` when hidden
    pub cue: Option<DirectionalCue>,
    pub events: Vec<GameEvent>,
}

impl StepOutcome {
    pub fn escaped(&self) -> bool {
        self.events.contains(&GameEvent::Escaped)
    }

    /// Escalations this step (more than one after a long tick)
    pub fn escalations(&self) -> u32 {
        self.events
            .iter()
            .map(|e| match e {
                GameEvent::ChaosAdvanced { steps, .. } => *steps,
                _ => 0,
            })
            .sum()
    }
}

/// Pops every whole `interval` out of `timer`, returning how many fired.
///
/// Constant time for any `timer`; the count saturates at `u32::MAX`.
fn drain_timer(timer: &mut f32, interval: f32) -> u32 {
    let slack = interval * f32::EPSILON * TIMER_SLACK_ULPS;
    if *timer + slack < interval {
        return 0;
    }
    // float -> int `as` saturates
    let fired = ((*timer + slack) / interval).floor() as u32;
    let rest = timer.rem_euclid(interval);
    *timer = if interval - rest <= slack { 0.0 } else { rest };
    fired.max(1)
}

/// Advance `state` by `dt` seconds. No-op unless the round is running.
///
/// Escape is only reported; ending the round is the controller's job.
pub fn step<R: Rng>(
    state: &mut RoundState,
    pointer: &PointerState,
    config: &Config,
    rng: &mut R,
    dt: f32,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !state.is_running() {
        return outcome;
    }
    debug_assert!(dt.is_finite() && dt >= 0.0, "tick duration must be finite and >= 0");
    let tuning = &config.tuning;

    // 1. Steering
    if pointer.active {
        let steering = steer(state.orb_position, pointer.position, tuning);
        state.orb_position += steering.displacement;
        outcome.cue = steering.cue;
    }
    state.elapsed += dt;

    // 2. Score
    state.score_timer += dt;
    let paid = drain_timer(&mut state.score_timer, tuning.score_interval);
    if paid > 0 {
        let gain = u64::from(state.score_multiplier).saturating_mul(u64::from(paid));
        state.score = state.score.saturating_add(gain);
        outcome.events.push(GameEvent::Scored { score: state.score });
    }

    // 3. Chaos escalation
    state.chaos_timer += dt;
    let steps = drain_timer(&mut state.chaos_timer, tuning.escalation_interval);
    if steps > 0 {
        state.chaos_magnitude += tuning.chaos_step * steps as f32;
        state.score_multiplier = state.score_multiplier.saturating_add(steps);
        log::debug!(
            "Chaos tier {}: magnitude {:.1}, x{}",
            state.tier(),
            state.chaos_magnitude,
            state.score_multiplier
        );
        outcome.events.push(GameEvent::ChaosAdvanced {
            tier: state.tier(),
            steps,
            magnitude: state.chaos_magnitude,
            multiplier: state.score_multiplier,
        });
    }

    // 4. Jitter
    let c = state.chaos_magnitude;
    state.orb_position += Vec2::new(rng.random_range(-c..=c), rng.random_range(-c..=c));
    state.frame_counter += 1;
    if state.chaos_magnitude > tuning.initial_chaos
        && state.frame_counter % tuning.jitter_frame_interval == 0
    {
        outcome.events.push(GameEvent::Jitter);
    }

    // 5. Edge escape
    if orb_escaped(state.orb_position, tuning.orb_radius, &config.field) {
        outcome.events.push(GameEvent::Escaped);
    }

    outcome
}
