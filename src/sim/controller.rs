//! Round controller
//!
//! Owns all round and pointer state and drives Idle -> Running -> Ended.
//! Every method is total: events that make no sense in the current phase
//! are ignored. Input and ticks take `&mut self`, so a tick can never see a
//! half-applied input event.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::clock::FixedStep;
use super::state::{EndReason, GameEvent, PointerState, RoundPhase, RoundState};
use super::tick::step;
use crate::feedback::{Flash, FrameUpdate, Intensity, Presenter, RoundStart, RoundSummary};
use crate::palette::chaos_color;
use crate::tuning::Config;

pub struct RoundController {
    config: Config,
    state: RoundState,
    pointer: PointerState,
    rng: Pcg32,
    clock: FixedStep,
    last_summary: Option<RoundSummary>,
}

impl RoundController {
    /// Controller with a random jitter seed
    pub fn new(config: Config) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Controller whose jitter sequence is reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        log::debug!("Round controller seeded with {}", seed);
        Self {
            config,
            state: RoundState::default(),
            pointer: PointerState::default(),
            rng: Pcg32::seed_from_u64(seed),
            clock: FixedStep::default(),
            last_summary: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    /// Summary of the most recently finished round
    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }

    /// Starts a round from Idle or Ended; re-targets the pointer while Running
    pub fn on_pointer_down(&mut self, pos: Vec2, out: &mut impl Presenter) {
        self.pointer = PointerState::pressed_at(pos);
        match self.state.phase {
            RoundPhase::Idle | RoundPhase::Ended => self.start_round(out),
            RoundPhase::Running => {}
        }
    }

    pub fn on_pointer_move(&mut self, pos: Vec2) {
        if self.state.is_running() {
            self.pointer.position = pos;
        }
    }

    pub fn on_pointer_up(&mut self, out: &mut impl Presenter) {
        if self.state.is_running() {
            self.end_round(EndReason::Released, out);
        }
    }

    /// The system took the touch away; same as lifting the finger
    pub fn on_pointer_cancel(&mut self, out: &mut impl Presenter) {
        self.on_pointer_up(out);
    }

    /// Run one physics step of `dt` seconds. No-op unless Running.
    pub fn tick(&mut self, dt: f32, out: &mut impl Presenter) {
        if !self.state.is_running() {
            return;
        }

        let outcome = step(&mut self.state, &self.pointer, &self.config, &mut self.rng, dt);

        out.frame(FrameUpdate {
            orb_position: self.state.orb_position,
            cue: outcome.cue,
            score: self.state.score,
        });

        for event in &outcome.events {
            match *event {
                GameEvent::ChaosAdvanced { tier, .. } => {
                    out.chaos_advanced(tier, chaos_color(tier));
                    out.impact(Intensity::Medium);
                }
                GameEvent::Jitter => out.impact(Intensity::Light),
                GameEvent::Scored { .. } => {}
                GameEvent::Escaped => {}
            }
        }

        if outcome.escaped() {
            self.end_round(EndReason::Escaped, out);
        }
    }

    /// Feed a display frame of `frame_dt` seconds; runs whole fixed ticks.
    ///
    /// Returns the number of ticks run. Leftover ticks are dropped if the
    /// round ends mid-frame.
    pub fn advance_frame(&mut self, frame_dt: f32, out: &mut impl Presenter) -> u32 {
        if !self.state.is_running() {
            return 0;
        }
        let substeps = self.clock.advance(frame_dt);
        let dt = self.clock.step();
        let mut ran = 0;
        for _ in 0..substeps {
            if !self.state.is_running() {
                break;
            }
            self.tick(dt, out);
            ran += 1;
        }
        ran
    }

    fn start_round(&mut self, out: &mut impl Presenter) {
        self.state = RoundState::start(&self.config);
        self.clock.reset();
        log::info!(
            "Round started on {}x{} field",
            self.config.field.width,
            self.config.field.height
        );
        out.round_started(RoundStart {
            orb_position: self.state.orb_position,
            glow: chaos_color(0),
        });
    }

    fn end_round(&mut self, reason: EndReason, out: &mut impl Presenter) {
        self.state.phase = RoundPhase::Ended;
        self.pointer.active = false;

        let summary = RoundSummary {
            reason,
            score: self.state.score,
            tier: self.state.tier(),
            survived_secs: self.state.elapsed,
        };
        log::info!(
            "Round over ({}): score {}, tier {}, {:.1}s",
            reason.as_str(),
            summary.score,
            summary.tier,
            summary.survived_secs
        );

        // Chevron goes away with the finger
        out.frame(FrameUpdate {
            orb_position: self.state.orb_position,
            cue: None,
            score: self.state.score,
        });
        out.impact(Intensity::Heavy);
        out.flash(Flash::default());
        out.round_ended(summary);
        self.last_summary = Some(summary);
    }
}
