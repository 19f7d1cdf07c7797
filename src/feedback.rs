//! Presentation adapter contract
//!
//! The round controller pushes plain-data snapshots through `Presenter`;
//! nothing is ever read back. Rendering, labels, haptic generators and the
//! flash animation all live on the host side of this trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FLASH_ALPHA, FLASH_FADE_SECS};
use crate::palette::Rgba;
use crate::settings::FeedbackSettings;
use crate::sim::state::EndReason;
use crate::sim::steering::DirectionalCue;

/// Impact cue strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Sampled jitter tick
    Light,
    /// Chaos escalation
    Medium,
    /// Round over
    Heavy,
}

/// Per-tick view of a running round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameUpdate {
    pub orb_position: Vec2,
    /// `None` hides the chevron
    pub cue: Option<DirectionalCue>,
    pub score: u64,
}

impl FrameUpdate {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Sent when a round (re)starts; the host resets labels and glow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundStart {
    pub orb_position: Vec2,
    pub glow: Rgba,
}

/// Final numbers of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub reason: EndReason,
    pub score: u64,
    /// Escalations reached
    pub tier: u32,
    pub survived_secs: f32,
}

impl RoundSummary {
    pub fn status_text(&self) -> &'static str {
        self.reason.status_text()
    }

    pub fn score_text(&self) -> String {
        format!("Score: {} • Tap to restart", self.score)
    }
}

/// Full-field white flash that fades out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub alpha: f32,
    pub fade_secs: f32,
}

impl Default for Flash {
    fn default() -> Self {
        Self {
            alpha: FLASH_ALPHA,
            fade_secs: FLASH_FADE_SECS,
        }
    }
}

/// Host-side sink for everything the simulation wants shown or felt.
///
/// All methods default to no-ops so a host implements only what it renders.
pub trait Presenter {
    fn round_started(&mut self, _start: RoundStart) {}
    fn frame(&mut self, _update: FrameUpdate) {}
    fn chaos_advanced(&mut self, _tier: u32, _glow: Rgba) {}
    fn impact(&mut self, _intensity: Intensity) {}
    fn flash(&mut self, _flash: Flash) {}
    fn round_ended(&mut self, _summary: RoundSummary) {}
}

/// Headless
impl Presenter for () {}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn round_started(&mut self, start: RoundStart) {
        (**self).round_started(start)
    }
    fn frame(&mut self, update: FrameUpdate) {
        (**self).frame(update)
    }
    fn chaos_advanced(&mut self, tier: u32, glow: Rgba) {
        (**self).chaos_advanced(tier, glow)
    }
    fn impact(&mut self, intensity: Intensity) {
        (**self).impact(intensity)
    }
    fn flash(&mut self, flash: Flash) {
        (**self).flash(flash)
    }
    fn round_ended(&mut self, summary: RoundSummary) {
        (**self).round_ended(summary)
    }
}

/// Filters cues and flash through the player's `FeedbackSettings`
pub struct GatedPresenter<P> {
    inner: P,
    settings: FeedbackSettings,
}

impl<P: Presenter> GatedPresenter<P> {
    pub fn new(inner: P, settings: FeedbackSettings) -> Self {
        Self { inner, settings }
    }

    pub fn settings_mut(&mut self) -> &mut FeedbackSettings {
        &mut self.settings
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Presenter> Presenter for GatedPresenter<P> {
    fn round_started(&mut self, start: RoundStart) {
        self.inner.round_started(start)
    }
    fn frame(&mut self, update: FrameUpdate) {
        self.inner.frame(update)
    }
    fn chaos_advanced(&mut self, tier: u32, glow: Rgba) {
        self.inner.chaos_advanced(tier, glow)
    }
    fn impact(&mut self, intensity: Intensity) {
        if self.settings.allows(intensity) {
            self.inner.impact(intensity)
        }
    }
    fn flash(&mut self, flash: Flash) {
        if self.settings.effective_flash() {
            self.inner.flash(flash)
        }
    }
    fn round_ended(&mut self, summary: RoundSummary) {
        self.inner.round_ended(summary)
    }
}

/// Writes the feedback stream to the `log` facade
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
    impacts: u64,
    last_summary: Option<RoundSummary>,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }

    pub fn impacts(&self) -> u64 {
        self.impacts
    }
}

impl Presenter for LogPresenter {
    fn round_started(&mut self, start: RoundStart) {
        self.frames = 0;
        log::info!(
            "Round started, orb at ({:.0}, {:.0}), glow {}",
            start.orb_position.x,
            start.orb_position.y,
            start.glow.to_hex()
        );
    }

    fn frame(&mut self, update: FrameUpdate) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::debug!(
                "{} | orb ({:.1}, {:.1}) | cue {}",
                update.score_text(),
                update.orb_position.x,
                update.orb_position.y,
                update.cue.map_or("hidden".to_string(), |c| format!("{:.2}", c.opacity))
            );
        }
    }

    fn chaos_advanced(&mut self, tier: u32, glow: Rgba) {
        log::info!("Chaos tier {} (glow {})", tier, glow.to_hex());
    }

    fn impact(&mut self, intensity: Intensity) {
        self.impacts += 1;
        log::trace!("Impact: {:?}", intensity);
    }

    fn flash(&mut self, flash: Flash) {
        log::debug!("Flash alpha {} over {}s", flash.alpha, flash.fade_secs);
    }

    fn round_ended(&mut self, summary: RoundSummary) {
        log::info!(
            "{} {} (tier {}, {:.1}s)",
            summary.status_text(),
            summary.score_text(),
            summary.tier,
            summary.survived_secs
        );
        self.last_summary = Some(summary);
    }
}
