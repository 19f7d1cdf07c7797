//! Feedback preferences
//!
//! Owned by the host and handed to `GatedPresenter`; the core never stores them.

use serde::{Deserialize, Serialize};

use crate::feedback::Intensity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackSettings {
    /// Master switch for impact cues
    pub haptics: bool,
    /// Light cues fire several times a second late in a round
    pub light_cues: bool,
    /// Full-field flash at round end
    pub flash: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses the flash)
    pub reduced_motion: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            haptics: true,
            light_cues: true,
            flash: true,
            reduced_motion: false,
        }
    }
}

impl FeedbackSettings {
    /// Effective flash (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        self.flash && !self.reduced_motion
    }

    /// Whether a cue of this intensity should reach the device
    pub fn allows(&self, intensity: Intensity) -> bool {
        match intensity {
            Intensity::Light => self.haptics && self.light_cues,
            Intensity::Medium | Intensity::Heavy => self.haptics,
        }
    }
}
