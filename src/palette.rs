//! Chaos tier glow colours
//!
//! The glow around the orb steps through a fixed cycle, one colour per
//! escalation, wrapping after the last.

use serde::{Deserialize, Serialize};

/// Linear RGBA, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `#rrggbb`, alpha ignored
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

pub const CYAN: Rgba = Rgba::rgb(0.0, 1.0, 1.0);
pub const TEAL: Rgba = Rgba::rgb(0.188, 0.690, 0.780);
pub const YELLOW: Rgba = Rgba::rgb(1.0, 0.800, 0.0);
pub const ORANGE: Rgba = Rgba::rgb(1.0, 0.584, 0.0);
pub const RED: Rgba = Rgba::rgb(1.0, 0.231, 0.188);
pub const PURPLE: Rgba = Rgba::rgb(0.686, 0.322, 0.871);

pub const CHAOS_COLORS: [Rgba; 6] = [CYAN, TEAL, YELLOW, ORANGE, RED, PURPLE];

/// Glow colour for a chaos tier (0 = round start)
#[inline]
pub fn chaos_color(tier: u32) -> Rgba {
    CHAOS_COLORS[tier as usize % CHAOS_COLORS.len()]
}
