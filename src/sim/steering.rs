//! Pointer steering
//!
//! The pointer pushes the orb away from itself. The push grows with the
//! square of the pointer distance and saturates at `max_push` once the
//! pointer is `hold_radius` away. Inside the dead-zone nothing happens.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading;
use crate::tuning::Tuning;

/// Chevron drawn on the far side of the orb, pointing along the push
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalCue {
    pub position: Vec2,
    /// Radians, chevron's local +y along the push direction
    pub rotation: f32,
    pub opacity: f32,
}

/// Result of applying the pointer to the orb for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Added to the orb position
    pub displacement: Vec2,
    pub push: f32,
    /// `None` while the pointer sits in the dead-zone
    pub cue: Option<DirectionalCue>,
}

impl Steering {
    pub const NONE: Steering = Steering {
        displacement: Vec2::ZERO,
        push: 0.0,
        cue: None,
    };
}

/// Fraction of the pointer offset applied at `dist`, capped at `max_push`
#[inline]
pub fn push_factor(dist: f32, tuning: &Tuning) -> f32 {
    let ratio = dist / tuning.hold_radius;
    (ratio * ratio * tuning.max_push).min(tuning.max_push)
}

/// Steering contribution of a pointer at `touch` on an orb at `orb`
pub fn steer(orb: Vec2, touch: Vec2, tuning: &Tuning) -> Steering {
    let d = touch - orb;
    let dist = d.length();
    if dist <= tuning.dead_zone {
        return Steering::NONE;
    }

    let push = push_factor(dist, tuning);
    let displacement = -d * push;

    // Cue hugs the orb after the move, on the side away from the finger
    let moved = orb + displacement;
    let u = d / dist;
    let cue = DirectionalCue {
        position: moved - u * (tuning.orb_radius + tuning.cue_gap),
        rotation: heading(-d) + std::f32::consts::FRAC_PI_2,
        opacity: (push * tuning.cue_opacity_gain).min(tuning.cue_max_opacity),
    };

    Steering {
        displacement,
        push,
        cue: Some(cue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_zone() {
        let tuning = Tuning::default();
        let orb = Vec2::new(100.0, 100.0);
        assert_eq!(steer(orb, orb, &tuning), Steering::NONE);
        assert_eq!(steer(orb, orb + Vec2::new(12.0, 16.0), &tuning), Steering::NONE);
        assert!(steer(orb, orb + Vec2::new(21.0, 0.0), &tuning).cue.is_some());
    }

    #[test]
    fn test_push_saturates() {
        let tuning = Tuning::default();
        assert_eq!(push_factor(tuning.hold_radius, &tuning), tuning.max_push);
        assert_eq!(push_factor(tuning.hold_radius * 3.0, &tuning), tuning.max_push);
        let half = push_factor(tuning.hold_radius / 2.0, &tuning);
        assert!((half - tuning.max_push / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_pushes_away_from_pointer() {
        let tuning = Tuning::default();
        let orb = Vec2::new(200.0, 200.0);
        let touch = Vec2::new(320.0, 200.0);
        let s = steer(orb, touch, &tuning);
        assert!((s.displacement.x - (-120.0 * tuning.max_push)).abs() < 1e-4);
        assert!(s.displacement.y.abs() < 1e-6);

        let cue = s.cue.unwrap();
        // Left of the moved orb, fully faded in
        let moved_x = orb.x + s.displacement.x;
        assert!((cue.position.x - (moved_x - 64.0)).abs() < 1e-4);
        assert!((cue.position.y - 200.0).abs() < 1e-4);
        assert_eq!(cue.opacity, tuning.cue_max_opacity);
    }

    #[test]
    fn test_cue_fades_in() {
        let tuning = Tuning::default();
        let s = steer(Vec2::ZERO, Vec2::new(0.0, 24.0), &tuning);
        let cue = s.cue.unwrap();
        assert!(cue.opacity < tuning.cue_max_opacity);
        assert!((cue.opacity - s.push * tuning.cue_opacity_gain).abs() < 1e-6);
    }
}
