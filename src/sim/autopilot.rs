//! Attract-mode pilot
//!
//! Picks a pointer position that nudges the orb back toward the field centre.
//! Used by the demo binary and to soak-test rounds.

use glam::Vec2;

use crate::tuning::Config;

/// Fraction of the centre offset the pilot tries to undo each tick
const RECOVERY: f32 = 0.2;

/// Where to hold the pointer for an orb at `orb`
pub fn aim(orb: Vec2, config: &Config) -> Vec2 {
    let tuning = &config.tuning;
    let offset = orb - config.field.center();
    let dist = offset.length();
    if dist < 1.0 {
        // Sit on the orb, inside the dead-zone
        return orb;
    }

    // Solve reach * push(reach) = correction on the quadratic part of the ramp
    let correction = dist * RECOVERY;
    let reach = (correction * tuning.hold_radius * tuning.hold_radius / tuning.max_push).cbrt();
    let reach = reach.clamp(tuning.dead_zone + 1.0, tuning.hold_radius);

    // Finger on the outer side pushes the orb inward
    orb + offset / dist * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::controller::RoundController;
    use crate::sim::state::RoundPhase;
    use crate::sim::steering::steer;

    #[test]
    fn test_aim_pushes_toward_center() {
        let config = Config::for_viewport(390.0, 844.0).unwrap();
        let center = config.field.center();
        for offset in [Vec2::new(60.0, 0.0), Vec2::new(-5.0, 30.0), Vec2::new(100.0, -100.0)] {
            let orb = center + offset;
            let s = steer(orb, aim(orb, &config), &config.tuning);
            let after = orb + s.displacement;
            assert!(after.distance(center) < offset.length(), "offset {offset:?}");
        }
    }

    #[test]
    fn test_aim_at_center_is_still() {
        let config = Config::for_viewport(390.0, 844.0).unwrap();
        let center = config.field.center();
        assert_eq!(aim(center, &config), center);
    }

    #[test]
    fn test_pilot_survives_ten_seconds() {
        let config = Config::for_viewport(390.0, 844.0).unwrap();
        let mut rc = RoundController::with_seed(config, 7);
        rc.on_pointer_down(rc.config().field.center(), &mut ());
        for _ in 0..600 {
            let target = aim(rc.state().orb_position, rc.config());
            rc.on_pointer_move(target);
            rc.tick(SIM_DT, &mut ());
        }
        assert_eq!(rc.phase(), RoundPhase::Running);
        assert_eq!(rc.state().tier(), 5);
        assert!(rc.state().orb_position.distance(rc.config().field.center()) < 60.0);
    }
}
