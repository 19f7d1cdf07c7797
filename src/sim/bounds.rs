//! Field edge test

use glam::Vec2;

use crate::tuning::Field;

/// True when the orb centre has left `[radius, side - radius]` on either axis
pub fn orb_escaped(pos: Vec2, radius: f32, field: &Field) -> bool {
    pos.x < radius
        || pos.x > field.width - radius
        || pos.y < radius
        || pos.y > field.height - radius
}
