//! Small geometry helpers shared by the movement and facing systems.

use glam::Vec2;

use crate::constants::SPRITE_ANGLE_OFFSET;

/// Move `from` toward `to` by at most `max_step`, never overshooting.
/// Snaps exactly onto `to` once the remaining distance fits in one step.
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist <= f32::EPSILON {
        to
    } else {
        from + delta / dist * max_step
    }
}

/// Facing angle (radians) for an entity at `from` looking at `to`.
///
/// The raw bearing is the arctangent of the delta; the sprite art points up,
/// so the result is shifted by the fixed sprite offset.
pub fn facing_angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x) + SPRITE_ANGLE_OFFSET
}
