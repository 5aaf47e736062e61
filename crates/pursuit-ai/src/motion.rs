//! Presentation outputs derived from navigator motion.

use glam::{Quat, Vec3};

use pursuit_core::constants::{BLEND_MIN_MAX_SPEED, FACING_MIN_SPEED_SQ};
use pursuit_core::types::{horizontal, look_rotation};

/// Normalized locomotion intensity in [0, 1], independent of absolute speed.
pub fn locomotion_blend(velocity: Vec3, max_speed: f32) -> f32 {
    if max_speed > BLEND_MIN_MAX_SPEED {
        (velocity.length() / max_speed).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Rotate `from` toward `to` by at most `max_degrees`, never overshooting.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= f32::EPSILON {
        return to;
    }
    let step = max_degrees.max(0.0).to_radians();
    if step >= angle {
        to
    } else {
        from.slerp(to, step / angle)
    }
}

/// Next facing for an agent moving with `velocity`.
///
/// Only the horizontal part of the velocity counts. Near rest the current
/// orientation is returned unchanged.
pub fn face_velocity(orientation: Quat, velocity: Vec3, rotate_speed_deg_per_sec: f32, dt: f32) -> Quat {
    let planar = horizontal(velocity);
    if planar.length_squared() <= FACING_MIN_SPEED_SQ {
        return orientation;
    }
    let target = look_rotation(planar.normalize());
    rotate_towards(orientation, target, rotate_speed_deg_per_sec * dt)
}
