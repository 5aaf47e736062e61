//! Fundamental geometric and simulation types.
//!
//! World space is Y-up with +Z as the forward axis, matching the
//! convention used by look rotations throughout the workspace.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position + orientation of an entity in world space (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Forward (+Z) direction of this pose.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Heading about the up axis in degrees (0 = +Z, clockwise seen from above is positive X).
    pub fn yaw_degrees(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z).to_degrees()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Drop the vertical component of a vector.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Squared distance between two points on the ground plane (ignores height).
pub fn planar_distance_sq(a: Vec3, b: Vec3) -> f32 {
    horizontal(b - a).length_squared()
}

/// Rotation whose +Z axis points along `direction`, keeping world up fixed.
///
/// Only the horizontal part of `direction` is used; callers are expected to
/// reject near-zero inputs before asking for a facing.
pub fn look_rotation(direction: Vec3) -> Quat {
    Quat::from_rotation_y(direction.x.atan2(direction.z))
}
