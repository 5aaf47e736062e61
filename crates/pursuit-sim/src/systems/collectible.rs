//! Collectible spin.

use glam::Quat;
use hecs::World;

use pursuit_core::types::Pose;

use crate::components::Collectible;

/// Spin every collectible about its forward axis.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (item, pose)) in world.query_mut::<(&mut Collectible, &mut Pose)>() {
        let step = item.spin_deg_per_sec * dt;
        item.spin_degrees = (item.spin_degrees + step).rem_euclid(360.0);
        pose.rotation = (pose.rotation * Quat::from_rotation_z(step.to_radians())).normalize();
    }
}
