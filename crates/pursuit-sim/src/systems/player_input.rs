//! Camera-relative player movement.

use glam::{Quat, Vec3};
use hecs::World;

use pursuit_core::types::{look_rotation, Pose};

use crate::components::Player;

/// Latest movement axes and camera heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub horizontal: f32,
    pub vertical: f32,
    pub camera_yaw_degrees: f32,
}

impl InputState {
    /// Input magnitude in [0, 1]; doubles as the player's locomotion blend.
    pub fn move_amount(&self) -> f32 {
        (self.horizontal.abs() + self.vertical.abs()).clamp(0.0, 1.0)
    }

    /// World-space movement direction (unit length, or zero without input).
    pub fn move_direction(&self) -> Vec3 {
        let local = Vec3::new(self.horizontal, 0.0, self.vertical).normalize_or_zero();
        Quat::from_rotation_y(self.camera_yaw_degrees.to_radians()) * local
    }
}

/// Move and turn every player from the current input.
pub fn run(world: &mut World, input: &InputState, dt: f32) {
    let amount = input.move_amount();
    let direction = input.move_direction();

    for (_entity, (player, pose)) in world.query_mut::<(&mut Player, &mut Pose)>() {
        if amount > 0.0 && direction != Vec3::ZERO {
            pose.position += direction * dt * player.speed;
            pose.rotation = look_rotation(direction);
        }
        player.blend = amount;
    }
}
