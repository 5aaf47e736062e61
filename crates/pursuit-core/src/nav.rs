//! Collaborator interfaces consumed and produced by the agent controller.
//!
//! The controller never blocks on any of these: path computation may stay
//! pending across ticks and is simply polled again next tick.

use glam::Vec3;

/// Path-following service bound to one agent.
pub trait Navigator {
    /// Request a path to `point`. Returns false when the request was refused
    /// (e.g. the point is nowhere near the navigable surface).
    fn set_destination(&mut self, point: Vec3) -> bool;
    /// Drop the current path and stop issuing steering.
    fn reset_path(&mut self);
    /// A path request is still being computed.
    fn is_path_pending(&self) -> bool;
    /// A path is currently being followed.
    fn has_active_path(&self) -> bool;
    /// Distance left along the current path (m). Zero with no path.
    fn remaining_distance(&self) -> f32;
    /// Current velocity (m/s).
    fn velocity(&self) -> Vec3;
    /// Configured top speed (m/s).
    fn max_speed(&self) -> f32;
    fn stopping_distance(&self) -> f32;
    fn set_stopping_distance(&mut self, distance: f32);
    /// Current position of the agent being moved.
    fn position(&self) -> Vec3;
}

/// Point-on-navigable-surface queries.
pub trait SurfaceSampler {
    /// Nearest navigable point within `max_distance` of `near`, if any.
    fn sample(&self, near: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// Source of the tracked entity's position.
pub trait TargetProvider {
    fn current_position(&self) -> Option<Vec3>;
}

impl TargetProvider for Option<Vec3> {
    fn current_position(&self) -> Option<Vec3> {
        *self
    }
}

/// Receiver for the locomotion blend value.
pub trait PresentationSink {
    /// Drive the blend toward `value` (in [0, 1]) with time constant `damp_time`.
    fn set_blend(&mut self, value: f32, damp_time: f32, dt: f32);
}
