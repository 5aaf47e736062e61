//! Arrival detection from polled navigator status.

use glam::Vec3;

use pursuit_core::constants::{ARRIVAL_MAX_SPEED_SQ, ARRIVAL_MIN_DISTANCE};
use pursuit_core::nav::Navigator;

/// Navigator status read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavStatus {
    pub path_pending: bool,
    pub has_path: bool,
    pub remaining_distance: f32,
    pub stopping_distance: f32,
    pub velocity: Vec3,
    pub max_speed: f32,
}

impl NavStatus {
    pub fn capture(nav: &dyn Navigator) -> Self {
        Self {
            path_pending: nav.is_path_pending(),
            has_path: nav.has_active_path(),
            remaining_distance: nav.remaining_distance(),
            stopping_distance: nav.stopping_distance(),
            velocity: nav.velocity(),
            max_speed: nav.max_speed(),
        }
    }

    /// True only when no path is being computed, the goal is within the
    /// stopping tolerance, and the agent is either pathless or settled.
    pub fn has_arrived(&self) -> bool {
        if self.path_pending {
            return false;
        }
        if self.remaining_distance > self.stopping_distance.max(ARRIVAL_MIN_DISTANCE) {
            return false;
        }
        if self.has_path && self.velocity.length_squared() > ARRIVAL_MAX_SPEED_SQ {
            return false;
        }
        true
    }
}
