//! Reference path follower.
//!
//! Paths are straight lines over a `NavSurface`. A new request stays pending
//! for a few ticks before it resolves, so callers see the same
//! pending-then-active status sequence a real path planner produces.

use glam::Vec3;

use pursuit_core::constants::*;
use pursuit_core::nav::Navigator;

use crate::navmesh::NavSurface;

/// How far a requested destination may be snapped onto the surface (m).
const DESTINATION_SNAP_DISTANCE: f32 = 4.0;

/// Kinematic navigation agent with bounded acceleration.
#[derive(Debug, Clone)]
pub struct KinematicNavigator {
    position: Vec3,
    velocity: Vec3,
    speed: f32,
    acceleration: f32,
    stopping_distance: f32,
    latency_ticks: u32,
    pending_ticks: u32,
    request: Option<Vec3>,
    destination: Option<Vec3>,
}

impl KinematicNavigator {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            speed: NAV_DEFAULT_SPEED,
            acceleration: NAV_DEFAULT_ACCELERATION,
            stopping_distance: 0.0,
            latency_ticks: NAV_PATH_LATENCY_TICKS,
            pending_ticks: 0,
            request: None,
            destination: None,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration.max(0.0);
        self
    }

    pub fn with_latency(mut self, ticks: u32) -> Self {
        self.latency_ticks = ticks;
        self
    }

    /// Resolved destination of the active path.
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Advance one tick: resolve pending requests, then steer and move.
    ///
    /// Paths are straight lines with no detours. A step that would leave the
    /// surface (for example into a hole between the agent and its goal)
    /// zeroes the velocity but keeps the path, so the agent waits at the edge
    /// until it is given a different destination.
    pub fn step(&mut self, dt: f32, surface: &NavSurface) {
        if self.pending_ticks > 0 {
            self.pending_ticks -= 1;
        }
        if self.pending_ticks == 0 {
            if let Some(request) = self.request.take() {
                self.destination = surface
                    .nearest_point(request)
                    .filter(|p| p.distance(request) <= DESTINATION_SNAP_DISTANCE);
                if self.destination.is_none() {
                    tracing::debug!(?request, "destination off the navigable surface");
                }
            }
        }

        let desired = match self.destination {
            Some(goal) => {
                let to_goal = goal - self.position;
                let remaining = to_goal.length();
                if remaining <= NAV_PATH_END_EPSILON {
                    self.position = goal;
                    self.velocity = Vec3::ZERO;
                    self.destination = None;
                    return;
                }
                let slack = (remaining - self.stopping_distance).max(0.0);
                // Brake so the agent can come to rest at the stopping distance.
                let cruise = self.speed.min((2.0 * self.acceleration * slack).sqrt());
                to_goal / remaining * cruise
            }
            None => Vec3::ZERO,
        };

        let delta = desired - self.velocity;
        let max_change = self.acceleration * dt;
        self.velocity += if delta.length() > max_change {
            delta.normalize() * max_change
        } else {
            delta
        };

        let mut next = self.position + self.velocity * dt;
        if let Some(goal) = self.destination {
            // Never step past the goal.
            if (goal - self.position).dot(goal - next) < 0.0 {
                next = goal;
            }
        }
        if surface.contains(next) {
            self.position = Vec3::new(next.x, surface.height, next.z);
        } else {
            self.velocity = Vec3::ZERO;
        }
    }
}

impl Navigator for KinematicNavigator {
    fn set_destination(&mut self, point: Vec3) -> bool {
        if !point.is_finite() {
            return false;
        }
        // Re-targeting an active path is immediate; a fresh path takes a while
        // and repeated requests do not restart the countdown.
        self.pending_ticks = if self.destination.is_some() {
            0
        } else if self.request.is_some() {
            self.pending_ticks
        } else {
            self.latency_ticks
        };
        self.request = Some(point);
        true
    }

    fn reset_path(&mut self) {
        self.request = None;
        self.pending_ticks = 0;
        self.destination = None;
    }

    fn is_path_pending(&self) -> bool {
        self.request.is_some()
    }

    fn has_active_path(&self) -> bool {
        self.destination.is_some()
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map_or(0.0, |goal| goal.distance(self.position))
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn max_speed(&self) -> f32 {
        self.speed
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn set_stopping_distance(&mut self, distance: f32) {
        self.stopping_distance = distance.max(0.0);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
