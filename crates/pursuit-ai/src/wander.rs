//! Periodic wander-point selection around a center.
//!
//! Candidates are drawn uniformly from a sphere and snapped onto the
//! navigable surface. A bounded retry budget keeps a surface with holes or
//! ragged edges from stalling the tick.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use pursuit_core::constants::{SURFACE_SAMPLE_TOLERANCE, WANDER_SAMPLE_ATTEMPTS};
use pursuit_core::nav::SurfaceSampler;

use crate::arrival::NavStatus;

/// Result of a [`WanderPlanner::maybe_refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderRefresh {
    /// Not due; keep following the current goal.
    Unchanged,
    /// A new reachable goal was sampled.
    NewGoal(Vec3),
    /// Every attempt failed; the goal fell back to the center and stays unset.
    SampleFailed { fallback: Vec3 },
}

/// Wander plan state plus the parameters it is refreshed with.
#[derive(Debug, Clone, PartialEq)]
pub struct WanderPlanner {
    current_goal: Option<Vec3>,
    has_goal: bool,
    next_refresh_time: f64,
    radius: f32,
    wait_min: f32,
    wait_max: f32,
}

impl WanderPlanner {
    /// A planner with no goal; the first call to `maybe_refresh` samples one.
    pub fn new(radius: f32, wait_min: f32, wait_max: f32) -> Self {
        Self {
            current_goal: None,
            has_goal: false,
            next_refresh_time: 0.0,
            radius,
            wait_min,
            wait_max: wait_max.max(wait_min),
        }
    }

    pub fn set_parameters(&mut self, radius: f32, wait_min: f32, wait_max: f32) {
        self.radius = radius;
        self.wait_min = wait_min;
        self.wait_max = wait_max.max(wait_min);
    }

    /// Last goal handed out, or the center it fell back to.
    pub fn current_goal(&self) -> Option<Vec3> {
        self.current_goal
    }

    pub fn has_goal(&self) -> bool {
        self.has_goal
    }

    pub fn next_refresh_time(&self) -> f64 {
        self.next_refresh_time
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Make the next `maybe_refresh` pick a fresh goal regardless of timing.
    pub fn invalidate(&mut self) {
        self.has_goal = false;
    }

    /// Push the next refresh out by a random wait from `now`.
    pub fn schedule_next<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) {
        let wait = if self.wait_max > self.wait_min {
            rng.gen_range(self.wait_min..=self.wait_max)
        } else {
            self.wait_min
        };
        self.next_refresh_time = now + wait as f64;
    }

    /// Pick a new goal when the timer expired, no goal exists, or the agent arrived.
    pub fn maybe_refresh<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        center: Vec3,
        status: &NavStatus,
        sampler: &dyn SurfaceSampler,
        rng: &mut R,
    ) -> WanderRefresh {
        let due = now >= self.next_refresh_time || !self.has_goal || status.has_arrived();
        if !due {
            return WanderRefresh::Unchanged;
        }

        let result = match sample_reachable_point(center, self.radius, sampler, rng) {
            Some(goal) => {
                self.current_goal = Some(goal);
                self.has_goal = true;
                WanderRefresh::NewGoal(goal)
            }
            None => {
                self.current_goal = Some(center);
                self.has_goal = false;
                WanderRefresh::SampleFailed { fallback: center }
            }
        };
        self.schedule_next(now, rng);
        result
    }
}

/// Try up to [`WANDER_SAMPLE_ATTEMPTS`] random points within `radius` of
/// `center`, returning the first one the sampler accepts.
pub fn sample_reachable_point<R: Rng + ?Sized>(
    center: Vec3,
    radius: f32,
    sampler: &dyn SurfaceSampler,
    rng: &mut R,
) -> Option<Vec3> {
    (0..WANDER_SAMPLE_ATTEMPTS).find_map(|_| {
        let candidate = center + random_in_unit_sphere(rng) * radius;
        sampler.sample(candidate, SURFACE_SAMPLE_TOLERANCE)
    })
}

/// Uniformly distributed point inside the unit sphere.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    // Inverse-CDF sampling: cube-root radius, uniform azimuth and cos(polar).
    let r = rng.gen::<f32>().cbrt();
    let theta = rng.gen_range(0.0..TAU);
    let cos_phi = rng.gen_range(-1.0f32..=1.0);
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * cos_phi,
        r * sin_phi * theta.sin(),
    )
}
