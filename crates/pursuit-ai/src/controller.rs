//! Per-tick agent driver.
//!
//! `AgentController` owns everything an agent decides for itself: perception
//! state, wander plan, hit latch and facing. Position belongs to the
//! navigator and is read back each tick; the controller never waits on it.

use glam::{Quat, Vec3};
use rand::Rng;

use pursuit_core::config::AgentConfig;
use pursuit_core::enums::{AgentMode, ContactTag};
use pursuit_core::events::AgentEvent;
use pursuit_core::nav::{Navigator, PresentationSink, SurfaceSampler, TargetProvider};
use pursuit_core::types::{planar_distance_sq, Pose};

use crate::arrival::NavStatus;
use crate::motion::{face_velocity, locomotion_blend};
use crate::perception::{PerceptionState, Transition};
use crate::wander::{WanderPlanner, WanderRefresh};

/// Per-tick inputs that are not collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute simulation time (s).
    pub now: f64,
    /// Time since the previous tick (s).
    pub dt: f32,
    /// Where the tracked entity is, if there is one.
    pub target: Option<Vec3>,
}

impl TickInput {
    pub fn new(now: f64, dt: f32) -> Self {
        Self {
            now,
            dt,
            target: None,
        }
    }

    pub fn with_target(mut self, provider: &dyn TargetProvider) -> Self {
        self.target = provider.current_position();
        self
    }
}

/// What the controller decided this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub mode: AgentMode,
    /// Raw blend sent to the presentation sink.
    pub blend: f32,
    pub is_chasing: bool,
}

/// Chase/wander decision loop for one agent.
#[derive(Debug, Clone)]
pub struct AgentController {
    name: String,
    config: AgentConfig,
    perception: PerceptionState,
    wander: WanderPlanner,
    spawn_position: Vec3,
    orientation: Quat,
    has_registered_hit: bool,
    mode: AgentMode,
}

impl AgentController {
    /// Create a controller for an agent spawned at `spawn`. The config is validated.
    pub fn new(name: impl Into<String>, config: AgentConfig, spawn: Pose) -> Self {
        let config = config.validated();
        let wander = WanderPlanner::new(
            config.patrol_radius,
            config.patrol_wait_min,
            config.patrol_wait_max,
        );
        Self {
            name: name.into(),
            config,
            perception: PerceptionState::default(),
            wander,
            spawn_position: spawn.position,
            orientation: spawn.rotation,
            has_registered_hit: false,
            mode: AgentMode::default(),
        }
    }

    /// Attach a navigator: mirrors the stop range into its stopping distance.
    pub fn bind(&self, nav: &mut dyn Navigator) {
        nav.set_stopping_distance(self.config.stop_range);
    }

    /// Replace the configuration. Invalid values are clamped, not rejected.
    pub fn apply_config(&mut self, config: AgentConfig, nav: Option<&mut dyn Navigator>) {
        self.config = config.validated();
        self.wander.set_parameters(
            self.config.patrol_radius,
            self.config.patrol_wait_min,
            self.config.patrol_wait_max,
        );
        if let Some(nav) = nav {
            self.bind(nav);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }

    /// Explicit wander center if configured, otherwise the spawn position.
    pub fn wander_center(&self) -> Vec3 {
        self.config.wander_center.unwrap_or(self.spawn_position)
    }

    pub fn wander(&self) -> &WanderPlanner {
        &self.wander
    }

    pub fn is_chasing(&self) -> bool {
        self.perception.is_chasing()
    }

    pub fn has_registered_hit(&self) -> bool {
        self.has_registered_hit
    }

    /// Mode decided on the most recent tick.
    pub fn mode(&self) -> AgentMode {
        self.mode
    }

    /// Run one decision step.
    ///
    /// Without a navigator the agent idles with a zero blend. Without a target
    /// it wanders. Otherwise perception picks between chasing and wandering.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        input: &TickInput,
        nav: Option<&mut dyn Navigator>,
        sampler: &dyn SurfaceSampler,
        sink: &mut dyn PresentationSink,
        rng: &mut R,
        events: &mut Vec<AgentEvent>,
    ) -> TickReport {
        let Some(nav) = nav else {
            sink.set_blend(0.0, self.config.blend_damp_time, input.dt);
            self.mode = AgentMode::Idle;
            return TickReport {
                mode: self.mode,
                blend: 0.0,
                is_chasing: self.perception.is_chasing(),
            };
        };

        self.mode = match input.target {
            None => {
                self.wander_step(input.now, nav, sampler, rng, events);
                AgentMode::Wandering
            }
            Some(target) => self.pursue(input.now, target, nav, sampler, rng, events),
        };

        let velocity = nav.velocity();
        let blend = locomotion_blend(velocity, nav.max_speed());
        sink.set_blend(blend, self.config.blend_damp_time, input.dt);

        if self.config.manual_rotate {
            self.orientation = face_velocity(
                self.orientation,
                velocity,
                self.config.rotate_speed_deg_per_sec,
                input.dt,
            );
        }

        TickReport {
            mode: self.mode,
            blend,
            is_chasing: self.perception.is_chasing(),
        }
    }

    /// Handle a trigger overlap. Returns true when this contact latched the hit.
    pub fn on_contact(&mut self, tag: &ContactTag, events: &mut Vec<AgentEvent>) -> bool {
        match tag {
            ContactTag::Player if !self.has_registered_hit => {
                self.has_registered_hit = true;
                tracing::info!(agent = %self.name, "hit player");
                events.push(AgentEvent::HitRegistered {
                    agent: self.name.clone(),
                });
                true
            }
            ContactTag::Player => false,
            // Gold is observed but deliberately never latches.
            other => {
                tracing::debug!(agent = %self.name, tag = %other, "contact");
                events.push(AgentEvent::ContactObserved {
                    agent: self.name.clone(),
                    tag: other.clone(),
                });
                false
            }
        }
    }

    fn pursue<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        target: Vec3,
        nav: &mut dyn Navigator,
        sampler: &dyn SurfaceSampler,
        rng: &mut R,
        events: &mut Vec<AgentEvent>,
    ) -> AgentMode {
        let distance_sq = planar_distance_sq(nav.position(), target);
        match self.perception.update(
            distance_sq,
            self.config.detection_range,
            self.config.lost_range,
        ) {
            Transition::Acquired => {
                tracing::debug!(agent = %self.name, distance = distance_sq.sqrt(), "target acquired");
                events.push(AgentEvent::ChaseStarted {
                    agent: self.name.clone(),
                });
            }
            Transition::Lost => {
                tracing::debug!(agent = %self.name, distance = distance_sq.sqrt(), "target lost");
                events.push(AgentEvent::ChaseLost {
                    agent: self.name.clone(),
                });
                // Replace the stale chase destination on this very tick.
                self.wander.invalidate();
            }
            Transition::None => {}
        }

        if !self.perception.is_chasing() {
            self.wander_step(now, nav, sampler, rng, events);
            return AgentMode::Wandering;
        }

        if self.has_registered_hit {
            if !nav.is_path_pending() && nav.has_active_path() {
                nav.reset_path();
            }
            return AgentMode::Frozen;
        }

        let stop_sq = self.config.stop_range * self.config.stop_range;
        if distance_sq > stop_sq {
            nav.set_destination(target);
            AgentMode::Chasing
        } else {
            nav.reset_path();
            AgentMode::Holding
        }
    }

    fn wander_step<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        nav: &mut dyn Navigator,
        sampler: &dyn SurfaceSampler,
        rng: &mut R,
        events: &mut Vec<AgentEvent>,
    ) {
        let center = self.wander_center();
        let status = NavStatus::capture(nav);
        match self.wander.maybe_refresh(now, center, &status, sampler, rng) {
            WanderRefresh::NewGoal(goal) => {
                tracing::debug!(agent = %self.name, ?goal, "wander goal selected");
                nav.set_destination(goal);
                events.push(AgentEvent::WanderGoalSelected {
                    agent: self.name.clone(),
                    goal,
                });
            }
            WanderRefresh::SampleFailed { fallback } => {
                tracing::debug!(agent = %self.name, center = ?fallback, "no navigable wander point found");
                events.push(AgentEvent::WanderSampleFailed {
                    agent: self.name.clone(),
                    center: fallback,
                });
            }
            WanderRefresh::Unchanged => {}
        }
    }
}
