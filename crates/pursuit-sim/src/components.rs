//! ECS components for hecs entities.
//!
//! Position and orientation live in `pursuit_core::types::Pose`, attached
//! directly as a component.

use pursuit_ai::AgentController;
use pursuit_core::enums::ContactTag;

use crate::animator::BlendAnimator;
use crate::navigator::KinematicNavigator;

/// The player character driven by movement input.
#[derive(Debug, Clone)]
pub struct Player {
    /// Walking speed (m/s).
    pub speed: f32,
    /// Blend from the latest input magnitude.
    pub blend: f32,
}

/// A controlled agent with its navigation and animation collaborators.
#[derive(Debug, Clone)]
pub struct Agent {
    pub controller: AgentController,
    /// `None` leaves the agent idle.
    pub navigator: Option<KinematicNavigator>,
    pub animator: BlendAnimator,
}

/// A spinning pickup that counts toward the gold total.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub spin_deg_per_sec: f32,
    /// Accumulated spin, wrapped to [0, 360).
    pub spin_degrees: f32,
}

/// Spherical trigger volume with the tag other triggers see.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub radius: f32,
    pub tag: ContactTag,
}
