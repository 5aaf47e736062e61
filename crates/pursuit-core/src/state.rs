//! Simulation state snapshot: the complete visible state produced each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AgentEvent;
use crate::types::SimTime;

/// Complete world state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Option<PlayerView>,
    pub agents: Vec<AgentView>,
    pub collectibles: Vec<CollectibleView>,
    pub gold_count: u32,
    /// Text of the counter display.
    pub hud_label: String,
    pub events: Vec<AgentEvent>,
    /// Debug wire shapes; empty unless the overlay is enabled.
    pub overlay: Vec<DebugSphere>,
}

/// The player character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Heading in degrees (0 = +Z).
    pub yaw_degrees: f32,
    /// Locomotion blend derived from input magnitude.
    pub blend: f32,
}

/// One controlled agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub name: String,
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub velocity: Vec3,
    pub mode: AgentMode,
    pub is_chasing: bool,
    pub has_registered_hit: bool,
    /// Smoothed locomotion blend as seen by the animation layer.
    pub blend: f32,
    pub wander_goal: Option<Vec3>,
}

/// A collectible still present in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleView {
    pub position: Vec3,
    /// Spin angle about the forward axis in degrees, wrapped to [0, 360).
    pub spin_degrees: f32,
}

/// Color of a diagnostic wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayColor {
    Yellow,
    Red,
    Gray,
}

/// A wire sphere drawn by the diagnostic overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugSphere {
    pub center: Vec3,
    pub radius: f32,
    pub color: OverlayColor,
}
