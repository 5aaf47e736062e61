//! Commands sent from a driver (CLI, test harness) to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::AgentConfig;

/// All possible driver actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Player input ---
    /// Set the movement axes (each nominally in [-1, 1]).
    SetMoveInput { horizontal: f32, vertical: f32 },
    /// Set the camera yaw (degrees) that movement input is relative to.
    SetCameraYaw { degrees: f32 },

    // --- Agent tuning ---
    /// Replace every agent's configuration. Values are clamped, never rejected.
    ConfigureAgents { config: AgentConfig },

    // --- Simulation control ---
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
