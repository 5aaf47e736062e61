//! Events emitted by agents and the simulation for observability.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ContactTag;

/// Notable agent and world transitions, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentEvent {
    /// Target came within detection range.
    ChaseStarted { agent: String },
    /// Target left the lost range.
    ChaseLost { agent: String },
    /// A new reachable wander point was chosen.
    WanderGoalSelected { agent: String, goal: Vec3 },
    /// Every sampling attempt around the center failed.
    WanderSampleFailed { agent: String, center: Vec3 },
    /// First contact with the player. Emitted at most once per agent.
    HitRegistered { agent: String },
    /// Any contact that did not latch a hit.
    ContactObserved { agent: String, tag: ContactTag },
    /// The player picked up a collectible.
    GoldCollected { total: u32 },
}
