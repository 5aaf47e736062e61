//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag carried by a trigger collider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactTag {
    /// The player character.
    Player,
    /// A gold collectible.
    Gold,
    /// Any other tagged object.
    Other(String),
}

impl ContactTag {
    /// Parse a tag name the way level data spells it.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Player" => ContactTag::Player,
            "Gold" => ContactTag::Gold,
            other => ContactTag::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContactTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactTag::Player => f.write_str("Player"),
            ContactTag::Gold => f.write_str("Gold"),
            ContactTag::Other(name) => f.write_str(name),
        }
    }
}

/// What an agent's controller did on its most recent tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentMode {
    /// No navigator bound; no motion logic runs.
    Idle,
    /// Moving between sampled wander points.
    #[default]
    Wandering,
    /// Pathing toward the target.
    Chasing,
    /// Target acquired and inside stop range; standing still.
    Holding,
    /// Target acquired after a registered hit; motion suppressed for good.
    Frozen,
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}

/// Predefined level layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// One open walkable square, one agent, a ring of gold.
    #[default]
    Courtyard,
    /// Walkable ground riddled with holes, two agents.
    BrokenGround,
    /// Long corridor with several agents spaced along it.
    Gauntlet,
}

impl ScenarioId {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "courtyard" => Some(ScenarioId::Courtyard),
            "broken-ground" => Some(ScenarioId::BrokenGround),
            "gauntlet" => Some(ScenarioId::Gauntlet),
            _ => None,
        }
    }
}
