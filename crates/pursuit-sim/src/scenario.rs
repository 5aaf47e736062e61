//! Scenario definitions: hardcoded level layouts.
//!
//! Each scenario defines the navigable surface, where the player and agents
//! start, and where gold is placed.

use std::f32::consts::TAU;

use glam::Vec3;

use pursuit_core::config::AgentConfig;
use pursuit_core::enums::ScenarioId;

use crate::navmesh::{NavSurface, Region};

/// One agent to spawn.
#[derive(Debug, Clone)]
pub struct AgentSpawn {
    pub name: String,
    pub position: Vec3,
    pub config: AgentConfig,
    /// Spawn with a navigator attached.
    pub navigator: bool,
}

impl AgentSpawn {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            config: AgentConfig::default(),
            navigator: true,
        }
    }

    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn without_navigator(mut self) -> Self {
        self.navigator = false;
        self
    }
}

/// Everything needed to populate a world.
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub surface: NavSurface,
    pub player_spawn: Option<Vec3>,
    pub agents: Vec<AgentSpawn>,
    pub collectibles: Vec<Vec3>,
}

/// Build the layout for a given scenario.
pub fn build_scenario(id: ScenarioId) -> Scenario {
    match id {
        ScenarioId::Courtyard => build_courtyard(),
        ScenarioId::BrokenGround => build_broken_ground(),
        ScenarioId::Gauntlet => build_gauntlet(),
    }
}

/// Courtyard: 80 m square, one agent 45 m from the player, eight gold in a ring.
fn build_courtyard() -> Scenario {
    Scenario {
        surface: NavSurface::new(0.0).with_region(Region::new(-40.0, 40.0, -40.0, 40.0)),
        player_spawn: Some(Vec3::new(0.0, 0.0, -25.0)),
        agents: vec![AgentSpawn::new("Enemy", Vec3::new(0.0, 0.0, 20.0))],
        collectibles: ring(Vec3::ZERO, 10.0, 8),
    }
}

/// Broken ground: 60 m square with a grid of 8 m holes and two agents
/// wandering tight circles around their spawns.
fn build_broken_ground() -> Scenario {
    let mut surface = NavSurface::new(0.0).with_region(Region::new(-30.0, 30.0, -30.0, 30.0));
    for x in [-15.0, 0.0, 15.0] {
        for z in [-15.0, 0.0, 15.0] {
            if x == 0.0 && z == 0.0 {
                continue;
            }
            surface = surface.with_hole(Region::square(x, z, 4.0));
        }
    }

    let tight = AgentConfig {
        patrol_radius: 10.0,
        ..Default::default()
    };
    Scenario {
        surface,
        player_spawn: Some(Vec3::ZERO),
        agents: vec![
            AgentSpawn::new("Enemy_A", Vec3::new(-24.0, 0.0, -24.0)).with_config(tight.clone()),
            AgentSpawn::new("Enemy_B", Vec3::new(24.0, 0.0, 24.0)).with_config(tight),
        ],
        collectibles: vec![
            Vec3::new(-7.5, 0.0, 7.5),
            Vec3::new(7.5, 0.0, -7.5),
            Vec3::new(22.0, 0.0, -22.0),
        ],
    }
}

/// Gauntlet: a 10 m wide, 120 m long corridor with agents guarding posts.
fn build_gauntlet() -> Scenario {
    let agents = [30.0, 60.0, 90.0]
        .iter()
        .enumerate()
        .map(|(i, &z)| {
            let post = Vec3::new(0.0, 0.0, z);
            AgentSpawn::new(format!("Guard_{}", i + 1), post).with_config(AgentConfig {
                detection_range: 12.0,
                lost_range: 18.0,
                patrol_radius: 4.0,
                wander_center: Some(post),
                ..Default::default()
            })
        })
        .collect();

    Scenario {
        surface: NavSurface::new(0.0).with_region(Region::new(-5.0, 5.0, 0.0, 120.0)),
        player_spawn: Some(Vec3::new(0.0, 0.0, 2.0)),
        agents,
        collectibles: (1..=5).map(|i| Vec3::new(0.0, 0.0, i as f32 * 20.0)).collect(),
    }
}

fn ring(center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            center + Vec3::new(radius * angle.sin(), 0.0, radius * angle.cos())
        })
        .collect()
}
