//! Agent AI system: runs every agent's controller once per tick.
//!
//! The player is the tracked target for every agent.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use pursuit_ai::TickInput;
use pursuit_core::events::AgentEvent;
use pursuit_core::nav::{Navigator, TargetProvider};
use pursuit_core::types::Pose;

use crate::components::{Agent, Player};
use crate::navmesh::NavSurface;

/// Looks up the player's position in the world.
pub struct PlayerLocator<'w> {
    world: &'w World,
}

impl<'w> PlayerLocator<'w> {
    pub fn new(world: &'w World) -> Self {
        Self { world }
    }
}

impl TargetProvider for PlayerLocator<'_> {
    fn current_position(&self) -> Option<Vec3> {
        let mut query = self.world.query::<(&Player, &Pose)>();
        query.iter().next().map(|(_, (_, pose))| pose.position)
    }
}

/// Run the agent AI system: one decision step per agent.
pub fn run(
    world: &mut World,
    surface: &NavSurface,
    rng: &mut ChaCha8Rng,
    now: f64,
    dt: f32,
    events: &mut Vec<AgentEvent>,
) {
    let input = TickInput::new(now, dt).with_target(&PlayerLocator::new(world));

    for (_entity, agent) in world.query_mut::<&mut Agent>() {
        let Agent {
            controller,
            navigator,
            animator,
        } = agent;
        let nav = navigator.as_mut().map(|n| n as &mut dyn Navigator);
        controller.tick(&input, nav, surface, animator, rng, events);
    }
}
