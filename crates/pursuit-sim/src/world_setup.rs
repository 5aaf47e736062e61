//! Entity spawn factories for setting up the simulation world.

use glam::Vec3;
use hecs::World;

use pursuit_ai::AgentController;
use pursuit_core::config::AgentConfig;
use pursuit_core::constants::*;
use pursuit_core::enums::ContactTag;
use pursuit_core::types::Pose;

use crate::animator::BlendAnimator;
use crate::components::*;
use crate::navigator::KinematicNavigator;
use crate::scenario::Scenario;

/// Populate `world` from a scenario.
pub fn setup_scenario(world: &mut World, scenario: &Scenario) {
    if let Some(position) = scenario.player_spawn {
        spawn_player(world, position);
    }
    for agent in &scenario.agents {
        spawn_agent(
            world,
            &agent.name,
            agent.position,
            agent.config.clone(),
            agent.navigator,
        );
    }
    for &position in &scenario.collectibles {
        spawn_collectible(world, position);
    }
}

pub fn spawn_player(world: &mut World, position: Vec3) -> hecs::Entity {
    world.spawn((
        Player {
            speed: PLAYER_SPEED,
            blend: 0.0,
        },
        Pose::at(position),
        Trigger {
            radius: PLAYER_TRIGGER_RADIUS,
            tag: ContactTag::Player,
        },
    ))
}

/// Spawn an agent; its navigator (if any) starts at `position` with the stop range applied.
pub fn spawn_agent(
    world: &mut World,
    name: &str,
    position: Vec3,
    config: AgentConfig,
    with_navigator: bool,
) -> hecs::Entity {
    let controller = AgentController::new(name, config, Pose::at(position));
    let navigator = with_navigator.then(|| {
        let mut nav = KinematicNavigator::new(position);
        controller.bind(&mut nav);
        nav
    });

    world.spawn((
        Agent {
            controller,
            navigator,
            animator: BlendAnimator::default(),
        },
        Pose::at(position),
        Trigger {
            radius: AGENT_TRIGGER_RADIUS,
            tag: ContactTag::Other("Enemy".to_string()),
        },
    ))
}

pub fn spawn_collectible(world: &mut World, position: Vec3) -> hecs::Entity {
    world.spawn((
        Collectible {
            spin_deg_per_sec: COLLECTIBLE_SPIN_DEG_PER_SEC,
            spin_degrees: 0.0,
        },
        Pose::at(position),
        Trigger {
            radius: COLLECTIBLE_TRIGGER_RADIUS,
            tag: ContactTag::Gold,
        },
    ))
}
