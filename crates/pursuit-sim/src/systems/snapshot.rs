//! Snapshot builder: reads the world and assembles a `SimSnapshot`.

use hecs::World;

use pursuit_ai::overlay::range_spheres;
use pursuit_core::enums::GamePhase;
use pursuit_core::events::AgentEvent;
use pursuit_core::nav::Navigator;
use pursuit_core::state::*;
use pursuit_core::types::{Pose, SimTime};

use crate::components::{Agent, Collectible, Player};

/// Label shown by the counter display.
pub fn hud_label(gold_count: u32) -> String {
    format!("Gold: {gold_count}")
}

/// Build the complete snapshot from current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<AgentEvent>,
    gold_count: u32,
    debug_overlay: bool,
) -> SimSnapshot {
    let player = world
        .query::<(&Player, &Pose)>()
        .iter()
        .next()
        .map(|(_, (player, pose))| PlayerView {
            position: pose.position,
            yaw_degrees: pose.yaw_degrees(),
            blend: player.blend,
        });

    let mut agents = Vec::new();
    let mut overlay = Vec::new();
    for (_entity, (agent, pose)) in world.query::<(&Agent, &Pose)>().iter() {
        let controller = &agent.controller;
        agents.push(AgentView {
            name: controller.name().to_string(),
            position: pose.position,
            yaw_degrees: pose.yaw_degrees(),
            velocity: agent
                .navigator
                .as_ref()
                .map_or(glam::Vec3::ZERO, |nav| nav.velocity()),
            mode: controller.mode(),
            is_chasing: controller.is_chasing(),
            has_registered_hit: controller.has_registered_hit(),
            blend: agent.animator.value(),
            wander_goal: controller
                .wander()
                .has_goal()
                .then(|| controller.wander().current_goal())
                .flatten(),
        });
        if debug_overlay {
            overlay.extend(range_spheres(
                pose.position,
                controller.wander_center(),
                controller.config(),
            ));
        }
    }

    let collectibles = world
        .query::<(&Collectible, &Pose)>()
        .iter()
        .map(|(_, (item, pose))| CollectibleView {
            position: pose.position,
            spin_degrees: item.spin_degrees,
        })
        .collect();

    SimSnapshot {
        time: *time,
        phase,
        player,
        agents,
        collectibles,
        gold_count,
        hud_label: hud_label(gold_count),
        events,
        overlay,
    }
}
