//! Trigger system: sphere-overlap *enter* events between trigger volumes.
//!
//! A pair fires once when it starts overlapping and again only after it has
//! separated. Agents receive every contact; collectibles react to the player
//! by bumping the gold counter and queueing themselves for despawn.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use pursuit_core::enums::ContactTag;
use pursuit_core::events::AgentEvent;
use pursuit_core::types::Pose;

use crate::components::{Agent, Collectible, Trigger};

/// Pairs overlapping at the end of the previous tick, keyed by entity bits (low, high).
pub type OverlapSet = BTreeSet<(u64, u64)>;

/// Run overlap detection and dispatch enter events.
pub fn run(
    world: &mut World,
    overlaps: &mut OverlapSet,
    events: &mut Vec<AgentEvent>,
    gold_count: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
) {
    let volumes: Vec<(Entity, glam::Vec3, f32, ContactTag)> = world
        .query::<(&Pose, &Trigger)>()
        .iter()
        .map(|(entity, (pose, trigger))| (entity, pose.position, trigger.radius, trigger.tag.clone()))
        .collect();

    let mut current = OverlapSet::new();
    let mut entered = Vec::new();
    for (i, a) in volumes.iter().enumerate() {
        for b in &volumes[i + 1..] {
            let reach = a.2 + b.2;
            if a.1.distance_squared(b.1) > reach * reach {
                continue;
            }
            let key = pair_key(a.0, b.0);
            current.insert(key);
            if !overlaps.contains(&key) {
                entered.push((a.clone(), b.clone()));
            }
        }
    }
    *overlaps = current;

    for ((ea, _, _, tag_a), (eb, _, _, tag_b)) in entered {
        deliver(world, ea, &tag_b, events, gold_count, despawn_buffer);
        deliver(world, eb, &tag_a, events, gold_count, despawn_buffer);
    }
}

/// Hand `other` to whatever reacts to contacts on `entity`.
fn deliver(
    world: &mut World,
    entity: Entity,
    other: &ContactTag,
    events: &mut Vec<AgentEvent>,
    gold_count: &mut u32,
    despawn_buffer: &mut Vec<Entity>,
) {
    if let Ok(mut agent) = world.get::<&mut Agent>(entity) {
        agent.controller.on_contact(other, events);
        return;
    }

    let is_collectible = world.get::<&Collectible>(entity).is_ok();
    if is_collectible && *other == ContactTag::Player && !despawn_buffer.contains(&entity) {
        *gold_count += 1;
        tracing::info!(total = *gold_count, "gold collected");
        events.push(AgentEvent::GoldCollected { total: *gold_count });
        despawn_buffer.push(entity);
    }
}

fn pair_key(a: Entity, b: Entity) -> (u64, u64) {
    let (a, b) = (a.to_bits().get(), b.to_bits().get());
    (a.min(b), a.max(b))
}
