//! Cleanup system: despawns entities queued by other systems this tick.

use hecs::World;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    despawn_buffer.sort_unstable();
    despawn_buffer.dedup();
    for entity in despawn_buffer.drain(..) {
        // Already-despawned entities are fine to skip.
        let _ = world.despawn(entity);
    }
}
