//! Navigation system.
//!
//! Steps every agent's navigator, writes the resulting position back to the
//! pose, and applies facing: the controller's when it rotates manually,
//! otherwise the navigator turns the agent straight to its heading.

use hecs::World;

use pursuit_core::constants::FACING_MIN_SPEED_SQ;
use pursuit_core::nav::Navigator;
use pursuit_core::types::{horizontal, look_rotation, Pose};

use crate::components::Agent;
use crate::navmesh::NavSurface;

pub fn run(world: &mut World, surface: &NavSurface, dt: f32) {
    for (_entity, (agent, pose)) in world.query_mut::<(&mut Agent, &mut Pose)>() {
        let Some(nav) = agent.navigator.as_mut() else {
            continue;
        };
        nav.step(dt, surface);
        pose.position = nav.position();

        if agent.controller.config().manual_rotate {
            pose.rotation = agent.controller.orientation();
        } else {
            let heading = horizontal(nav.velocity());
            if heading.length_squared() > FACING_MIN_SPEED_SQ {
                pose.rotation = look_rotation(heading);
            }
        }
    }
}
