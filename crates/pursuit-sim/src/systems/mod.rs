//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

pub mod agent_ai;
pub mod cleanup;
pub mod collectible;
pub mod navigation;
pub mod player_input;
pub mod snapshot;
pub mod triggers;
