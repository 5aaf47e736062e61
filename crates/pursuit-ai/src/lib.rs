//! Behavior core for pursuit agents.
//!
//! Implements target-acquisition hysteresis, wander-point planning, arrival
//! detection, chase/wander arbitration, and the derived presentation outputs
//! (locomotion blend, facing). No ECS dependency; operates on plain data and
//! the collaborator traits from `pursuit_core::nav`.

pub mod arrival;
pub mod controller;
pub mod motion;
pub mod overlay;
pub mod perception;
pub mod wander;

pub use controller::{AgentController, TickInput, TickReport};
pub use pursuit_core as core;

#[cfg(test)]
mod tests;
