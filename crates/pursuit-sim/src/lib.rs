//! Headless simulation engine for pursuit agents.
//!
//! Owns the hecs ECS world, the reference navigable surface and navigators,
//! runs systems at a fixed tick rate, and produces `SimSnapshot`s.

pub mod animator;
pub mod components;
pub mod engine;
pub mod navigator;
pub mod navmesh;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use pursuit_core as core;
