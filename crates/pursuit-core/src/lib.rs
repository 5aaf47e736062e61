//! Core types and definitions for the pursuit agent simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry helpers, agent configuration, collaborator traits, commands,
//! events, state snapshots, and constants. It has no dependency on the ECS
//! or any runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod nav;
pub mod state;
pub mod types;

pub use glam::{Quat, Vec3};
