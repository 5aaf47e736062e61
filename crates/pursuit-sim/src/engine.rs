//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs world and the navigable surface,
//! processes driver commands, runs all systems, and produces `SimSnapshot`s.
//! Completely headless and deterministic for a given seed.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pursuit_core::commands::PlayerCommand;
use pursuit_core::enums::{GamePhase, ScenarioId};
use pursuit_core::events::AgentEvent;
use pursuit_core::nav::Navigator;
use pursuit_core::state::SimSnapshot;
use pursuit_core::types::SimTime;

use crate::components::Agent;
use crate::navmesh::NavSurface;
use crate::scenario::{build_scenario, Scenario};
use crate::systems;
use crate::systems::player_input::InputState;
use crate::systems::triggers::OverlapSet;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Level layout used by [`SimulationEngine::new`].
    pub scenario: ScenarioId,
    /// Include diagnostic range spheres in snapshots.
    pub debug_overlay: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioId::default(),
            debug_overlay: false,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    surface: NavSurface,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    overlaps: OverlapSet,
    events: Vec<AgentEvent>,
    gold_count: u32,
    debug_overlay: bool,
}

impl SimulationEngine {
    /// Create an engine populated with the configured scenario.
    pub fn new(config: SimConfig) -> Self {
        let scenario = build_scenario(config.scenario);
        Self::with_scenario(config, &scenario)
    }

    /// Create an engine populated with a custom scenario.
    pub fn with_scenario(config: SimConfig, scenario: &Scenario) -> Self {
        let mut world = World::new();
        world_setup::setup_scenario(&mut world, scenario);
        Self {
            world,
            surface: scenario.surface.clone(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            overlaps: OverlapSet::new(),
            events: Vec::new(),
            gold_count: 0,
            debug_overlay: config.debug_overlay,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            events,
            self.gold_count,
            self.debug_overlay,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn gold_count(&self) -> u32 {
        self.gold_count
    }

    pub fn surface(&self) -> &NavSurface {
        &self.surface
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that place entities directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMoveInput {
                horizontal,
                vertical,
            } => {
                self.input.horizontal = finite_or_zero(horizontal);
                self.input.vertical = finite_or_zero(vertical);
            }
            PlayerCommand::SetCameraYaw { degrees } => {
                self.input.camera_yaw_degrees = finite_or_zero(degrees);
            }
            PlayerCommand::ConfigureAgents { config } => {
                for (_entity, agent) in self.world.query_mut::<&mut Agent>() {
                    let nav = agent.navigator.as_mut().map(|n| n as &mut dyn Navigator);
                    agent.controller.apply_config(config.clone(), nav);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt() as f32;
        // 1. Player movement from input
        systems::player_input::run(&mut self.world, &self.input, dt);
        // 2. Agent decisions (perception, chase/wander, blend, facing)
        systems::agent_ai::run(
            &mut self.world,
            &self.surface,
            &mut self.rng,
            self.time.elapsed_secs,
            dt,
            &mut self.events,
        );
        // 3. Path following
        systems::navigation::run(&mut self.world, &self.surface, dt);
        // 4. Collectible spin
        systems::collectible::run(&mut self.world, dt);
        // 5. Trigger enter events
        systems::triggers::run(
            &mut self.world,
            &mut self.overlaps,
            &mut self.events,
            &mut self.gold_count,
            &mut self.despawn_buffer,
        );
        // 6. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
