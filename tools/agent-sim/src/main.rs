//! agent-sim: run a pursuit scenario headless and report what the agents did.
//!
//! Usage:
//!   agent-sim --scenario courtyard --ticks 600
//!   agent-sim --scenario gauntlet --config guard.json --json > run.jsonl

use std::path::PathBuf;
use std::process;

use pursuit_core::commands::PlayerCommand;
use pursuit_core::config::AgentConfig;
use pursuit_core::enums::ScenarioId;
use pursuit_core::events::AgentEvent;
use pursuit_core::state::SimSnapshot;
use pursuit_sim::{SimConfig, SimulationEngine};
use tracing_subscriber::EnvFilter;

struct Options {
    scenario: ScenarioId,
    seed: u64,
    ticks: u64,
    config: Option<PathBuf>,
    json: bool,
    overlay: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scenario: ScenarioId::default(),
            seed: 42,
            ticks: 1200,
            config: None,
            json: false,
            overlay: false,
        }
    }
}

fn main() {
    // RUST_LOG replaces the default info level outright.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: options.seed,
        scenario: options.scenario,
        debug_overlay: options.overlay,
    });

    if let Some(path) = &options.config {
        match AgentConfig::from_path(path) {
            Ok(config) => engine.queue_command(PlayerCommand::ConfigureAgents { config }),
            Err(e) => {
                eprintln!("Error: failed to load {}: {e}", path.display());
                process::exit(1);
            }
        }
    }

    tracing::info!(
        scenario = ?options.scenario,
        seed = options.seed,
        ticks = options.ticks,
        "starting run"
    );

    let mut last = SimSnapshot::default();
    let mut summary = Summary::default();
    for tick in 0..options.ticks {
        engine.queue_commands(scripted_input(tick));
        last = engine.tick();
        summary.record(&last.events);

        if options.json {
            match serde_json::to_string(&last) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Error: failed to serialize snapshot: {e}");
                    process::exit(1);
                }
            }
        }
    }

    if !options.json {
        print_summary(&last, &summary);
    }
}

/// Player walks forward for five seconds, turns the camera and sidesteps,
/// then stands still.
fn scripted_input(tick: u64) -> Vec<PlayerCommand> {
    let walk = |horizontal, vertical| PlayerCommand::SetMoveInput {
        horizontal,
        vertical,
    };
    match tick {
        0 => vec![PlayerCommand::SetCameraYaw { degrees: 0.0 }, walk(0.0, 1.0)],
        300 => vec![PlayerCommand::SetCameraYaw { degrees: 45.0 }, walk(1.0, 0.0)],
        420 => vec![walk(0.0, 0.0)],
        _ => Vec::new(),
    }
}

#[derive(Default)]
struct Summary {
    chases_started: u32,
    chases_lost: u32,
    wander_goals: u32,
    wander_failures: u32,
    hits: Vec<String>,
}

impl Summary {
    fn record(&mut self, events: &[AgentEvent]) {
        for event in events {
            match event {
                AgentEvent::ChaseStarted { .. } => self.chases_started += 1,
                AgentEvent::ChaseLost { .. } => self.chases_lost += 1,
                AgentEvent::WanderGoalSelected { .. } => self.wander_goals += 1,
                AgentEvent::WanderSampleFailed { .. } => self.wander_failures += 1,
                AgentEvent::HitRegistered { agent } => self.hits.push(agent.clone()),
                AgentEvent::ContactObserved { .. } | AgentEvent::GoldCollected { .. } => {}
            }
        }
    }
}

fn print_summary(snapshot: &SimSnapshot, summary: &Summary) {
    println!(
        "t = {:.2}s ({} ticks)  {}",
        snapshot.time.elapsed_secs, snapshot.time.tick, snapshot.hud_label
    );
    if let Some(player) = &snapshot.player {
        println!(
            "player   ({:7.2}, {:7.2})  yaw {:6.1}",
            player.position.x, player.position.z, player.yaw_degrees
        );
    }
    for agent in &snapshot.agents {
        println!(
            "{:<8} ({:7.2}, {:7.2})  yaw {:6.1}  {:?}{}",
            agent.name,
            agent.position.x,
            agent.position.z,
            agent.yaw_degrees,
            agent.mode,
            if agent.has_registered_hit { "  [hit]" } else { "" }
        );
    }
    println!(
        "chases: {} started, {} lost  wander: {} goals, {} failed samples",
        summary.chases_started, summary.chases_lost, summary.wander_goals, summary.wander_failures
    );
    if !summary.hits.is_empty() {
        println!("hits: {}", summary.hits.join(", "));
    }
    if !snapshot.overlay.is_empty() {
        println!("overlay: {} spheres", snapshot.overlay.len());
    }
}

fn print_usage() {
    eprintln!(
        "agent-sim: headless pursuit agent runner\n\
         \n\
           --scenario <name>  courtyard | broken-ground | gauntlet (default: courtyard)\n\
           --seed <N>         RNG seed (default: 42)\n\
           --ticks <N>        Ticks to simulate at 60 Hz (default: 1200)\n\
           --config <path>    JSON agent config applied to every agent\n\
           --json             Print one JSON snapshot per tick instead of a summary\n\
           --overlay          Include range spheres in snapshots\n\
         \n\
         Logging goes to stderr at info level; set RUST_LOG (e.g. RUST_LOG=debug) to change it.\n"
    );
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--scenario" => {
                let name = value_of(&mut iter, arg)?;
                options.scenario = ScenarioId::from_name(name)
                    .ok_or_else(|| format!("unknown scenario: {name}"))?;
            }
            "--seed" => {
                options.seed = value_of(&mut iter, arg)?
                    .parse()
                    .map_err(|e| format!("invalid --seed: {e}"))?;
            }
            "--ticks" => {
                options.ticks = value_of(&mut iter, arg)?
                    .parse()
                    .map_err(|e| format!("invalid --ticks: {e}"))?;
            }
            "--config" => options.config = Some(PathBuf::from(value_of(&mut iter, arg)?)),
            "--json" => options.json = true,
            "--overlay" => options.overlay = true,
            "help" | "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(Some(options))
}

fn value_of<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, String> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}
