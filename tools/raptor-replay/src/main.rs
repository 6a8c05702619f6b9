//! raptor-replay: drives the simulation from a scripted input file.
//!
//! Usage:
//!   raptor-replay --script sortie.json [--config sim.json] [--frames 600] [--dt 0.0166]
//!
//! The final snapshot is printed as JSON on stdout. With `--events`, every
//! audio and game event is printed as one JSON line per frame on stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use glam::{Quat, Vec3};
use log::info;
use serde::Deserialize;

use raptor_core::commands::{CollisionReport, InputEvent};
use raptor_core::config::SimConfig;
use raptor_core::constants::DEFAULT_FRAME_RATE;
use raptor_core::state::SimSnapshot;
use raptor_core::types::{EntityId, Transform};
use raptor_sim::{SimulationEngine, Simulatable};

/// A pawn to spawn before the first frame.
#[derive(Debug, Deserialize)]
struct ScriptPawn {
    #[serde(default)]
    position: Vec3,
    /// Heading in degrees, positive turns right.
    #[serde(default)]
    yaw_deg: f32,
}

/// Input addressed to a pawn by its index in `pawns`.
#[derive(Debug, Deserialize)]
struct ScriptInput {
    pawn: usize,
    event: InputEvent,
}

/// A hit on a pawn, optionally by another scripted pawn.
#[derive(Debug, Deserialize)]
struct ScriptHit {
    pawn: usize,
    #[serde(default)]
    other: Option<usize>,
    #[serde(default)]
    location: Vec3,
    #[serde(default = "default_normal")]
    normal: Vec3,
}

fn default_normal() -> Vec3 {
    Vec3::Z
}

#[derive(Debug, Deserialize)]
struct ScriptFrame {
    /// Frame index the entries are delivered before.
    at: u32,
    #[serde(default)]
    inputs: Vec<ScriptInput>,
    #[serde(default)]
    hits: Vec<ScriptHit>,
}

#[derive(Debug, Deserialize)]
struct Script {
    pawns: Vec<ScriptPawn>,
    #[serde(default)]
    frames: Vec<ScriptFrame>,
}

#[derive(Debug)]
struct Options {
    script: PathBuf,
    config: Option<PathBuf>,
    /// `None` runs through the last scripted frame.
    frames: Option<u32>,
    dt: f32,
    events: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if let Err(e) = parse_args(&args).and_then(|opts| run(&opts)) {
        eprintln!("Error: {e:#}");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "raptor-replay: run a scripted sortie headlessly\n\
         \n\
           --script <path>   Script JSON (pawns and per-frame inputs/hits)\n\
           --config <path>   SimConfig JSON (optional, default tuning)\n\
           --frames <N>      Frames to run, at least 1 (default: last scripted frame + 1)\n\
           --dt <secs>       Frame time (default: 1/60)\n\
           --events          Print per-frame events on stderr\n\
         \n\
         Example:\n\
         \n\
           raptor-replay --script sortie.json --frames 600\n"
    );
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut script = None;
    let mut config = None;
    let mut frames = None;
    let mut dt = 1.0 / DEFAULT_FRAME_RATE as f32;
    let mut events = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .with_context(|| format!("{arg} needs a value"))
        };
        match arg.as_str() {
            "--script" => script = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--frames" => {
                let raw = value()?;
                let n: u32 = raw.parse().with_context(|| format!("bad --frames: {raw}"))?;
                if n == 0 {
                    bail!("--frames must be at least 1");
                }
                frames = Some(n);
            }
            "--dt" => {
                let raw = value()?;
                dt = raw.parse().with_context(|| format!("bad --dt: {raw}"))?;
            }
            "--events" => events = true,
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(Options {
        script: script.context("--script is required")?,
        config,
        frames,
        dt,
        events,
    })
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    SimConfig::from_json_str(&json).with_context(|| format!("loading config {}", path.display()))
}

fn load_script(path: &Path) -> Result<Script> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing script {}", path.display()))
}

fn pawn_id(pawns: &[EntityId], index: usize) -> Result<EntityId> {
    pawns
        .get(index)
        .copied()
        .with_context(|| format!("script refers to pawn {index}, only {} spawned", pawns.len()))
}

fn run(opts: &Options) -> Result<()> {
    let config = load_config(opts.config.as_deref())?;
    let mut script = load_script(&opts.script)?;
    script.frames.sort_by_key(|f| f.at);

    let frames = opts
        .frames
        .unwrap_or_else(|| script.frames.last().map_or(1, |f| f.at + 1));

    let mut engine = SimulationEngine::try_new(config)?;
    let pawns: Vec<EntityId> = script
        .pawns
        .iter()
        .map(|p| {
            let rotation = Quat::from_rotation_z(p.yaw_deg.to_radians());
            engine.spawn_pawn(Transform::new(p.position, rotation))
        })
        .collect();
    info!("replaying {frames} frames with {} pawns", pawns.len());

    let final_snapshot = drive(&mut engine, &script.frames, &pawns, frames, opts)?;
    println!("{}", serde_json::to_string_pretty(&final_snapshot)?);
    Ok(())
}

/// Deliver scripted inputs and hits, then tick. Written against the host
/// trait so any `Simulatable` can be replayed.
fn drive<S: Simulatable>(
    sim: &mut S,
    script: &[ScriptFrame],
    pawns: &[EntityId],
    frames: u32,
    opts: &Options,
) -> Result<SimSnapshot> {
    let mut pending = script.iter().peekable();
    let mut last = SimSnapshot::default();

    for frame in 0..frames {
        while let Some(entry) = pending.next_if(|f| f.at <= frame) {
            for input in &entry.inputs {
                sim.on_input(pawn_id(pawns, input.pawn)?, input.event);
            }
            for hit in &entry.hits {
                let other = hit.other.map(|i| pawn_id(pawns, i)).transpose()?;
                sim.on_collision(CollisionReport {
                    entity: pawn_id(pawns, hit.pawn)?,
                    other,
                    other_simulates_physics: false,
                    location: hit.location,
                    normal: hit.normal,
                    normal_impulse: Vec3::ZERO,
                });
            }
        }

        last = sim.on_tick(opts.dt);
        if opts.events && !(last.audio_events.is_empty() && last.game_events.is_empty()) {
            eprintln!(
                "{{\"tick\":{},\"audio\":{},\"game\":{}}}",
                last.time.tick,
                serde_json::to_string(&last.audio_events)?,
                serde_json::to_string(&last.game_events)?
            );
        }
    }

    Ok(last)
}
