//! Simulation engine for RAPTOR.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces `SimSnapshot`s for the host.

pub mod engine;
pub mod simulatable;
pub mod spent_rounds;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use raptor_core as core;
pub use simulatable::Simulatable;
