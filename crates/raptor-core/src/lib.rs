//! Core types and definitions for the RAPTOR flight-combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input commands, state snapshots, audio events, tuning
//! constants and configuration. It has no dependency on the ECS or any
//! host runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
