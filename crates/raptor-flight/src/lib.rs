//! Flight handling and weapon gating for RAPTOR.
//!
//! Pure functions over plain data: the flight-model step, rate smoothing,
//! rotation helpers, the machine-gun fire gate and spread sampling.
//! No ECS dependency; `raptor-sim` applies the results to the world.

pub mod flight;
pub mod interp;
pub mod rotation;
pub mod weapon;

pub use raptor_core as core;

#[cfg(test)]
mod tests;
