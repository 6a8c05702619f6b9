//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components, the
//! timer queue and the engine's event buffers.

pub mod cleanup;
pub mod collision;
pub mod flight;
pub mod input;
pub mod projectile;
pub mod snapshot;
pub mod timer_expiry;
pub mod weapon;
