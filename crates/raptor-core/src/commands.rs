//! Host-to-simulation messages: control inputs and collision reports.
//!
//! Both are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// A control input for one pawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// New value for a continuous axis. Clamped to [-1, 1] on receipt.
    Axis { axis: InputAxis, value: f32 },
    /// Discrete press/release.
    Action { action: InputAction },
}

impl InputEvent {
    pub fn axis(axis: InputAxis, value: f32) -> Self {
        Self::Axis { axis, value }
    }

    pub fn action(action: InputAction) -> Self {
        Self::Action { action }
    }
}

/// A blocking hit detected by the host's physics, reported from the point
/// of view of `entity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionReport {
    /// The simulated entity that was hit (pawn or projectile).
    pub entity: EntityId,
    /// The other participant, if it is a simulated entity.
    pub other: Option<EntityId>,
    /// Whether the other body is driven by the host's rigid-body physics.
    #[serde(default)]
    pub other_simulates_physics: bool,
    pub location: Vec3,
    /// Surface normal at the contact, pointing away from the other body.
    pub normal: Vec3,
    #[serde(default)]
    pub normal_impulse: Vec3,
}
