//! Fundamental geometric and simulation types.
//!
//! Frame convention: +X forward, +Y right, +Z up. Angles at the API
//! surface are degrees. Positive pitch raises the nose, positive yaw turns
//! right, positive roll lowers the right wing.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Host-facing entity identifier (the bit pattern of an ECS entity handle,
/// including its generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// World-space placement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Unit vector the entity is facing.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Unit vector out of the right wing.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Unit vector out of the canopy.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Transform a point given in the entity's local frame into world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }
}

/// Simulation time tracking. Frames may have variable length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
    /// Length of the most recent tick in seconds.
    pub last_dt: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
        self.last_dt = dt;
    }
}

/// Sanitize a host-supplied frame delta. Negative or non-finite deltas
/// become zero.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}
