//! Events emitted by the simulation for audio and host feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Audio cues for the host sound system. The host owns the actual sound
/// resources; the simulation only says when to start or stop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// One-shot engine spool-up on spawn.
    TurbineStartup { pawn: EntityId },
    /// Start the looping turbine sound. Its pitch is read from `PawnView`.
    TurbineLoopStart { pawn: EntityId },
    TurbineLoopStop { pawn: EntityId },
    /// One-shot gunshot at a location (hold-axis trigger).
    FireShot { pawn: EntityId, location: Vec3 },
    /// Looping gun sound (press/release trigger).
    FireLoopStart { pawn: EntityId },
    FireLoopStop { pawn: EntityId },
    /// Trigger pulled with no rounds left.
    AmmoEmpty { pawn: EntityId },
    PawnHit { pawn: EntityId, location: Vec3 },
    PawnDestroyed { pawn: EntityId },
}

/// Gameplay notifications for the host entity layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ProjectileSpawned {
        projectile: EntityId,
        owner: EntityId,
        location: Vec3,
        velocity: Vec3,
    },
    ProjectileRemoved {
        projectile: EntityId,
        reason: RemovalReason,
    },
    /// The host should push `target` with this impulse at `location`.
    ImpulseApplied {
        projectile: EntityId,
        target: Option<EntityId>,
        impulse: Vec3,
        location: Vec3,
    },
    PawnDamaged {
        pawn: EntityId,
        health: i32,
    },
    PawnDestroyed {
        pawn: EntityId,
    },
}
