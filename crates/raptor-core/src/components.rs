//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in `raptor-flight`, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::EntityId;

/// Marks an entity as a player-controlled aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pawn;

/// Marks an entity as a machine-gun round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Integrated flight state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Speed along the local forward axis.
    pub forward_speed: f32,
    /// Current forward acceleration.
    pub acceleration: f32,
    /// Smoothed pitch rate (deg/s).
    pub pitch_rate: f32,
    /// Smoothed yaw rate (deg/s).
    pub yaw_rate: f32,
    /// Smoothed roll rate (deg/s).
    pub roll_rate: f32,
}

/// Latest axis values delivered by the host. Axes hold their value until
/// the host sends a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisInputs {
    pub thrust: f32,
    pub move_up: f32,
    pub move_right: f32,
    pub yaw: f32,
    pub trigger: f32,
    pub camera_right: f32,
    pub camera_up: f32,
}

/// Camera view offset. Cosmetic; not part of the flight physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Yaw offset in degrees, [-180, 180].
    pub yaw: f32,
    /// Pitch offset in degrees, [-90, 90].
    pub pitch: f32,
}

/// Flap deflections for an animation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSurfaces {
    pub pitch_in: f32,
    pub roll_in: f32,
    /// Right flap deflection (deg).
    pub right_flap: f32,
    /// Left flap deflection (deg).
    pub left_flap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    pub status: PawnStatus,
}

/// Machine-gun state owned by a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub ammo: u32,
    /// False while the fire-rate cooldown timer is pending.
    pub can_fire: bool,
    /// Latched by `FirePressed` in press/release mode.
    pub firing: bool,
    /// Set once the empty cue has played for the current trigger pull.
    pub dry_fire_latched: bool,
    pub state: WeaponState,
    pub shots_fired: u32,
}

/// Hits scored by this pawn's rounds on other pawns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub hits: u32,
}

/// Ballistic state of a machine-gun round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileState {
    pub velocity: Vec3,
    pub gravity_scale: f32,
    /// Pawn that fired this round.
    pub owner: EntityId,
    /// Spread applied at spawn as (pitch, yaw, roll) degrees.
    pub spread_deg: Vec3,
    /// Seconds since spawn.
    pub age_secs: f32,
    pub policy: CollisionPolicy,
}
