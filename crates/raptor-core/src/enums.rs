//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Continuous control axes delivered by the host, each in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAxis {
    Thrust,
    MoveUp,
    MoveRight,
    Yaw,
    /// Machine-gun trigger, used by `TriggerMode::HoldAxis`.
    MGun,
    CameraRight,
    CameraUp,
}

/// Discrete press/release actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    FirePressed,
    FireReleased,
}

/// How the weapon reads the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Fire every tick the trigger axis is positive.
    #[default]
    HoldAxis,
    /// Fire while a press action is latched, until release or empty.
    PressRelease,
}

/// Weapon controller lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponState {
    #[default]
    Idle,
    /// A shot was fired this tick.
    Firing,
    /// Waiting for the fire-rate cooldown to expire.
    CooldownWait,
}

/// Result of a fire attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    Fired,
    CoolingDown,
    Empty,
}

/// What a projectile does when the host reports it hit something.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Destroy on the first hit of anything but itself and its firing pawn.
    #[default]
    DestroyOnHit,
    /// Push physics-simulating bodies, never self-destroy.
    ImpulseOnly,
    /// Ignore hits entirely; only the lifetime removes the projectile.
    Ignore,
}

/// Pawn lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PawnStatus {
    #[default]
    Alive,
    /// Health reached zero. The pawn stops responding to input.
    Destroyed,
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    LifetimeExpired,
    Collision,
}
