//! Simulation snapshot: the complete visible state handed to the host
//! after each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::{CameraRig, ControlSurfaces};
use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{EntityId, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub pawns: Vec<PawnView>,
    pub projectiles: Vec<ProjectileView>,
    pub audio_events: Vec<AudioEvent>,
    pub game_events: Vec<GameEvent>,
}

impl SimSnapshot {
    /// Look up a pawn view by id.
    pub fn pawn(&self, id: EntityId) -> Option<&PawnView> {
        self.pawns.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PawnView {
    pub id: EntityId,
    pub position: Vec3,
    pub rotation: Quat,
    pub forward_speed: f32,
    pub acceleration: f32,
    pub pitch_rate: f32,
    pub yaw_rate: f32,
    pub roll_rate: f32,
    pub health: i32,
    pub status: PawnStatus,
    pub ammo: u32,
    pub can_fire: bool,
    pub weapon_state: WeaponState,
    pub camera: CameraRig,
    pub control_surfaces: ControlSurfaces,
    /// Turbine loop pitch multiplier.
    pub turbine_pitch: f32,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub owner: EntityId,
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub age_secs: f32,
}
