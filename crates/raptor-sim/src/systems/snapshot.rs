//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use raptor_core::components::*;
use raptor_core::config::PawnTuning;
use raptor_core::events::{AudioEvent, GameEvent};
use raptor_core::state::*;
use raptor_core::types::{SimTime, Transform};
use raptor_flight::flight::turbine_pitch;

use crate::world_setup::entity_id;

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    tuning: &PawnTuning,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        pawns: build_pawns(world, tuning),
        projectiles: build_projectiles(world),
        audio_events,
        game_events,
    }
}

fn build_pawns(world: &World, tuning: &PawnTuning) -> Vec<PawnView> {
    let mut query = world.query::<(
        &Pawn,
        &Transform,
        &FlightState,
        &Health,
        &Weapon,
        &CameraRig,
        &ControlSurfaces,
        &Score,
    )>();

    let mut pawns: Vec<PawnView> = query
        .iter()
        .map(
            |(entity, (_pawn, transform, flight, health, weapon, camera, surfaces, score))| {
                PawnView {
                    id: entity_id(entity),
                    position: transform.position,
                    rotation: transform.rotation,
                    forward_speed: flight.forward_speed,
                    acceleration: flight.acceleration,
                    pitch_rate: flight.pitch_rate,
                    yaw_rate: flight.yaw_rate,
                    roll_rate: flight.roll_rate,
                    health: health.current,
                    status: health.status,
                    ammo: weapon.ammo,
                    can_fire: weapon.can_fire,
                    weapon_state: weapon.state,
                    camera: *camera,
                    control_surfaces: *surfaces,
                    turbine_pitch: turbine_pitch(flight.forward_speed, tuning),
                    score: score.hits,
                }
            },
        )
        .collect();
    pawns.sort_by_key(|p| p.id);
    pawns
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut query = world.query::<(&Projectile, &Transform, &ProjectileState)>();

    let mut projectiles: Vec<ProjectileView> = query
        .iter()
        .map(|(entity, (_projectile, transform, state))| ProjectileView {
            id: entity_id(entity),
            owner: state.owner,
            position: transform.position,
            rotation: transform.rotation,
            velocity: state.velocity,
            age_secs: state.age_secs,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
