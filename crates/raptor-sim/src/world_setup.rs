//! Entity spawn factories and host id conversion.

use glam::Vec3;
use hecs::{Entity, World};

use raptor_core::components::*;
use raptor_core::config::{ProjectileTuning, SimConfig};
use raptor_core::enums::PawnStatus;
use raptor_core::types::{EntityId, Transform};
use raptor_flight::weapon::new_weapon;

/// Host-facing id for an entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Resolve a host id to a live entity. Stale ids (despawned or reused
/// slots) resolve to `None`.
pub fn resolve(world: &World, id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0).filter(|&entity| world.contains(entity))
}

/// Spawn a pawn at `transform` with full health, a loaded gun and the
/// configured starting speed.
pub fn spawn_pawn(world: &mut World, transform: Transform, config: &SimConfig) -> Entity {
    let flight = FlightState {
        forward_speed: config.pawn.initial_speed,
        ..Default::default()
    };
    let health = Health {
        current: config.pawn.max_health,
        max: config.pawn.max_health,
        status: PawnStatus::Alive,
    };

    world.spawn((
        Pawn,
        transform,
        flight,
        AxisInputs::default(),
        CameraRig::default(),
        ControlSurfaces::default(),
        health,
        new_weapon(&config.weapon),
        Score::default(),
    ))
}

/// Spawn a machine-gun round at the muzzle.
pub fn spawn_projectile(
    world: &mut World,
    muzzle: Transform,
    velocity: Vec3,
    owner: Entity,
    spread_deg: Vec3,
    tuning: &ProjectileTuning,
) -> Entity {
    world.spawn((
        Projectile,
        muzzle,
        ProjectileState {
            velocity,
            gravity_scale: tuning.gravity_scale,
            owner: entity_id(owner),
            spread_deg,
            age_secs: 0.0,
            policy: tuning.collision_policy,
        },
    ))
}
