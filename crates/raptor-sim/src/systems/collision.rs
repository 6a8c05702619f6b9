//! Collision system: applies host-reported hits to pawns and projectiles.
//!
//! Pawns are deflected toward the hit normal and take damage. Projectiles
//! follow their `CollisionPolicy`. Hits between a round and the pawn that
//! fired it are ignored on both sides.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, warn};

use raptor_core::commands::CollisionReport;
use raptor_core::components::*;
use raptor_core::config::SimConfig;
use raptor_core::enums::*;
use raptor_core::events::{AudioEvent, GameEvent};
use raptor_core::types::{EntityId, Transform};
use raptor_flight::rotation::deflect_toward_normal;

use crate::spent_rounds::SpentRounds;
use crate::world_setup::{entity_id, resolve};

/// Drain the collision queue.
pub fn run(
    world: &mut World,
    queue: &mut VecDeque<CollisionReport>,
    config: &SimConfig,
    spent: &SpentRounds,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    while let Some(report) = queue.pop_front() {
        let Some(entity) = resolve(world, report.entity) else {
            warn!("dropping collision for unknown entity {:?}", report.entity);
            continue;
        };
        if despawn_buffer.contains(&entity) {
            continue;
        }

        if world.get::<&Pawn>(entity).is_ok() {
            pawn_hit(world, entity, &report, config, spent, audio_events, game_events);
        } else if world.get::<&Projectile>(entity).is_ok() {
            projectile_hit(
                world,
                entity,
                &report,
                config.projectile.impulse_scale,
                despawn_buffer,
                game_events,
            );
        } else {
            warn!("collision reported for unsimulated entity {:?}", report.entity);
        }
    }
}

/// Owner of `other` if it is a live or recently removed projectile.
fn projectile_owner(
    world: &World,
    spent: &SpentRounds,
    other: Option<EntityId>,
) -> Option<EntityId> {
    let other = other?;
    match resolve(world, other) {
        Some(entity) => world.get::<&ProjectileState>(entity).ok().map(|p| p.owner),
        None => spent.owner_of(other),
    }
}

fn pawn_hit(
    world: &mut World,
    entity: Entity,
    report: &CollisionReport,
    config: &SimConfig,
    spent: &SpentRounds,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let pawn = entity_id(entity);
    if projectile_owner(world, spent, report.other) == Some(pawn) {
        return;
    }

    let Ok((transform, health, weapon)) =
        world.query_one_mut::<(&mut Transform, &mut Health, &mut Weapon)>(entity)
    else {
        return;
    };
    if health.status == PawnStatus::Destroyed {
        return;
    }

    transform.rotation =
        deflect_toward_normal(transform.rotation, report.normal, config.pawn.deflect_blend);
    health.current = (health.current - config.pawn.collision_damage).max(0);

    audio_events.push(AudioEvent::PawnHit {
        pawn,
        location: report.location,
    });
    game_events.push(GameEvent::PawnDamaged {
        pawn,
        health: health.current,
    });

    if health.current == 0 {
        health.status = PawnStatus::Destroyed;
        if weapon.firing {
            weapon.firing = false;
            audio_events.push(AudioEvent::FireLoopStop { pawn });
        }
        audio_events.push(AudioEvent::TurbineLoopStop { pawn });
        audio_events.push(AudioEvent::PawnDestroyed { pawn });
        game_events.push(GameEvent::PawnDestroyed { pawn });
        info!("pawn {pawn:?} destroyed");
    }
}

fn projectile_hit(
    world: &mut World,
    entity: Entity,
    report: &CollisionReport,
    impulse_scale: f32,
    despawn_buffer: &mut Vec<Entity>,
    game_events: &mut Vec<GameEvent>,
) {
    let projectile = entity_id(entity);
    let Ok(state) = world.get::<&ProjectileState>(entity).map(|s| *s) else {
        return;
    };
    if report.other == Some(state.owner) || report.other == Some(projectile) {
        return;
    }

    match state.policy {
        CollisionPolicy::DestroyOnHit => {
            despawn_buffer.push(entity);
            game_events.push(GameEvent::ProjectileRemoved {
                projectile,
                reason: RemovalReason::Collision,
            });
            credit_owner(world, state.owner, report.other);
        }
        CollisionPolicy::ImpulseOnly => {
            if report.other_simulates_physics {
                game_events.push(GameEvent::ImpulseApplied {
                    projectile,
                    target: report.other,
                    impulse: state.velocity * impulse_scale,
                    location: report.location,
                });
            }
        }
        CollisionPolicy::Ignore => {}
    }
}

/// Score a hit for the firing pawn when its round struck another pawn.
fn credit_owner(world: &mut World, owner: EntityId, other: Option<EntityId>) {
    let Some(target) = other.and_then(|id| resolve(world, id)) else {
        return;
    };
    if world.get::<&Pawn>(target).is_err() {
        return;
    }
    let Some(owner) = resolve(world, owner) else {
        return;
    };
    if let Ok(mut score) = world.get::<&mut Score>(owner) {
        score.hits += 1;
    }
}
