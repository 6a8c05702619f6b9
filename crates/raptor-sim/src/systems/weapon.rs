//! Weapon system: trigger handling, fire gating and projectile spawning.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use raptor_core::components::*;
use raptor_core::config::SimConfig;
use raptor_core::enums::*;
use raptor_core::events::{AudioEvent, GameEvent};
use raptor_core::types::Transform;
use raptor_flight::weapon as gun;

use crate::timers::{TimerKind, TimerQueue};
use crate::world_setup::{entity_id, spawn_projectile};

struct ShotRequest {
    owner: Entity,
    muzzle: Transform,
    velocity: Vec3,
    spread_deg: Vec3,
}

/// Run the weapon controllers of every live pawn for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    timers: &mut TimerQueue,
    now_secs: f64,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let mode = config.weapon.trigger_mode;
    let mut shots: Vec<ShotRequest> = Vec::new();

    for (entity, (_pawn, transform, flight, inputs, weapon, health)) in world.query_mut::<(
        &Pawn,
        &Transform,
        &FlightState,
        &AxisInputs,
        &mut Weapon,
        &Health,
    )>() {
        if health.status == PawnStatus::Destroyed {
            continue;
        }

        gun::settle_state(weapon);

        let pawn = entity_id(entity);
        if !gun::trigger_held(mode, weapon, inputs) {
            if mode == TriggerMode::HoldAxis {
                weapon.dry_fire_latched = false;
            }
            continue;
        }

        match gun::try_fire(weapon) {
            FireOutcome::Fired => {
                let spread_deg = gun::sample_spread(rng, config.weapon.cone_deg);
                let muzzle = gun::muzzle_transform(transform, config.weapon.gun_offset, spread_deg);
                let velocity = gun::launch_velocity(
                    &muzzle,
                    config.projectile.muzzle_speed,
                    flight.forward_speed,
                );
                shots.push(ShotRequest {
                    owner: entity,
                    muzzle,
                    velocity,
                    spread_deg,
                });
                timers.schedule(entity, TimerKind::ShotCooldown, now_secs, config.weapon.fire_rate);

                if mode == TriggerMode::HoldAxis {
                    audio_events.push(AudioEvent::FireShot {
                        pawn,
                        location: transform.position,
                    });
                }
                if mode == TriggerMode::PressRelease && weapon.ammo == 0 {
                    weapon.firing = false;
                    weapon.dry_fire_latched = true;
                    audio_events.push(AudioEvent::FireLoopStop { pawn });
                    audio_events.push(AudioEvent::AmmoEmpty { pawn });
                }
            }
            FireOutcome::Empty => {
                if !weapon.dry_fire_latched {
                    weapon.dry_fire_latched = true;
                    audio_events.push(AudioEvent::AmmoEmpty { pawn });
                }
                if weapon.firing {
                    weapon.firing = false;
                    audio_events.push(AudioEvent::FireLoopStop { pawn });
                }
            }
            FireOutcome::CoolingDown => {}
        }
    }

    for shot in shots {
        let projectile = spawn_projectile(
            world,
            shot.muzzle,
            shot.velocity,
            shot.owner,
            shot.spread_deg,
            &config.projectile,
        );
        timers.schedule(
            projectile,
            TimerKind::LifeSpan,
            now_secs,
            config.projectile.lifetime_secs,
        );
        debug!(
            "pawn {:?} fired projectile {:?}",
            entity_id(shot.owner),
            entity_id(projectile)
        );
        game_events.push(GameEvent::ProjectileSpawned {
            projectile: entity_id(projectile),
            owner: entity_id(shot.owner),
            location: shot.muzzle.position,
            velocity: shot.velocity,
        });
    }
}
