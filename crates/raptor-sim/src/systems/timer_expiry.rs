//! Timer expiry system: fires due cooldown and lifespan timers.

use hecs::{Entity, World};
use log::debug;

use raptor_core::components::Weapon;
use raptor_core::enums::RemovalReason;
use raptor_core::events::GameEvent;
use raptor_flight::weapon::on_cooldown_expired;

use crate::timers::{Timer, TimerKind, TimerQueue};
use crate::world_setup::entity_id;

/// Fire every timer due at `now_secs`. Timers whose entity no longer exists
/// are dropped.
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    now_secs: f64,
    due_buffer: &mut Vec<Timer>,
    despawn_buffer: &mut Vec<Entity>,
    game_events: &mut Vec<GameEvent>,
) {
    due_buffer.clear();
    timers.drain_due(now_secs, due_buffer);

    for timer in due_buffer.drain(..) {
        if !world.contains(timer.entity) {
            debug!("{:?} timer for despawned entity ignored", timer.kind);
            continue;
        }

        match timer.kind {
            TimerKind::ShotCooldown => {
                if let Ok(mut weapon) = world.get::<&mut Weapon>(timer.entity) {
                    on_cooldown_expired(&mut weapon);
                }
            }
            TimerKind::LifeSpan => {
                if !despawn_buffer.contains(&timer.entity) {
                    despawn_buffer.push(timer.entity);
                    game_events.push(GameEvent::ProjectileRemoved {
                        projectile: entity_id(timer.entity),
                        reason: RemovalReason::LifetimeExpired,
                    });
                }
            }
        }
    }
}
