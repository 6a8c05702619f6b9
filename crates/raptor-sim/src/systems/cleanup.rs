//! Cleanup system: removes entities marked for despawn this tick.

use hecs::{Entity, World};

use raptor_core::components::ProjectileState;

use crate::spent_rounds::SpentRounds;
use crate::world_setup::entity_id;

/// Despawn every entity in the buffer. Uses a pre-allocated buffer to avoid
/// per-tick allocation. Removed projectiles leave their owner behind in
/// `spent`.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    spent: &mut SpentRounds,
    now_secs: f64,
) {
    spent.prune(now_secs);
    for entity in despawn_buffer.drain(..) {
        if let Ok(state) = world.get::<&ProjectileState>(entity).map(|s| *s) {
            spent.record(entity_id(entity), state.owner, now_secs);
        }
        let _ = world.despawn(entity);
    }
}
