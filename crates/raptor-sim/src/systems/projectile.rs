//! Projectile movement: straight line, optional gravity, rotation follows
//! velocity.

use hecs::World;

use raptor_core::components::{Projectile, ProjectileState};
use raptor_core::constants::GRAVITY;
use raptor_core::types::Transform;
use raptor_flight::rotation::orientation_from_direction;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (_projectile, transform, state)) in
        world.query_mut::<(&Projectile, &mut Transform, &mut ProjectileState)>()
    {
        state.velocity.z -= GRAVITY * state.gravity_scale * dt;
        transform.position += state.velocity * dt;
        if state.gravity_scale > 0.0 {
            transform.rotation = orientation_from_direction(state.velocity);
        }
        state.age_secs += dt;
    }
}
