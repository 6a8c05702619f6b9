//! Flight integration system.
//!
//! Runs the flight model for every live pawn, then moves and rotates it.
//! Also refreshes the cosmetic camera offset and flap deflections.

use hecs::World;

use raptor_core::components::*;
use raptor_core::config::PawnTuning;
use raptor_core::enums::PawnStatus;
use raptor_core::types::Transform;
use raptor_flight::flight::{self as model, FlightContext};

pub fn run(world: &mut World, tuning: &PawnTuning, dt: f32) {
    for (_entity, (_pawn, transform, flight, inputs, camera, surfaces, health)) in world
        .query_mut::<(
            &Pawn,
            &mut Transform,
            &mut FlightState,
            &AxisInputs,
            &mut CameraRig,
            &mut ControlSurfaces,
            &Health,
        )>()
    {
        if health.status == PawnStatus::Destroyed {
            continue;
        }

        let update = model::step(&FlightContext {
            state: *flight,
            inputs: *inputs,
            dt,
            tuning,
        });
        *flight = update.state;
        model::apply(transform, &update);

        *camera = model::camera_offset(inputs);
        *surfaces = model::control_surfaces(inputs, tuning);
    }
}
