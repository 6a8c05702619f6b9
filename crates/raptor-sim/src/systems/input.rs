//! Input system: applies queued host inputs to pawns.
//!
//! Axis values are latched into `AxisInputs` until the host sends a new
//! value. Fire press/release only matters in `TriggerMode::PressRelease`.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, warn};

use raptor_core::commands::InputEvent;
use raptor_core::components::{AxisInputs, Health, Pawn, Weapon};
use raptor_core::enums::*;
use raptor_core::events::AudioEvent;
use raptor_core::types::EntityId;
use raptor_flight::flight::axis;

use crate::world_setup::resolve;

/// Drain the input queue.
pub fn run(
    world: &mut World,
    queue: &mut VecDeque<(EntityId, InputEvent)>,
    trigger_mode: TriggerMode,
    audio_events: &mut Vec<AudioEvent>,
) {
    while let Some((id, event)) = queue.pop_front() {
        let Some(entity) = resolve(world, id) else {
            warn!("dropping input for unknown entity {id:?}");
            continue;
        };
        let Ok((_pawn, inputs, weapon, health)) =
            world.query_one_mut::<(&Pawn, &mut AxisInputs, &mut Weapon, &Health)>(entity)
        else {
            warn!("dropping input for non-pawn entity {id:?}");
            continue;
        };
        if health.status == PawnStatus::Destroyed {
            continue;
        }

        match event {
            InputEvent::Axis { axis: which, value } => set_axis(inputs, which, axis(value)),
            InputEvent::Action { action } => {
                if trigger_mode != TriggerMode::PressRelease {
                    debug!("ignoring {action:?} in hold-axis trigger mode");
                    continue;
                }
                apply_action(id, weapon, action, audio_events);
            }
        }
    }
}

fn set_axis(inputs: &mut AxisInputs, which: InputAxis, value: f32) {
    match which {
        InputAxis::Thrust => inputs.thrust = value,
        InputAxis::MoveUp => inputs.move_up = value,
        InputAxis::MoveRight => inputs.move_right = value,
        InputAxis::Yaw => inputs.yaw = value,
        InputAxis::MGun => inputs.trigger = value,
        InputAxis::CameraRight => inputs.camera_right = value,
        InputAxis::CameraUp => inputs.camera_up = value,
    }
}

fn apply_action(
    pawn: EntityId,
    weapon: &mut Weapon,
    action: InputAction,
    audio_events: &mut Vec<AudioEvent>,
) {
    match action {
        InputAction::FirePressed => {
            if weapon.ammo == 0 {
                audio_events.push(AudioEvent::AmmoEmpty { pawn });
            } else if !weapon.firing {
                weapon.firing = true;
                weapon.dry_fire_latched = false;
                audio_events.push(AudioEvent::FireLoopStart { pawn });
            }
        }
        InputAction::FireReleased => {
            if weapon.firing {
                weapon.firing = false;
                audio_events.push(AudioEvent::FireLoopStop { pawn });
            }
        }
    }
}
