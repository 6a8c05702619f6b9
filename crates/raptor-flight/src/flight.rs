//! Flight model.
//!
//! Converts the latest axis inputs into smoothed rates and a per-tick
//! movement/rotation delta. Operates on plain data.

use glam::{Quat, Vec3};

use raptor_core::components::{AxisInputs, CameraRig, ControlSurfaces, FlightState};
use raptor_core::config::PawnTuning;
use raptor_core::constants::*;
use raptor_core::types::Transform;

use crate::interp::{interp_to, inverse_lerp_clamped, lerp};
use crate::rotation::{add_local_rotation, from_pitch_yaw_roll};

/// Input to the flight model for a single pawn.
pub struct FlightContext<'a> {
    pub state: FlightState,
    pub inputs: AxisInputs,
    pub dt: f32,
    pub tuning: &'a PawnTuning,
}

/// Output of one flight-model step.
pub struct FlightUpdate {
    pub state: FlightState,
    /// Translation in the pawn's local frame.
    pub local_move: Vec3,
    /// Rotation delta in the pawn's local frame.
    pub rotation_delta: Quat,
}

/// Advance the flight model by one tick.
pub fn step(ctx: &FlightContext) -> FlightUpdate {
    let tuning = ctx.tuning;
    let dt = ctx.dt.max(0.0);
    let mut state = ctx.state;

    let (acceleration, forward_speed) = step_thrust(&state, ctx.inputs.thrust, dt, tuning);
    state.acceleration = acceleration;
    state.forward_speed = forward_speed;

    // Pitch reads last tick's yaw rate for the steering coupling.
    let pitch_target = pitch_target_rate(ctx.inputs.move_up, state.yaw_rate, tuning);
    let roll_target = ROLL_YAW_RATE_GAIN * axis(ctx.inputs.move_right) * tuning.turn_speed;
    let yaw_target = ROLL_YAW_RATE_GAIN * axis(ctx.inputs.yaw) * tuning.yaw_speed;

    state.pitch_rate = interp_to(state.pitch_rate, pitch_target, dt, tuning.rate_interp_speed);
    state.roll_rate = interp_to(state.roll_rate, roll_target, dt, tuning.rate_interp_speed);
    state.yaw_rate = interp_to(state.yaw_rate, yaw_target, dt, tuning.rate_interp_speed);

    FlightUpdate {
        state,
        local_move: Vec3::new(state.forward_speed * dt, 0.0, 0.0),
        rotation_delta: from_pitch_yaw_roll(
            state.pitch_rate * dt,
            state.yaw_rate * dt,
            state.roll_rate * dt,
        ),
    }
}

/// Apply a flight update to a transform: move along the local forward
/// axis, then rotate in the local frame.
pub fn apply(transform: &mut Transform, update: &FlightUpdate) {
    transform.position += transform.rotation * update.local_move;
    transform.rotation = add_local_rotation(transform.rotation, update.rotation_delta);
}

/// New (acceleration, forward speed) after one tick of thrust input.
///
/// With thrust the acceleration ramps by `thrust × acceleration` per
/// second; without it the acceleration sheds `thrust_decay` of itself per
/// second. Both results are clamped to their configured envelopes.
pub fn step_thrust(state: &FlightState, thrust: f32, dt: f32, tuning: &PawnTuning) -> (f32, f32) {
    let thrust = axis(thrust);
    let raw = if thrust.abs() > AXIS_DEADZONE {
        state.acceleration + dt * thrust * tuning.acceleration
    } else {
        state.acceleration * (1.0 - (tuning.thrust_decay * dt).min(1.0))
    };
    let acceleration = raw.clamp(tuning.min_acceleration, tuning.max_acceleration);
    let forward_speed =
        (state.forward_speed + dt * acceleration).clamp(tuning.min_speed, tuning.max_speed);
    (acceleration, forward_speed)
}

/// Stick forward pitches the nose down; any yaw rate bleeds a little pitch.
pub fn pitch_target_rate(move_up: f32, yaw_rate: f32, tuning: &PawnTuning) -> f32 {
    -axis(move_up) * tuning.turn_speed - YAW_PITCH_COUPLING * yaw_rate.abs()
}

/// Camera view offset from the secondary stick. No smoothing.
pub fn camera_offset(inputs: &AxisInputs) -> CameraRig {
    CameraRig {
        yaw: CAMERA_YAW_RANGE * axis(inputs.camera_right),
        pitch: -CAMERA_PITCH_RANGE * axis(inputs.camera_up),
    }
}

/// Flap deflections for the animation layer.
pub fn control_surfaces(inputs: &AxisInputs, tuning: &PawnTuning) -> ControlSurfaces {
    let pitch_in = axis(inputs.move_up);
    let roll_in = axis(inputs.move_right);
    ControlSurfaces {
        pitch_in,
        roll_in,
        right_flap: (pitch_in + roll_in).clamp(-1.0, 1.0) * tuning.max_flap_deflection,
        left_flap: (pitch_in - roll_in).clamp(-1.0, 1.0) * tuning.max_flap_deflection,
    }
}

/// Turbine loop pitch multiplier for the current forward speed.
pub fn turbine_pitch(forward_speed: f32, tuning: &PawnTuning) -> f32 {
    let t = inverse_lerp_clamped(tuning.min_speed, tuning.max_speed, forward_speed);
    lerp(tuning.turbine_min_pitch, tuning.turbine_max_pitch, t)
}

/// Clamp a host axis value to [-1, 1]; NaN reads as no input.
pub fn axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
