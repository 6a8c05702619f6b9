//! Machine-gun fire gate and muzzle geometry.
//!
//! The gate is `Idle → Firing → CooldownWait → Idle`. Firing clears
//! `can_fire`; the caller schedules a cooldown timer and calls
//! `on_cooldown_expired` when it fires.

use glam::Vec3;
use rand::Rng;

use raptor_core::components::{AxisInputs, Weapon};
use raptor_core::config::WeaponTuning;
use raptor_core::constants::MAX_CONE;
use raptor_core::enums::{FireOutcome, TriggerMode, WeaponState};
use raptor_core::types::Transform;

use crate::rotation::{add_local_rotation, from_pitch_yaw_roll};

/// Fresh weapon loaded per the tuning.
pub fn new_weapon(tuning: &WeaponTuning) -> Weapon {
    Weapon {
        ammo: tuning.ammo,
        can_fire: true,
        firing: false,
        dry_fire_latched: false,
        state: WeaponState::Idle,
        shots_fired: 0,
    }
}

/// Whether the trigger currently asks for a shot.
pub fn trigger_held(mode: TriggerMode, weapon: &Weapon, inputs: &AxisInputs) -> bool {
    match mode {
        TriggerMode::HoldAxis => inputs.trigger > 0.0,
        TriggerMode::PressRelease => weapon.firing,
    }
}

/// Attempt one shot. On success ammo drops by one and the cooldown starts.
/// Empty and cooling-down attempts change nothing.
pub fn try_fire(weapon: &mut Weapon) -> FireOutcome {
    if weapon.ammo == 0 {
        return FireOutcome::Empty;
    }
    if !weapon.can_fire {
        return FireOutcome::CoolingDown;
    }

    weapon.ammo -= 1;
    weapon.can_fire = false;
    weapon.state = WeaponState::Firing;
    weapon.shots_fired += 1;
    FireOutcome::Fired
}

/// Settle last tick's `Firing` into the waiting state. Called once per tick
/// before any fire attempt.
pub fn settle_state(weapon: &mut Weapon) {
    if weapon.state == WeaponState::Firing {
        weapon.state = if weapon.can_fire {
            WeaponState::Idle
        } else {
            WeaponState::CooldownWait
        };
    }
}

/// Cooldown timer expiry.
pub fn on_cooldown_expired(weapon: &mut Weapon) {
    weapon.can_fire = true;
    if weapon.state == WeaponState::CooldownWait {
        weapon.state = WeaponState::Idle;
    }
}

/// Independent uniform spread on each axis in [-cone, cone] degrees,
/// returned as (pitch, yaw, roll).
pub fn sample_spread<R: Rng>(rng: &mut R, cone_deg: f32) -> Vec3 {
    if cone_deg.is_nan() || cone_deg <= 0.0 {
        return Vec3::ZERO;
    }
    let cone_deg = cone_deg.min(MAX_CONE);
    Vec3::new(
        rng.gen_range(-cone_deg..=cone_deg),
        rng.gen_range(-cone_deg..=cone_deg),
        rng.gen_range(-cone_deg..=cone_deg),
    )
}

/// Spawn transform of a round: the gun offset rotated into world space,
/// aimed along the pawn's orientation with the spread applied locally.
pub fn muzzle_transform(pawn: &Transform, gun_offset: Vec3, spread_deg: Vec3) -> Transform {
    let spread = from_pitch_yaw_roll(spread_deg.x, spread_deg.y, spread_deg.z);
    Transform::new(
        pawn.transform_point(gun_offset),
        add_local_rotation(pawn.rotation, spread),
    )
}

/// Launch velocity: muzzle speed plus the firing pawn's forward speed,
/// along the round's forward axis.
pub fn launch_velocity(muzzle: &Transform, muzzle_speed: f32, pawn_speed: f32) -> Vec3 {
    muzzle.forward() * (muzzle_speed + pawn_speed)
}
