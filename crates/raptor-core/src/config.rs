//! Simulation configuration, loadable from JSON.
//!
//! Every field has a default matching the stock aircraft, so a config file
//! only needs to name what it changes.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{CollisionPolicy, TriggerMode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field}: min {min} is greater than max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("initial speed {value} is outside [{min}, {max}]")]
    InitialSpeedOutOfRange { value: f32, min: f32, max: f32 },
}

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub pawn: PawnTuning,
    pub weapon: WeaponTuning,
    pub projectile: ProjectileTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pawn: PawnTuning::default(),
            weapon: WeaponTuning::default(),
            projectile: ProjectileTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pawn.validate()?;
        self.weapon.validate()?;
        self.projectile.validate()
    }
}

/// Flight handling, health and feedback tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PawnTuning {
    pub acceleration: f32,
    pub turn_speed: f32,
    pub yaw_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub initial_speed: f32,
    pub min_acceleration: f32,
    pub max_acceleration: f32,
    pub thrust_decay: f32,
    pub rate_interp_speed: f32,
    pub max_health: i32,
    pub collision_damage: i32,
    pub deflect_blend: f32,
    pub max_flap_deflection: f32,
    pub turbine_min_pitch: f32,
    pub turbine_max_pitch: f32,
}

impl Default for PawnTuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            turn_speed: TURN_SPEED,
            yaw_speed: YAW_SPEED,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            initial_speed: INITIAL_SPEED,
            min_acceleration: MIN_ACCELERATION,
            max_acceleration: MAX_ACCELERATION,
            thrust_decay: THRUST_DECAY,
            rate_interp_speed: RATE_INTERP_SPEED,
            max_health: MAX_HEALTH,
            collision_damage: COLLISION_DAMAGE,
            deflect_blend: DEFLECT_BLEND,
            max_flap_deflection: MAX_FLAP_DEFLECTION,
            turbine_min_pitch: TURBINE_MIN_PITCH,
            turbine_max_pitch: TURBINE_MAX_PITCH,
        }
    }
}

impl PawnTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("speed", self.min_speed, self.max_speed)?;
        check_range(
            "acceleration",
            self.min_acceleration,
            self.max_acceleration,
        )?;
        check_range(
            "turbine_pitch",
            self.turbine_min_pitch,
            self.turbine_max_pitch,
        )?;
        if !(self.min_speed..=self.max_speed).contains(&self.initial_speed) {
            return Err(ConfigError::InitialSpeedOutOfRange {
                value: self.initial_speed,
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        check_not_negative("thrust_decay", self.thrust_decay)?;
        check_not_negative("rate_interp_speed", self.rate_interp_speed)?;
        check_not_negative("deflect_blend", self.deflect_blend)?;
        check_positive("max_health", self.max_health as f32)?;
        check_not_negative("collision_damage", self.collision_damage as f32)
    }
}

/// Machine-gun tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    pub trigger_mode: TriggerMode,
    /// Muzzle position in the pawn's local frame.
    pub gun_offset: Vec3,
    /// Minimum seconds between shots.
    pub fire_rate: f32,
    pub ammo: u32,
    /// Per-axis spread half-angle (deg).
    pub cone_deg: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            trigger_mode: TriggerMode::default(),
            gun_offset: Vec3::from_array(GUN_OFFSET),
            fire_rate: FIRE_RATE,
            ammo: MGUN_AMMO,
            cone_deg: MGUN_CONE,
        }
    }
}

impl WeaponTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("fire_rate", self.fire_rate)?;
        check_within("cone_deg", self.cone_deg, 0.0, MAX_CONE)
    }
}

/// Machine-gun round tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub muzzle_speed: f32,
    pub lifetime_secs: f32,
    /// 0 = straight line, 1 = full gravity.
    pub gravity_scale: f32,
    pub collision_policy: CollisionPolicy,
    pub impulse_scale: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            muzzle_speed: MUZZLE_SPEED,
            lifetime_secs: PROJECTILE_LIFETIME,
            gravity_scale: 0.0,
            collision_policy: CollisionPolicy::default(),
            impulse_scale: IMPULSE_SCALE,
        }
    }
}

impl ProjectileTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("lifetime_secs", self.lifetime_secs)?;
        check_not_negative("muzzle_speed", self.muzzle_speed)?;
        check_not_negative("gravity_scale", self.gravity_scale)
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

fn check_within(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn check_not_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
