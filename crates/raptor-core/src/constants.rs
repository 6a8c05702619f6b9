//! Simulation constants and default tuning parameters.
//!
//! Distances are world units (centimeters at the default content scale),
//! angles are degrees, rates are per second.

/// Default host frame rate used by the replay tool and tests (Hz).
pub const DEFAULT_FRAME_RATE: u32 = 60;

// --- Flight handling ---

/// Acceleration constant applied per unit of thrust axis.
pub const ACCELERATION: f32 = 500.0;

/// Pitch/roll turn rate scale (deg/s per unit axis).
pub const TURN_SPEED: f32 = 50.0;

/// Yaw turn rate scale (deg/s per unit axis).
pub const YAW_SPEED: f32 = 10.0;

/// Maximum forward speed.
pub const MAX_SPEED: f32 = 10_000.0;

/// Minimum forward speed (the aircraft never stalls below this).
pub const MIN_SPEED: f32 = 1_000.0;

/// Forward speed at spawn.
pub const INITIAL_SPEED: f32 = 1_000.0;

/// Upper bound on forward acceleration.
pub const MAX_ACCELERATION: f32 = 1_000.0;

/// Lower bound on forward acceleration.
pub const MIN_ACCELERATION: f32 = -1_000.0;

/// Fraction of the current acceleration shed per second with no thrust input.
pub const THRUST_DECAY: f32 = 0.5;

/// Interpolation speed used to smooth pitch/yaw/roll rates.
pub const RATE_INTERP_SPEED: f32 = 2.0;

/// Pitch rate lost per unit of absolute yaw rate while steering.
pub const YAW_PITCH_COUPLING: f32 = 0.2;

/// Roll and yaw target rates are this multiple of axis × speed.
pub const ROLL_YAW_RATE_GAIN: f32 = 2.0;

/// Threshold below which an axis value counts as no input.
pub const AXIS_DEADZONE: f32 = 1.0e-8;

// --- Camera ---

/// Camera yaw at full right-axis deflection (deg).
pub const CAMERA_YAW_RANGE: f32 = 180.0;

/// Camera pitch at full up-axis deflection (deg). Pushing up looks down.
pub const CAMERA_PITCH_RANGE: f32 = 90.0;

// --- Control surfaces ---

/// Flap deflection at full command (deg).
pub const MAX_FLAP_DEFLECTION: f32 = 25.0;

// --- Health / damage ---

/// Health at spawn.
pub const MAX_HEALTH: i32 = 100;

/// Health lost per collision.
pub const COLLISION_DAMAGE: i32 = 10;

/// Slerp blend toward the hit-normal orientation on collision.
pub const DEFLECT_BLEND: f32 = 0.025;

// --- Machine gun ---

/// Gun muzzle offset in the pawn's local frame.
pub const GUN_OFFSET: [f32; 3] = [600.0, 0.0, -20.0];

/// Minimum seconds between shots.
pub const FIRE_RATE: f32 = 0.0017;

/// Rounds loaded at spawn.
pub const MGUN_AMMO: u32 = 480;

/// Half-angle of the per-axis spread (deg).
pub const MGUN_CONE: f32 = 0.5;

/// Widest spread half-angle a config may ask for (deg).
pub const MAX_CONE: f32 = 180.0;

// --- Projectiles ---

/// Muzzle velocity added to the firing pawn's forward speed.
pub const MUZZLE_SPEED: f32 = 103_000.0;

/// Projectile lifespan (seconds).
pub const PROJECTILE_LIFETIME: f32 = 5.0;

/// Gravity acceleration applied to projectiles with a non-zero gravity scale.
pub const GRAVITY: f32 = 980.0;

/// Impulse reported to physics bodies = projectile velocity × this scale.
pub const IMPULSE_SCALE: f32 = 20.0;

// --- Turbine audio ---

/// Turbine pitch multiplier at minimum speed.
pub const TURBINE_MIN_PITCH: f32 = 0.6;

/// Turbine pitch multiplier at maximum speed.
pub const TURBINE_MAX_PITCH: f32 = 1.6;
