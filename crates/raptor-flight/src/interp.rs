//! Scalar interpolation helpers.

/// Squared distance below which `interp_to` snaps to the target.
const SNAP_DISTANCE_SQ: f32 = 1.0e-8;

/// Frame-rate aware exponential approach of `current` toward `target`.
///
/// Each call covers `clamp(dt * speed, 0, 1)` of the remaining distance, so
/// the result never overshoots. A non-positive `speed` jumps to the target.
pub fn interp_to(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }

    let dist = target - current;
    if dist * dist < SNAP_DISTANCE_SQ {
        return target;
    }

    current + dist * (dt * speed).clamp(0.0, 1.0)
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Where `value` sits in [min, max], clamped to [0, 1]. A degenerate range
/// maps everything to 0.
pub fn inverse_lerp_clamped(min: f32, max: f32, value: f32) -> f32 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}
