//! Rotation helpers in the +X forward, +Y right, +Z up frame.

use glam::{Quat, Vec3};

/// Build a rotation from pitch/yaw/roll in degrees, applied yaw first,
/// then pitch, then roll (intrinsic).
pub fn from_pitch_yaw_roll(pitch_deg: f32, yaw_deg: f32, roll_deg: f32) -> Quat {
    Quat::from_rotation_z(yaw_deg.to_radians())
        * Quat::from_rotation_y(-pitch_deg.to_radians())
        * Quat::from_rotation_x(-roll_deg.to_radians())
}

/// Apply a rotation delta in the entity's local frame.
pub fn add_local_rotation(rotation: Quat, delta: Quat) -> Quat {
    (rotation * delta).normalize()
}

/// Zero-roll orientation whose forward axis points along `direction`.
/// A zero-length direction yields identity.
pub fn orientation_from_direction(direction: Vec3) -> Quat {
    let Some(dir) = direction.try_normalize() else {
        return Quat::IDENTITY;
    };
    let yaw = dir.y.atan2(dir.x);
    let pitch = dir.z.atan2((dir.x * dir.x + dir.y * dir.y).sqrt());
    Quat::from_rotation_z(yaw) * Quat::from_rotation_y(-pitch)
}

/// Nudge `rotation` toward the orientation of a hit-surface normal.
pub fn deflect_toward_normal(rotation: Quat, normal: Vec3, blend: f32) -> Quat {
    let target = orientation_from_direction(normal);
    rotation.slerp(target, blend.clamp(0.0, 1.0)).normalize()
}

/// Angle in degrees between the forward axes of two rotations.
pub fn forward_angle_deg(a: Quat, b: Quat) -> f32 {
    let fa = a * Vec3::X;
    let fb = b * Vec3::X;
    fa.dot(fb).clamp(-1.0, 1.0).acos().to_degrees()
}
