//! Locomotion kinematics: scalar and angle helpers shared by the tick procedures.
//!
//! Angles are degrees. Yaw 0 faces -Z and positive yaw turns clockwise seen
//! from above (toward +X). Positive pitch tilts the view downward.

use bevy::math::{EulerRot, Quat, Vec3};

/// Lerp with the factor clamped to [0, 1].
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Round to three decimal places, ties to even.
pub fn round_to_millis(value: f32) -> f32 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// Shortest signed difference between two angles, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Wrap an angle back into [-360, 360] with a single additive correction, then clamp.
///
/// Only one period is removed per call.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let mut angle = angle;
    if angle < -360.0 {
        angle += 360.0;
    }
    if angle > 360.0 {
        angle -= 360.0;
    }
    angle.clamp(min, max)
}

/// Critically damped spring toward `target`, treating both values as angles.
///
/// `velocity` is the filter state and is carried between calls. A smoothing
/// time of zero collapses to an immediate snap.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    // Pade approximation of exp(-x)
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // No overshoot past the target
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

/// Yaw rotation about +Y for a heading in degrees.
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians())
}

/// Unit forward vector for a heading in degrees.
pub fn heading_direction(yaw: f32) -> Vec3 {
    yaw_rotation(yaw) * Vec3::NEG_Z
}

/// Heading of a rotation, in [0, 360).
pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    (-yaw.to_degrees()).rem_euclid(360.0)
}

/// Camera orientation from pitch and yaw in degrees, no roll.
pub fn camera_orientation(pitch: f32, yaw: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        -yaw.to_radians(),
        -pitch.to_radians(),
        0.0,
    )
}
