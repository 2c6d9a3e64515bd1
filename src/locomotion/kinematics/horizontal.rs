//! Locomotion kinematics: speed smoothing, facing and the combined move.

use bevy::math::{Vec2, Vec3};

use crate::locomotion::kinematics::collaborators::{CameraTarget, CharacterMotor};
use crate::locomotion::kinematics::math::{
    heading_direction, lerp, round_to_millis, smooth_damp_angle,
};
use crate::locomotion::kinematics::signals::{AnimationSignal, Animator};
use crate::locomotion::{ControllerConfig, ControllerState, LocomotionInput};

/// Speed error tolerated before smoothing kicks in.
pub const SPEED_OFFSET: f32 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HorizontalOutcome {
    pub target_speed: f32,
    pub input_magnitude: f32,
    pub displacement: Vec3,
    /// Velocity reported by the motor after the move
    pub velocity: Vec3,
    pub facing_yaw: f32,
}

/// Speed the input asks for, before analog scaling.
pub fn target_speed(config: &ControllerConfig, input: &LocomotionInput) -> f32 {
    if input.move_axis == Vec2::ZERO {
        return 0.0;
    }
    if input.sprint {
        config.run_speed
    } else {
        config.walk_speed
    }
}

pub fn input_magnitude(input: &LocomotionInput) -> f32 {
    if input.analog_movement {
        input.move_axis.length()
    } else {
        1.0
    }
}

/// Next ground speed given the speed the body actually achieved.
///
/// Outside the dead band the value eases toward the target and is quantized to
/// three decimals; inside it the target is taken exactly.
pub fn smooth_speed(
    current_horizontal_speed: f32,
    target_speed: f32,
    input_magnitude: f32,
    speed_change_rate: f32,
    dt: f32,
) -> f32 {
    if current_horizontal_speed < target_speed - SPEED_OFFSET
        || current_horizontal_speed > target_speed + SPEED_OFFSET
    {
        round_to_millis(lerp(
            current_horizontal_speed,
            target_speed * input_magnitude,
            dt * speed_change_rate,
        ))
    } else {
        target_speed
    }
}

/// Input heading relative to the camera, in degrees.
pub fn camera_relative_heading(move_axis: Vec2, camera_yaw: f32) -> f32 {
    move_axis.x.atan2(move_axis.y).to_degrees() + camera_yaw
}

pub fn apply_horizontal_movement(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &LocomotionInput,
    dt: f32,
    motor: &mut dyn CharacterMotor,
    camera: &dyn CameraTarget,
    animator: &mut Animator,
) -> HorizontalOutcome {
    let target_speed = target_speed(config, input);
    let input_magnitude = input_magnitude(input);

    let velocity = motor.velocity();
    let current_horizontal_speed = Vec3::new(velocity.x, 0.0, velocity.z).length();

    state.speed = smooth_speed(
        current_horizontal_speed,
        target_speed,
        input_magnitude,
        config.speed_change_rate,
        dt,
    );
    state.animation_blend = lerp(
        state.animation_blend,
        target_speed,
        dt * config.speed_change_rate,
    );

    if input.move_axis != Vec2::ZERO {
        state.target_rotation = camera_relative_heading(input.move_axis, camera.yaw());
        let facing = smooth_damp_angle(
            motor.facing_yaw(),
            state.target_rotation,
            &mut state.rotation_velocity,
            config.rotation_smooth_time,
            dt,
        );
        motor.set_facing_yaw(facing);
    }

    let displacement = heading_direction(state.target_rotation) * (state.speed * dt)
        + Vec3::new(0.0, state.vertical_velocity, 0.0) * dt;
    let velocity = motor.move_by(displacement);

    animator.set_float(AnimationSignal::Speed, state.animation_blend);
    animator.set_float(AnimationSignal::MotionSpeed, input_magnitude);

    HorizontalOutcome {
        target_speed,
        input_magnitude,
        displacement,
        velocity,
        facing_yaw: motor.facing_yaw(),
    }
}
