//! Locomotion kinematics: tick entry points.

use bevy::math::{Quat, Vec3};
use serde::Serialize;

use crate::locomotion::kinematics::camera::rotate_camera;
use crate::locomotion::kinematics::collaborators::{CameraTarget, Collaborators};
use crate::locomotion::kinematics::grounded::check_grounded;
use crate::locomotion::kinematics::horizontal::apply_horizontal_movement;
use crate::locomotion::kinematics::vertical::apply_jump_and_gravity;
use crate::locomotion::{ControllerConfig, ControllerState, LocomotionInput};

/// Side effects of one `advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TickReport {
    pub grounded: bool,
    /// Grounded this tick after being airborne last tick
    pub landed: bool,
    /// Airborne this tick after being grounded last tick
    pub left_ground: bool,
    pub jumped: bool,
    pub free_fall: bool,
    pub entered_free_fall: bool,
    pub speed: f32,
    pub animation_blend: f32,
    pub input_magnitude: f32,
    pub vertical_velocity: f32,
    pub facing_yaw: f32,
    #[serde(skip)]
    pub displacement: Vec3,
    #[serde(skip)]
    pub velocity: Vec3,
}

/// Movement phase: vertical kinematics, grounded probe, then the horizontal move.
pub fn advance(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &mut LocomotionInput,
    dt: f32,
    collaborators: Collaborators,
) -> TickReport {
    let Collaborators {
        ground,
        motor,
        camera,
        mut animator,
    } = collaborators;

    let was_grounded = state.grounded;

    let vertical = apply_jump_and_gravity(state, config, input, dt, &mut animator);
    let grounded = check_grounded(state, config, motor.position(), ground, &mut animator);
    let horizontal =
        apply_horizontal_movement(state, config, input, dt, motor, camera, &mut animator);

    TickReport {
        grounded,
        landed: grounded && !was_grounded,
        left_ground: !grounded && was_grounded,
        jumped: vertical.jumped,
        free_fall: vertical.free_fall,
        entered_free_fall: vertical.entered_free_fall,
        speed: state.speed,
        animation_blend: state.animation_blend,
        input_magnitude: horizontal.input_magnitude,
        vertical_velocity: state.vertical_velocity,
        facing_yaw: horizontal.facing_yaw,
        displacement: horizontal.displacement,
        velocity: horizontal.velocity,
    }
}

/// Camera phase, run once movement for the frame is resolved.
pub fn late_advance(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &LocomotionInput,
    dt: f32,
    camera: &mut dyn CameraTarget,
) -> Quat {
    rotate_camera(state, config, input, dt, camera)
}
