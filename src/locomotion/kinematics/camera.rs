//! Locomotion kinematics: camera orientation rig.

use bevy::math::Quat;

use crate::locomotion::kinematics::collaborators::CameraTarget;
use crate::locomotion::kinematics::math::{camera_orientation, clamp_angle};
use crate::locomotion::{ControllerConfig, ControllerState, LocomotionInput};

/// Squared look magnitude below which input is ignored.
pub const LOOK_THRESHOLD: f32 = 0.01;

/// Accumulate look input and write the resulting orientation to the camera target.
///
/// Must run after the character has moved for the frame.
pub fn rotate_camera(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &LocomotionInput,
    dt: f32,
    camera: &mut dyn CameraTarget,
) -> Quat {
    if input.look.length_squared() >= LOOK_THRESHOLD && !config.lock_camera_position {
        state.camera_yaw += input.look.x * dt;
        state.camera_pitch += input.look.y * dt;
    }

    state.camera_yaw = clamp_angle(state.camera_yaw, f32::MIN, f32::MAX);
    state.camera_pitch = clamp_angle(state.camera_pitch, config.bottom_clamp, config.top_clamp);

    let rotation = camera_orientation(
        state.camera_pitch + config.camera_angle_override,
        state.camera_yaw,
    );
    camera.set_rotation(rotation);
    rotation
}
