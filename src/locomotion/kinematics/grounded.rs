//! Locomotion kinematics: grounded probe.

use bevy::math::Vec3;

use crate::locomotion::kinematics::collaborators::GroundQuery;
use crate::locomotion::kinematics::signals::{AnimationSignal, Animator};
use crate::locomotion::{ControllerConfig, ControllerState};

/// Center of the probe sphere for a character standing at `feet`.
pub fn probe_center(feet: Vec3, config: &ControllerConfig) -> Vec3 {
    Vec3::new(feet.x, feet.y - config.grounded_offset, feet.z)
}

/// Refresh `state.grounded` from a sphere query below the character.
pub fn check_grounded(
    state: &mut ControllerState,
    config: &ControllerConfig,
    feet: Vec3,
    ground: &dyn GroundQuery,
    animator: &mut Animator,
) -> bool {
    let center = probe_center(feet, config);
    state.grounded = ground.check_sphere(center, config.grounded_radius, config.ground_layers);
    animator.set_bool(AnimationSignal::Grounded, state.grounded);
    state.grounded
}
