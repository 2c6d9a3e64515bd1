//! Capabilities the controller needs from its host.

use bevy::math::{Quat, Vec3};

use crate::locomotion::kinematics::signals::Animator;

/// Volumetric overlap test against the collision world.
pub trait GroundQuery {
    /// True when a non-trigger collider on `layers` overlaps the sphere.
    fn check_sphere(&self, center: Vec3, radius: f32, layers: u32) -> bool;
}

/// No collision world: nothing is ever ground.
impl GroundQuery for () {
    fn check_sphere(&self, _center: Vec3, _radius: f32, _layers: u32) -> bool {
        false
    }
}

/// Executes moves for the character body.
pub trait CharacterMotor {
    /// Feet position of the character.
    fn position(&self) -> Vec3;
    /// Velocity produced by the previous move.
    fn velocity(&self) -> Vec3;
    /// Current facing in degrees.
    fn facing_yaw(&self) -> f32;
    fn set_facing_yaw(&mut self, yaw: f32);
    /// Attempts the displacement and returns the resulting velocity.
    fn move_by(&mut self, displacement: Vec3) -> Vec3;
}

/// The transform the camera follows.
pub trait CameraTarget {
    /// Current heading in degrees.
    fn yaw(&self) -> f32;
    fn set_rotation(&mut self, rotation: Quat);
}

/// Everything one `advance` call talks to.
pub struct Collaborators<'a> {
    pub ground: &'a dyn GroundQuery,
    pub motor: &'a mut dyn CharacterMotor,
    pub camera: &'a dyn CameraTarget,
    pub animator: Animator<'a>,
}
