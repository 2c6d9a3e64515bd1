//! Locomotion domain: third-person controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod dev;
mod events;
pub mod kinematics;
mod resources;
mod systems;


pub use bootstrap::PLAYER_SPAWN;
pub use components::{
    AnimationParam, AnimationParams, CameraRig, CharacterCamera, ControllerState, GameLayer,
    KinematicBody, LocomotionInput, Player,
};
pub use events::{FreeFallEvent, JumpedEvent, LandedEvent};
pub use kinematics::{
    AnimationSignal, AnimationSink, Animator, CameraTarget, CharacterMotor, Collaborators,
    GROUNDED_VERTICAL_VELOCITY, GroundQuery, TickReport, advance, late_advance,
};
pub use resources::{ControllerConfig, LookSettings};

use bevy::prelude::*;
use bevy::transform::TransformSystems;

use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::dev::spawn_test_arena;
use crate::locomotion::systems::{
    follow_characters, read_input, update_camera_rig, update_locomotion,
};

/// Ordering of the controller's work within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Input,
    Movement,
    Camera,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .init_resource::<LookSettings>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<FreeFallEvent>()
            .configure_sets(Update, (LocomotionSet::Input, LocomotionSet::Movement).chain())
            .configure_sets(
                PostUpdate,
                LocomotionSet::Camera.before(TransformSystems::Propagate),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(LocomotionSet::Input))
            .add_systems(Update, update_locomotion.in_set(LocomotionSet::Movement))
            .add_systems(
                PostUpdate,
                (follow_characters, update_camera_rig)
                    .chain()
                    .in_set(LocomotionSet::Camera),
            );
    }
}

/// Test arena with steps, a ledge and a trigger volume.
pub struct TestArenaPlugin;

impl Plugin for TestArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_arena);
    }
}
