//! Locomotion domain: player and camera rig bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    AnimationParams, CameraRig, CharacterCamera, ControllerConfig, ControllerState, GameLayer,
    KinematicBody, LocomotionInput, Player,
};

const CAPSULE_RADIUS: f32 = 0.3;
const CAPSULE_LENGTH: f32 = 1.2;

/// Camera position relative to the rig pivot: over the right shoulder, behind.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.6, 0.3, 4.0);

pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Spawn the camera rig and the player it follows.
pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let camera = commands
        .spawn((
            CameraRig::default(),
            Transform::from_translation(PLAYER_SPAWN),
            Visibility::default(),
        ))
        .with_children(|rig| {
            rig.spawn((Camera3d::default(), Transform::from_translation(CAMERA_OFFSET)));
        })
        .id();

    let feet_offset = CAPSULE_RADIUS + CAPSULE_LENGTH / 2.0;

    commands.spawn((
        // Identity & controller
        (
            Player,
            config.clone(),
            ControllerState::new(&config),
            LocomotionInput::default(),
            AnimationParams::default(),
            CharacterCamera(camera),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
            KinematicBody {
                feet_offset,
                ..default()
            },
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));

    info!(
        "Spawning player: walk_speed={}, run_speed={}, jump_height={}, gravity={}",
        config.walk_speed, config.run_speed, config.jump_height, config.gravity
    );
}
