//! Locomotion domain: test arena for exercising the controller.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::GameLayer;

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let platform_material = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let trigger_material = materials.add(Color::srgba(0.3, 0.5, 0.9, 0.3));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(40.0, 1.0, 40.0))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 1.0, 40.0),
        ground_layers,
    ));

    // Steps of increasing height, each reachable from the one before
    for (index, height) in [0.5_f32, 1.0, 1.5].into_iter().enumerate() {
        let x = 4.0 + index as f32 * 2.5;
        commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.5, height, 2.5))),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_xyz(x, height / 2.0, -4.0),
            RigidBody::Static,
            Collider::cuboid(2.5, height, 2.5),
            ground_layers,
        ));
    }

    // High ledge to fall from
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.5, 4.0))),
        MeshMaterial3d(platform_material),
        Transform::from_xyz(-6.0, 4.0, -6.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 0.5, 4.0),
        ground_layers,
    ));

    // Trigger volume on the floor: overlaps the probe but never grounds the player
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 2.0, 3.0))),
        MeshMaterial3d(trigger_material),
        Transform::from_xyz(-5.0, 1.0, 5.0),
        RigidBody::Static,
        Collider::cuboid(3.0, 2.0, 3.0),
        Sensor,
        CollisionLayers::new([GameLayer::Sensor, GameLayer::Ground], [GameLayer::Player]),
    ));
}
