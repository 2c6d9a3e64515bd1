//! Locomotion domain: engine-side tests against a headless avian world.

use std::time::Duration;

use avian3d::prelude::*;
use bevy::app::PluginsState;
use bevy::asset::AssetPlugin;
use bevy::ecs::message::MessageReader;
use bevy::ecs::system::RunSystemOnce;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::time::TimeUpdateStrategy;

use crate::locomotion::kinematics::math::camera_orientation;
use crate::locomotion::systems::motor::KinematicMotor;
use crate::locomotion::systems::probe::AvianGroundQuery;
use crate::locomotion::{
    AnimationParams, AnimationSignal, CameraRig, CharacterCamera, CharacterMotor,
    ControllerConfig, ControllerState, FreeFallEvent, GROUNDED_VERTICAL_VELOCITY, GameLayer,
    GroundQuery, JumpedEvent, KinematicBody, LandedEvent, LocomotionInput, LocomotionPlugin,
    LocomotionSet, Player,
};

const FRAME_SECONDS: f64 = 1.0 / 60.0;
const CAPSULE_RADIUS: f32 = 0.3;
const CAPSULE_LENGTH: f32 = 1.2;
const FEET_OFFSET: f32 = CAPSULE_RADIUS + CAPSULE_LENGTH / 2.0;

#[derive(Resource, Debug, Default)]
struct MessageTally {
    jumped: usize,
    landed: Vec<f32>,
    free_fall: usize,
}

fn tally_messages(
    mut tally: ResMut<MessageTally>,
    mut jumped: MessageReader<JumpedEvent>,
    mut landed: MessageReader<LandedEvent>,
    mut free_fall: MessageReader<FreeFallEvent>,
) {
    tally.jumped += jumped.read().count();
    for event in landed.read() {
        tally.landed.push(event.impact_velocity);
    }
    tally.free_fall += free_fall.read().count();
}

// ----------------------------------------------------------------------------
// World setup
// ----------------------------------------------------------------------------

fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin::default(),
        ScenePlugin,
        TransformPlugin,
    ))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        FRAME_SECONDS,
    )))
    .add_plugins(PhysicsPlugins::default());
    app
}

fn locomotion_app() -> App {
    let mut app = physics_app();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<AccumulatedMouseMotion>()
        .init_resource::<MessageTally>()
        .add_plugins(LocomotionPlugin)
        .add_systems(Update, tally_messages.after(LocomotionSet::Movement));
    app
}

fn settle(app: &mut App, frames: usize) {
    if app.plugins_state() == PluginsState::Ready {
        app.finish();
        app.cleanup();
    }
    for _ in 0..frames {
        app.update();
    }
}

/// 10x10 floor with its top face at y = 0.
fn spawn_floor(world: &mut World) {
    world.spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(10.0, 1.0, 10.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn spawn_box(world: &mut World, center: Vec3, sensor: bool) -> Entity {
    let mut entity = world.spawn((
        Transform::from_translation(center),
        RigidBody::Static,
        Collider::cuboid(2.0, 2.0, 2.0),
    ));
    if sensor {
        entity.insert((
            Sensor,
            CollisionLayers::new([GameLayer::Sensor, GameLayer::Ground], [GameLayer::Player]),
        ));
    } else {
        entity.insert(CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]));
    }
    entity.id()
}

/// Player with its camera rig, body origin at `position`.
fn spawn_character(world: &mut World, position: Vec3) -> (Entity, Entity) {
    let config = ControllerConfig::default();
    let rig = world
        .spawn((CameraRig::default(), Transform::from_translation(position)))
        .id();

    let player = world
        .spawn((
            (
                Player,
                ControllerState::new(&config),
                config,
                LocomotionInput::default(),
                AnimationParams::default(),
                CharacterCamera(rig),
            ),
            Transform::from_translation(position),
            (
                RigidBody::Kinematic,
                Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
                KinematicBody::default(),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .id();

    (player, rig)
}

// ----------------------------------------------------------------------------
// Ground probe
// ----------------------------------------------------------------------------

#[test]
fn test_ground_probe_sees_solid_ground_but_not_triggers() {
    let mut app = physics_app();
    spawn_floor(app.world_mut());
    spawn_box(app.world_mut(), Vec3::new(30.0, 5.0, 0.0), true);
    let solid = spawn_box(app.world_mut(), Vec3::new(-30.0, 5.0, 0.0), false);
    settle(&mut app, 5);

    let config = ControllerConfig::default();
    let radius = config.grounded_radius;
    let layers = config.ground_layers;

    let results = app
        .world_mut()
        .run_system_once(
            move |spatial_query: SpatialQuery, sensors: Query<(), With<Sensor>>| {
                let probe = AvianGroundQuery {
                    spatial_query: &spatial_query,
                    sensors: &sensors,
                    character: Entity::PLACEHOLDER,
                };
                let probe_as_solid = AvianGroundQuery {
                    spatial_query: &spatial_query,
                    sensors: &sensors,
                    character: solid,
                };

                [
                    probe.check_sphere(Vec3::new(0.0, 0.1, 0.0), radius, layers),
                    probe.check_sphere(Vec3::new(0.0, 3.0, 0.0), radius, layers),
                    probe.check_sphere(Vec3::new(30.0, 5.0, 0.0), radius, layers),
                    probe.check_sphere(Vec3::new(-30.0, 5.0, 0.0), radius, layers),
                    probe_as_solid.check_sphere(Vec3::new(-30.0, 5.0, 0.0), radius, layers),
                ]
            },
        )
        .expect("probe system should run");

    let [floor, air, trigger, solid_box, own_collider] = results;
    assert!(floor, "probe touching the floor must be grounded");
    assert!(!air);
    assert!(!trigger, "trigger volumes on the ground layer never ground");
    assert!(solid_box);
    assert!(!own_collider, "the character's own collider is excluded");
}

// ----------------------------------------------------------------------------
// Kinematic motor
// ----------------------------------------------------------------------------

#[test]
fn test_motor_reports_velocity_from_distance_moved() {
    let mut app = physics_app();
    spawn_floor(app.world_mut());
    settle(&mut app, 5);

    let dt = 0.05;
    let (free, blocked) = app
        .world_mut()
        .run_system_once(
            move |spatial_query: SpatialQuery, sensors: Query<(), With<Sensor>>| {
                let collider = Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH);
                let run = |start: Vec3, displacement: Vec3| {
                    let mut transform = Transform::from_translation(start);
                    let mut body = KinematicBody::default();
                    let velocity = KinematicMotor {
                        transform: &mut transform,
                        body: &mut body,
                        collider: &collider,
                        spatial_query: &spatial_query,
                        sensors: &sensors,
                        filter: SpatialQueryFilter::default(),
                        dt,
                    }
                    .move_by(displacement);
                    (velocity, transform.translation, body.velocity)
                };

                (
                    run(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.1, 0.0, 0.0)),
                    run(Vec3::new(0.0, FEET_OFFSET + 0.1, 0.0), Vec3::new(0.0, -1.0, 0.0)),
                )
            },
        )
        .expect("motor system should run");

    let (free_velocity, free_end, free_body) = free;
    assert!(free_velocity.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-4));
    assert!(free_end.abs_diff_eq(Vec3::new(0.1, 5.0, 0.0), 1e-5));
    assert_eq!(free_body, free_velocity);

    // Stopped by the floor, short of the requested metre
    let (blocked_velocity, blocked_end, _) = blocked;
    let moved = blocked_end.y - (FEET_OFFSET + 0.1);
    assert!(blocked_end.y > FEET_OFFSET - 0.01);
    assert!(blocked_end.y < FEET_OFFSET + 0.1);
    assert!((blocked_velocity.y - moved / dt).abs() < 1e-3);
    assert!(blocked_velocity.y > -1.0 / dt);
}

// ----------------------------------------------------------------------------
// Plugin wiring
// ----------------------------------------------------------------------------

#[test]
fn test_dropped_character_lands_once_and_camera_follows() {
    let mut app = locomotion_app();
    spawn_floor(app.world_mut());
    let (player, rig) = spawn_character(app.world_mut(), Vec3::new(0.0, FEET_OFFSET + 1.0, 0.0));
    {
        let mut state = app
            .world_mut()
            .get_mut::<ControllerState>(player)
            .expect("player has controller state");
        state.camera_yaw = 35.0;
        state.camera_pitch = 20.0;
    }

    settle(&mut app, 120);

    let tally = app.world().resource::<MessageTally>();
    assert_eq!(tally.landed.len(), 1, "landings: {:?}", tally.landed);
    assert!(tally.landed[0] < GROUNDED_VERTICAL_VELOCITY);
    assert_eq!(tally.free_fall, 1);
    assert_eq!(tally.jumped, 0);

    let state = app.world().get::<ControllerState>(player).unwrap();
    assert!(state.grounded);
    assert_eq!(state.vertical_velocity, GROUNDED_VERTICAL_VELOCITY);

    let player_transform = *app.world().get::<Transform>(player).unwrap();
    assert!(player_transform.translation.y > FEET_OFFSET - 0.02);
    assert!(player_transform.translation.y < FEET_OFFSET + 0.15);

    // Camera phase ran after this frame's move
    let rig_transform = app.world().get::<Transform>(rig).unwrap();
    assert!(
        rig_transform
            .rotation
            .abs_diff_eq(camera_orientation(20.0, 35.0), 1e-5)
    );
    assert_eq!(
        rig_transform.translation,
        player_transform.translation + Vec3::Y * CameraRig::default().shoulder_height
    );

    let params = app.world().get::<AnimationParams>(player).unwrap();
    assert!(params.bool(AnimationSignal::Grounded));
    assert!(!params.bool(AnimationSignal::FreeFall));
}
