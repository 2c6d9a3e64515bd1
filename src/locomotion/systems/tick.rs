//! Locomotion domain: per-frame controller and camera rig systems.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::locomotion::systems::motor::KinematicMotor;
use crate::locomotion::systems::probe::AvianGroundQuery;
use crate::locomotion::{
    AnimationParams, AnimationSink, Animator, CameraRig, CharacterCamera, Collaborators,
    ControllerConfig, ControllerState, FreeFallEvent, JumpedEvent, KinematicBody, LandedEvent,
    LocomotionInput, Player, advance, late_advance,
};

/// Movement phase: jump/gravity, grounded probe and the combined move.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_locomotion(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    sensors: Query<(), With<Sensor>>,
    mut characters: Query<
        (
            Entity,
            &mut Transform,
            &mut ControllerState,
            &ControllerConfig,
            &mut LocomotionInput,
            &mut KinematicBody,
            &Collider,
            Option<&CharacterCamera>,
            Option<&mut AnimationParams>,
        ),
        With<Player>,
    >,
    cameras: Query<&Transform, (With<CameraRig>, Without<ControllerState>)>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut free_fall_events: MessageWriter<FreeFallEvent>,
) {
    let dt = time.delta_secs();

    for (
        entity,
        mut transform,
        mut state,
        config,
        mut input,
        mut body,
        collider,
        camera_link,
        mut animation,
    ) in &mut characters
    {
        let camera = match camera_link.and_then(|link| cameras.get(link.0).ok()) {
            Some(camera) => *camera,
            None => {
                warn_once!("Character {:?} has no camera rig, moving relative to world", entity);
                Transform::IDENTITY
            }
        };

        let ground = AvianGroundQuery {
            spatial_query: &spatial_query,
            sensors: &sensors,
            character: entity,
        };
        let mut motor = KinematicMotor {
            transform: &mut *transform,
            body: &mut *body,
            collider,
            spatial_query: &spatial_query,
            sensors: &sensors,
            filter: SpatialQueryFilter::default().with_excluded_entities([entity]),
            dt,
        };
        let animator = Animator::new(
            animation
                .as_deref_mut()
                .map(|params| params as &mut dyn AnimationSink),
        );
        if !animator.is_attached() {
            debug_once!("Character {:?} has no animation params, signals are dropped", entity);
        }

        let report = advance(
            &mut state,
            config,
            &mut input,
            dt,
            Collaborators {
                ground: &ground,
                motor: &mut motor,
                camera: &camera,
                animator,
            },
        );

        if report.jumped {
            debug!(
                "Jump: entity={:?}, launch_velocity={}",
                entity, report.vertical_velocity
            );
            jumped_events.write(JumpedEvent {
                entity,
                launch_velocity: report.vertical_velocity,
            });
        }

        if report.landed {
            debug!(
                "Landed: entity={:?}, impact_velocity={}",
                entity, report.vertical_velocity
            );
            landed_events.write(LandedEvent {
                entity,
                impact_velocity: report.vertical_velocity,
            });
        } else if report.left_ground {
            debug!("Left ground: entity={:?}", entity);
        }

        if report.entered_free_fall {
            debug!("Free fall: entity={:?}", entity);
            free_fall_events.write(FreeFallEvent { entity });
        }
    }
}

/// Keep each camera target at its character's shoulder before the rig rotates it.
pub(crate) fn follow_characters(
    characters: Query<(&Transform, &CharacterCamera), With<ControllerState>>,
    mut cameras: Query<(&mut Transform, &CameraRig), Without<ControllerState>>,
) {
    for (transform, link) in &characters {
        let Ok((mut camera_transform, rig)) = cameras.get_mut(link.0) else {
            continue;
        };
        camera_transform.translation = transform.translation + Vec3::Y * rig.shoulder_height;
    }
}

/// Camera phase: accumulate look input and write the rig orientation.
pub(crate) fn update_camera_rig(
    time: Res<Time>,
    mut characters: Query<(
        &mut ControllerState,
        &ControllerConfig,
        &LocomotionInput,
        &CharacterCamera,
    )>,
    mut cameras: Query<&mut Transform, (With<CameraRig>, Without<ControllerState>)>,
) {
    let dt = time.delta_secs();

    for (mut state, config, input, link) in &mut characters {
        let Ok(mut camera_transform) = cameras.get_mut(link.0) else {
            continue;
        };
        late_advance(&mut state, config, input, dt, &mut *camera_transform);
    }
}
