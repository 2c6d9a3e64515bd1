//! Debug domain: hotkeys for runtime tweaks.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::state::{DebugState, controller_snapshot};
use crate::locomotion::{
    AnimationParams, ControllerConfig, ControllerState, JumpedEvent, KinematicBody, LandedEvent,
    PLAYER_SPAWN, Player,
};

/// Toggle the camera lock on every player with F2
pub(crate) fn toggle_camera_lock(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut ControllerConfig, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for mut config in &mut query {
        config.lock_camera_position = !config.lock_camera_position;
        info!("Camera lock: {}", config.lock_camera_position);
    }
}

/// Log controller state as JSON with F3
pub(crate) fn dump_controller_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    debug_state: Res<DebugState>,
    query: Query<
        (
            Entity,
            &ControllerState,
            &ControllerConfig,
            &Transform,
            Option<&AnimationParams>,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (entity, state, config, transform, animation) in &query {
        match controller_snapshot(state, config, transform.translation, animation) {
            Ok(json) => info!(
                "Controller {:?} (jumps={}, landings={}, hardest_landing={}):\n{}",
                entity, debug_state.jumps, debug_state.landings, debug_state.hardest_landing, json
            ),
            Err(e) => error!("Failed to serialize controller state: {}", e),
        }
    }
}

/// Put the player back at spawn with F4
pub(crate) fn reset_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<
        (
            &mut Transform,
            &mut ControllerState,
            &ControllerConfig,
            &mut KinematicBody,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    for (mut transform, mut state, config, mut body) in &mut query {
        let camera_yaw = state.camera_yaw;
        let camera_pitch = state.camera_pitch;

        *state = ControllerState::new(config);
        state.camera_yaw = camera_yaw;
        state.camera_pitch = camera_pitch;

        transform.translation = PLAYER_SPAWN;
        body.velocity = Vec3::ZERO;
        info!("Player reset to spawn");
    }
}

pub(crate) fn track_jumps_and_landings(
    mut debug_state: ResMut<DebugState>,
    mut jumped_events: MessageReader<JumpedEvent>,
    mut landed_events: MessageReader<LandedEvent>,
) {
    for _ in jumped_events.read() {
        debug_state.jumps += 1;
    }

    for event in landed_events.read() {
        debug_state.landings += 1;
        debug_state.hardest_landing = debug_state.hardest_landing.min(event.impact_velocity);
    }
}
