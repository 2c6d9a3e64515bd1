//! Locomotion domain: input sampling into each player's snapshot.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::locomotion::{LocomotionInput, LookSettings, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    look_settings: Res<LookSettings>,
    mut query: Query<&mut LocomotionInput, With<Player>>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let mut look = mouse_motion.delta * look_settings.mouse_sensitivity;
    if look_settings.invert_y {
        look.y = -look.y;
    }

    let sprint = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for mut input in &mut query {
        input.move_axis = Vec2::new(x, y);
        input.look = look;
        input.sprint = sprint;
        input.analog_movement = false;

        // Jump latches on press; the controller may clear it before release
        if keyboard.just_pressed(KeyCode::Space) {
            input.jump = true;
        }
        if keyboard.just_released(KeyCode::Space) {
            input.jump = false;
        }
    }
}
