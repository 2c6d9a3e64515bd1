//! Debug tools for tuning the controller at runtime.
//!
//! - F2: toggle camera lock
//! - F3: log controller state as JSON
//! - F4: reset the player to its spawn point

mod state;
mod systems;

pub use state::{DebugState, controller_snapshot};

use bevy::prelude::*;

use crate::debug::systems::{
    dump_controller_state, reset_player, toggle_camera_lock, track_jumps_and_landings,
};
use crate::locomotion::LocomotionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_camera_lock, dump_controller_state, reset_player)
                    .chain()
                    .before(LocomotionSet::Movement),
            )
            .add_systems(Update, track_jumps_and_landings.after(LocomotionSet::Movement));
    }
}
