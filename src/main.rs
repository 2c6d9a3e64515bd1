use avian3d::prelude::*;
use bevy::prelude::*;

use stride_rig::content::ContentPlugin;
use stride_rig::locomotion::{LocomotionPlugin, TestArenaPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride Rig".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        ContentPlugin::default(),
        LocomotionPlugin,
        TestArenaPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(stride_rig::debug::DebugPlugin);

    app.run();
}
