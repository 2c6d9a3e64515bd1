//! Content domain: data-driven controller tuning.

mod loader;

pub use loader::{ConfigLoadError, load_controller_config, parse_controller_config};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::locomotion::ControllerConfig;

pub const DEFAULT_CONFIG_PATH: &str = "assets/data/controller.ron";

/// Loads `ControllerConfig` from RON when the app is built.
/// Falls back to the built-in defaults if the file is missing or malformed.
pub struct ContentPlugin {
    pub config_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_controller_config(&self.config_path) {
            Ok(config) => {
                info!(
                    "Loaded controller tuning from {}",
                    self.config_path.display()
                );
                config
            }
            Err(e) => {
                warn!("{}, using default controller tuning", e);
                ControllerConfig::default()
            }
        };

        app.insert_resource(config);
    }
}
