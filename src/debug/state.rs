//! Debug domain: state and JSON snapshots.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::locomotion::{AnimationParam, AnimationParams, ControllerConfig, ControllerState};

/// Resource tracking debug tool state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Landings seen since startup
    pub landings: u32,
    /// Jumps seen since startup
    pub jumps: u32,
    /// Hardest landing seen, as a (negative) vertical speed
    pub hardest_landing: f32,
}

#[derive(Serialize)]
struct ControllerSnapshot<'a> {
    state: &'a ControllerState,
    config: &'a ControllerConfig,
    position: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    animation: Option<BTreeMap<&'static str, AnimationParam>>,
}

/// Pretty JSON of a character's controller state and tuning.
pub fn controller_snapshot(
    state: &ControllerState,
    config: &ControllerConfig,
    position: Vec3,
    animation: Option<&AnimationParams>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ControllerSnapshot {
        state,
        config,
        position: position.to_array(),
        animation: animation.map(AnimationParams::named),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::{AnimationSignal, AnimationSink};

    #[test]
    fn test_snapshot_contains_state_and_tuning() {
        let config = ControllerConfig::default();
        let state = ControllerState::new(&config);

        let json = controller_snapshot(&state, &config, Vec3::new(1.0, 2.0, 3.0), None)
            .expect("snapshot should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["state"]["grounded"], serde_json::Value::Bool(true));
        assert_eq!(value["config"]["run_speed"].as_f64(), Some(5.5));
        assert_eq!(value["position"][2].as_f64(), Some(3.0));
        assert!(value.get("animation").is_none());
    }

    #[test]
    fn test_snapshot_lists_animation_params_by_name() {
        let config = ControllerConfig::default();
        let state = ControllerState::new(&config);
        let mut params = AnimationParams::default();
        params.set_bool(AnimationSignal::FreeFall, true);
        params.set_float(AnimationSignal::MotionSpeed, 0.5);

        let json = controller_snapshot(&state, &config, Vec3::ZERO, Some(&params))
            .expect("snapshot should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["animation"]["FreeFall"]["Bool"], serde_json::Value::Bool(true));
        assert_eq!(value["animation"]["MotionSpeed"]["Float"].as_f64(), Some(0.5));
        assert!(value["animation"].get("Speed").is_none());
    }
}
