//! Locomotion domain: tuning and input settings.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::GameLayer;

/// Per-session tuning for one character controller.
///
/// Loaded once as a resource and cloned onto each character at spawn. Values
/// are taken as-is: out-of-range tuning is not rejected. The per-character copy
/// is fixed for the session except `lock_camera_position`, which debug tools
/// may flip at runtime.
#[derive(Resource, Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Time to turn toward the movement heading, expected in [0, 0.3]
    pub rotation_smooth_time: f32,
    pub speed_change_rate: f32,
    pub jump_height: f32,
    /// Expected negative
    pub gravity: f32,
    /// Grounded time required before the next jump
    pub jump_timeout: f32,
    /// Airborne time before the free-fall state kicks in
    pub fall_timeout: f32,
    /// Vertical offset of the probe sphere, subtracted from the feet position
    pub grounded_offset: f32,
    pub grounded_radius: f32,
    /// Collision layer bits counted as ground
    pub ground_layers: u32,
    /// Highest pitch the camera may reach, in degrees
    pub top_clamp: f32,
    /// Lowest pitch the camera may reach, in degrees
    pub bottom_clamp: f32,
    /// Extra pitch added on top of the accumulated value
    pub camera_angle_override: f32,
    /// Freezes look accumulation; the only field toggled at runtime
    pub lock_camera_position: bool,
    /// Fall speed past which gravity stops integrating
    pub terminal_velocity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.5,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            gravity: -15.0,
            jump_timeout: 0.5,
            fall_timeout: 0.15,
            grounded_offset: -0.14,
            grounded_radius: 0.28,
            ground_layers: GameLayer::Ground.to_bits(),
            top_clamp: 70.0,
            bottom_clamp: -30.0,
            camera_angle_override: 0.0,
            lock_camera_position: false,
            terminal_velocity: 53.0,
        }
    }
}

impl ControllerConfig {
    /// Launch speed needed to reach `jump_height` under `gravity`.
    /// Uses h = v^2 / (2g) solved for v.
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }
}

/// Mouse look scaling applied by the input reader.
#[derive(Resource, Debug, Clone)]
pub struct LookSettings {
    /// Look units produced per pixel of mouse motion
    pub mouse_sensitivity: f32,
    pub invert_y: bool,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 12.0,
            invert_y: false,
        }
    }
}
