//! Locomotion domain: components and physics layers for third-person movement.

use std::collections::{BTreeMap, HashMap};

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

use crate::locomotion::kinematics::math::yaw_of;
use crate::locomotion::{AnimationSignal, AnimationSink, CameraTarget, ControllerConfig};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces
    Ground,
    /// Player characters
    Player,
    /// Trigger volumes, never block or support
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Mutable per-character controller state, owned by the tick procedures.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct ControllerState {
    pub grounded: bool,
    pub speed: f32,
    pub animation_blend: f32,
    /// Last heading requested by movement input, in degrees
    pub target_rotation: f32,
    /// Filter state of the facing smoother
    pub rotation_velocity: f32,
    pub vertical_velocity: f32,
    pub jump_timeout_remaining: f32,
    pub fall_timeout_remaining: f32,
    pub camera_yaw: f32,
    pub camera_pitch: f32,
}

impl ControllerState {
    /// Fresh state for a newly spawned character.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            grounded: true,
            speed: 0.0,
            animation_blend: 0.0,
            target_rotation: 0.0,
            rotation_velocity: 0.0,
            vertical_velocity: 0.0,
            jump_timeout_remaining: config.jump_timeout,
            fall_timeout_remaining: config.fall_timeout,
            camera_yaw: 0.0,
            camera_pitch: 0.0,
        }
    }
}

/// Input snapshot for one character, refreshed by the input reader each frame.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct LocomotionInput {
    /// x = strafe right, y = forward
    pub move_axis: Vec2,
    /// x = yaw rate, y = pitch rate (positive looks down)
    pub look: Vec2,
    pub sprint: bool,
    /// Latched until released, or cleared by the controller once falling
    pub jump: bool,
    /// Scale speed by stick deflection instead of treating input as full tilt
    pub analog_movement: bool,
}

/// Kinematic body driven by the controller's move commands.
#[derive(Component, Debug, Clone)]
pub struct KinematicBody {
    /// Distance from the body origin down to the feet
    pub feet_offset: f32,
    /// Gap kept between the collider and anything it is moved against
    pub skin_width: f32,
    /// Velocity produced by the last move, read back on the next tick
    pub velocity: Vec3,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            feet_offset: 0.9,
            skin_width: 0.01,
            velocity: Vec3::ZERO,
        }
    }
}

/// Links a character to the entity carrying its camera rig.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterCamera(pub Entity);

/// Camera target entity: follows its character and receives the rig orientation.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    /// Height above the character origin the target sits at
    pub shoulder_height: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            shoulder_height: 1.4,
        }
    }
}

impl CameraTarget for Transform {
    fn yaw(&self) -> f32 {
        yaw_of(self.rotation)
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AnimationParam {
    Bool(bool),
    Float(f32),
}

/// Latest animation parameters published by the controller.
///
/// Animation graphs read these; characters without the component simply do
/// not receive any.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationParams {
    values: HashMap<AnimationSignal, AnimationParam>,
}

impl AnimationParams {
    pub fn get(&self, signal: AnimationSignal) -> Option<AnimationParam> {
        self.values.get(&signal).copied()
    }

    pub fn bool(&self, signal: AnimationSignal) -> bool {
        matches!(self.get(signal), Some(AnimationParam::Bool(true)))
    }

    pub fn float(&self, signal: AnimationSignal) -> f32 {
        match self.get(signal) {
            Some(AnimationParam::Float(value)) => value,
            _ => 0.0,
        }
    }

    /// Current values keyed by parameter name, in name order.
    pub fn named(&self) -> BTreeMap<&'static str, AnimationParam> {
        self.values
            .iter()
            .map(|(signal, value)| (signal.name(), *value))
            .collect()
    }
}

impl AnimationSink for AnimationParams {
    fn set_bool(&mut self, signal: AnimationSignal, value: bool) {
        self.values.insert(signal, AnimationParam::Bool(value));
    }

    fn set_float(&mut self, signal: AnimationSignal, value: f32) {
        self.values.insert(signal, AnimationParam::Float(value));
    }
}
