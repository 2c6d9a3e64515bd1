//! Locomotion domain: messages for jump and landing transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub launch_velocity: f32,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    /// Vertical speed at the moment of landing
    pub impact_velocity: f32,
}

impl Message for LandedEvent {}

#[derive(Debug)]
pub struct FreeFallEvent {
    pub entity: Entity,
}

impl Message for FreeFallEvent {}
