//! Locomotion domain: system modules and the engine-side collaborators.

pub(crate) mod input;
pub(crate) mod motor;
pub(crate) mod probe;
pub(crate) mod tick;

pub(crate) use input::read_input;
pub(crate) use tick::{follow_characters, update_camera_rig, update_locomotion};

#[cfg(test)]
mod tests;
