//! Third-person character controller: a host-independent tick with a Bevy
//! and avian3d front end.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod locomotion;
