//! Engine-independent controller core.
//!
//! Every procedure takes the state record and config explicitly, reads time
//! only through `dt`, and reaches the world only through the collaborator
//! traits, so a fixed input/`dt` sequence always replays the same way.

pub mod camera;
pub mod collaborators;
pub mod grounded;
pub mod horizontal;
pub mod math;
pub mod signals;
pub mod tick;
pub mod vertical;

pub use collaborators::{CameraTarget, CharacterMotor, Collaborators, GroundQuery};
pub use signals::{AnimationSignal, AnimationSink, Animator};
pub use tick::{TickReport, advance, late_advance};
pub use vertical::GROUNDED_VERTICAL_VELOCITY;
