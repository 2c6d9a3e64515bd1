//! Locomotion kinematics: jump, fall timeouts and gravity.
//!
//! Level triggered on `state.grounded` as left by the previous tick's probe.

use crate::locomotion::kinematics::signals::{AnimationSignal, Animator};
use crate::locomotion::{ControllerConfig, ControllerState, LocomotionInput};

/// Vertical speed held while resting on the ground.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// What the vertical step did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalOutcome {
    pub jumped: bool,
    pub free_fall: bool,
    /// Fall timeout ran out on this tick
    pub entered_free_fall: bool,
}

pub fn apply_jump_and_gravity(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &mut LocomotionInput,
    dt: f32,
    animator: &mut Animator,
) -> VerticalOutcome {
    if state.grounded {
        apply_grounded(state, config, input, dt, animator)
    } else {
        apply_airborne(state, config, input, dt, animator)
    }
}

fn apply_grounded(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &LocomotionInput,
    dt: f32,
    animator: &mut Animator,
) -> VerticalOutcome {
    let mut outcome = VerticalOutcome::default();

    state.fall_timeout_remaining = config.fall_timeout;
    animator.set_bool(AnimationSignal::Jump, false);
    animator.set_bool(AnimationSignal::FreeFall, false);

    if state.vertical_velocity < 0.0 {
        state.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
    }

    if input.jump && state.jump_timeout_remaining <= 0.0 {
        state.vertical_velocity = config.jump_velocity();
        animator.set_bool(AnimationSignal::Jump, true);
        outcome.jumped = true;
    }

    // Allowed to dip one tick below zero; reset on the next airborne tick.
    if state.jump_timeout_remaining >= 0.0 {
        state.jump_timeout_remaining -= dt;
    }

    outcome
}

fn apply_airborne(
    state: &mut ControllerState,
    config: &ControllerConfig,
    input: &mut LocomotionInput,
    dt: f32,
    animator: &mut Animator,
) -> VerticalOutcome {
    let mut outcome = VerticalOutcome::default();

    state.jump_timeout_remaining = config.jump_timeout;

    if state.fall_timeout_remaining >= 0.0 {
        state.fall_timeout_remaining -= dt;
        outcome.entered_free_fall = state.fall_timeout_remaining < 0.0;
    }

    if state.fall_timeout_remaining < 0.0 {
        animator.set_bool(AnimationSignal::FreeFall, true);
        // A jump requested mid-fall must not fire on landing
        input.jump = false;
        outcome.free_fall = true;
    }

    let floor = -config.terminal_velocity;
    if state.vertical_velocity > floor {
        state.vertical_velocity = (state.vertical_velocity + config.gravity * dt).max(floor);
    }

    outcome
}
