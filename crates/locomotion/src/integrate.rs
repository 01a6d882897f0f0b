use glam::Vec3;
use techart_common::{planar, smooth_step};

use crate::config::{CROUCH_SPEED_FACTOR, JUMP_FORCE_FLOOR, MotionConfig};
use crate::host::ViewBasis;
use crate::state::MotionState;

/// Planar movement input, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveAxes {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Camera forward/right flattened onto the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl PlanarBasis {
    /// World axes: +Z forward, +X right.
    pub const WORLD: PlanarBasis = PlanarBasis {
        forward: Vec3::Z,
        right: Vec3::X,
    };

    pub fn from_view(view: &impl ViewBasis) -> Self {
        Self {
            forward: planar(view.forward()),
            right: planar(view.right()),
        }
    }
}

/// Speed modifier for the current stance.
///
/// Crouch is checked after sprint and overwrites it: a crouching sprinter
/// gets only the crouch penalty.
pub fn velocity_addend(state: &MotionState, config: &MotionConfig) -> f32 {
    let mut addend = 0.0;
    if state.is_sprinting {
        addend = config.sprint_bonus;
    }
    if state.is_crouching {
        addend = -(config.speed * CROUCH_SPEED_FACTOR);
    }
    addend
}

/// Upward displacement from the jump arc for one tick, advancing the jump clock.
///
/// The lift eases from `jump_force` to `jump_force * 0.3` over the jump and
/// the jump ends on the tick its clock reaches `jump_duration`.
pub fn jump_lift(state: &mut MotionState, config: &MotionConfig, dt: f32) -> f32 {
    if !state.is_jumping {
        return 0.0;
    }
    let t = state.jump_elapsed / config.jump_duration;
    let lift = smooth_step(config.jump_force, config.jump_force * JUMP_FORCE_FLOOR, t) * dt;
    state.jump_elapsed += dt;
    if state.jump_elapsed >= config.jump_duration {
        state.reset_jump();
    }
    lift
}

/// Physics-tick step: displacement to hand to the body's move.
pub fn integrate_motion(
    state: &mut MotionState,
    axes: MoveAxes,
    config: &MotionConfig,
    dt: f32,
    basis: &PlanarBasis,
) -> Vec3 {
    let speed = config.speed + velocity_addend(state, config);
    let dx = axes.horizontal * speed * dt;
    let dz = axes.vertical * speed * dt;

    let dy = jump_lift(state, config, dt) - config.gravity * dt;

    basis.forward * dz + basis.right * dx + Vec3::Y * dy
}
