use glam::Vec3;
use std::sync::Arc;
use techart_common::Transform;
use techart_locomotion::{Capsule, CharacterBody};

use crate::level::Level;

/// Ground contact tolerance.
const SKIN: f32 = 1e-4;

/// Kinematic capsule against a [`Level`].
///
/// Stand-in for an engine character controller: free horizontal motion,
/// feet clamped to the floor, upward motion stopped under ceilings.
#[derive(Debug, Clone)]
pub struct KinematicCapsule {
    transform: Transform,
    capsule: Capsule,
    level: Arc<Level>,
    velocity: Vec3,
    grounded: bool,
    step_dt: f32,
}

impl KinematicCapsule {
    /// `step_dt` is the physics tick length used to derive velocity from a move.
    pub fn new(level: Arc<Level>, position: Vec3, capsule: Capsule, step_dt: f32) -> Self {
        let mut body = Self {
            transform: Transform::from_position(position),
            capsule,
            level,
            velocity: Vec3::ZERO,
            grounded: false,
            step_dt,
        };
        body.grounded = body.feet_y() <= body.level.floor_y + SKIN;
        body
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn teleport(&mut self, position: Vec3) {
        self.transform.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = self.feet_y() <= self.level.floor_y + SKIN;
    }

    fn foot_offset(&self) -> f32 {
        self.capsule.center.y - self.capsule.height / 2.0
    }

    fn head_offset(&self) -> f32 {
        self.capsule.center.y + self.capsule.height / 2.0
    }

    fn feet_y(&self) -> f32 {
        self.transform.position.y + self.foot_offset()
    }
}

impl CharacterBody for KinematicCapsule {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn capsule(&self) -> Capsule {
        self.capsule
    }

    fn move_and_slide(&mut self, displacement: Vec3) {
        let start = self.transform.position;
        let mut target = start + displacement;

        if displacement.y > 0.0 {
            let head_start = start.y + self.head_offset();
            let probe = Vec3::new(target.x, head_start, target.z);
            if let Some(ceiling) = self.level.ceiling_above(probe, self.capsule.radius) {
                let head_target = target.y + self.head_offset();
                if head_target > ceiling {
                    target.y = ceiling - self.head_offset();
                }
            }
        }

        self.grounded = false;
        if target.y + self.foot_offset() <= self.level.floor_y + SKIN {
            target.y = self.level.floor_y - self.foot_offset();
            self.grounded = true;
        }

        self.velocity = if self.step_dt > 0.0 {
            (target - start) / self.step_dt
        } else {
            Vec3::ZERO
        };
        self.transform.position = target;
    }
}
