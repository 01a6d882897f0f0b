//! Capabilities the host engine lends the controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use techart_common::Transform;

/// Character capsule geometry in the body's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capsule {
    pub center: Vec3,
    pub height: f32,
    pub radius: f32,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, 1.0, 0.0),
            height: 2.0,
            radius: 0.5,
        }
    }
}

/// A character capsule moved by collision-aware sliding.
///
/// Required: a controller cannot be built without one.
pub trait CharacterBody {
    /// Whether the last move ended touching ground.
    fn is_grounded(&self) -> bool;
    /// Velocity resolved by the last move.
    fn velocity(&self) -> Vec3;
    fn transform(&self) -> Transform;
    fn capsule(&self) -> Capsule;
    /// Move by `displacement`, sliding along obstacles, and refresh the
    /// grounded flag and velocity for the next tick.
    fn move_and_slide(&mut self, displacement: Vec3);
}

/// Scene ray queries.
pub trait Raycast {
    /// Whether anything lies along the ray within `max_distance`.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool;
}

/// Orientation of the view that movement input is relative to.
pub trait ViewBasis {
    fn forward(&self) -> Vec3;
    fn right(&self) -> Vec3;
}

/// Boolean animation parameters written by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimParam {
    Crouch,
    Run,
    Sprint,
    Air,
}

impl AnimParam {
    pub fn name(self) -> &'static str {
        match self {
            AnimParam::Crouch => "crouch",
            AnimParam::Run => "run",
            AnimParam::Sprint => "sprint",
            AnimParam::Air => "air",
        }
    }
}

/// Optional sink for animation parameters.
pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimParam, value: bool);
}

/// Placeholder sink type for controllers built without animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl AnimationSink for NoAnimation {
    fn set_bool(&mut self, _param: AnimParam, _value: bool) {}
}
