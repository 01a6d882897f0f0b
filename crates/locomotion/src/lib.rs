//! Locomotion controller: camera-relative walking, sprint, crouch and a
//! smoothed jump arc under constant gravity.
//!
//! Decision logic is split into two pure steps so it can be tested without a
//! host engine:
//! - [`decide_intent`] runs once per rendered frame and updates [`MotionState`]
//!   from sampled input and what the body reports.
//! - [`integrate_motion`] runs at the fixed physics cadence and turns state
//!   plus input into a displacement for the host's collision-aware move.
//!
//! # Invariants
//! - `jump_elapsed` stays within `[0, jump_duration)` between ticks.
//! - Gravity is subtracted on every physics tick, grounded or not.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod integrate;
pub mod intent;
pub mod state;

pub use config::MotionConfig;
pub use controller::{LocomotionBuilder, LocomotionController};
pub use error::{ConfigError, SetupError};
pub use host::{AnimParam, AnimationSink, Capsule, CharacterBody, NoAnimation, Raycast, ViewBasis};
pub use integrate::{MoveAxes, PlanarBasis, integrate_motion, jump_lift, velocity_addend};
pub use intent::{AnimationFrame, BodySnapshot, Intent, IntentInput, decide_intent, head_probe};
pub use state::{MotionState, Phase};
