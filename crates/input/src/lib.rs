//! Input layer: raw key state mapped to named axes and actions.
//!
//! Scene scripts consume [`InputSource`], never raw key events, so the same
//! script logic runs against a live keyboard, a gamepad shim or a replayed
//! script.
//!
//! # Invariants
//! - Axis values are always within `[-1, 1]`.
//! - An action edge is reported for exactly one frame per physical press.

pub mod action;
pub mod axis;
pub mod buttons;
pub mod key;
pub mod map;

pub use action::{Action, ActionBindings};
pub use axis::{Axis, AxisBinding, AxisBindings, VirtualAxis};
pub use buttons::ButtonInput;
pub use key::KeyCode;
pub use map::{InputConfig, InputConfigError, InputMap, InputSource};
