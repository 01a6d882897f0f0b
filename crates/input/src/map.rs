use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionBindings};
use crate::axis::{Axis, AxisBindings, VirtualAxis};
use crate::buttons::ButtonInput;
use crate::key::KeyCode;

/// What a script may ask of the input layer during a frame.
pub trait InputSource {
    /// Current value of a named axis, in `[-1, 1]`.
    fn axis(&self, axis: Axis) -> f32;
    /// Whether the action fired (rising edge) this frame.
    fn action_pressed(&self, action: Action) -> bool;
}

/// Errors from validating input bindings.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputConfigError {
    #[error("axis {0} has no keys bound")]
    UnboundAxis(&'static str),
    #[error("action {0:?} has no keys bound")]
    UnboundAction(Action),
    #[error("axis {axis} sensitivity must be positive, got {value}")]
    BadSensitivity { axis: &'static str, value: f32 },
}

/// Axis and action bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub axes: AxisBindings,
    pub actions: ActionBindings,
}

impl InputConfig {
    pub fn validate(&self) -> Result<(), InputConfigError> {
        for axis in Axis::ALL {
            let binding = self.axes.get(axis);
            if binding.is_unbound() {
                return Err(InputConfigError::UnboundAxis(axis.name()));
            }
            if binding.sensitivity.is_nan() || binding.sensitivity <= 0.0 {
                return Err(InputConfigError::BadSensitivity {
                    axis: axis.name(),
                    value: binding.sensitivity,
                });
            }
        }
        for action in Action::ALL {
            if self.actions.keys(action).is_empty() {
                return Err(InputConfigError::UnboundAction(action));
            }
        }
        Ok(())
    }
}

/// Live input state: key levels and edges plus smoothed axes.
///
/// Per frame the host calls [`InputMap::begin_frame`], feeds key events,
/// then [`InputMap::update`] with the frame delta before scripts run.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    config: InputConfig,
    buttons: ButtonInput,
    axes: [VirtualAxis; 4],
}

impl InputMap {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            buttons: ButtonInput::new(),
            axes: [VirtualAxis::default(); 4],
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn buttons(&self) -> &ButtonInput {
        &self.buttons
    }

    /// Drop last frame's edges and analog overrides.
    pub fn begin_frame(&mut self) {
        self.buttons.clear_frame();
        for axis in &mut self.axes {
            axis.clear_analog();
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        tracing::trace!(?key, "key down");
        self.buttons.press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        tracing::trace!(?key, "key up");
        self.buttons.release(key);
    }

    /// Override an axis for the current frame.
    pub fn set_analog(&mut self, axis: Axis, value: f32) {
        self.axes[axis.index()].set_analog(value);
    }

    /// Advance keyboard-driven axes by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for axis in Axis::ALL {
            let binding = self.config.axes.get(axis);
            self.axes[axis.index()].update(binding, &self.buttons, dt);
        }
    }
}

impl InputSource for InputMap {
    fn axis(&self, axis: Axis) -> f32 {
        self.axes[axis.index()].value(self.config.axes.get(axis))
    }

    fn action_pressed(&self, action: Action) -> bool {
        self.buttons.any_just_pressed(self.config.actions.keys(action))
    }
}
