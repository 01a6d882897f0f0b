use serde::{Deserialize, Serialize};

use crate::buttons::ButtonInput;
use crate::key::KeyCode;

/// Named continuous inputs sampled by the scene scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    Jump,
    Fire3,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::Jump, Axis::Fire3];

    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
            Axis::Jump => 2,
            Axis::Fire3 => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "Horizontal",
            Axis::Vertical => "Vertical",
            Axis::Jump => "Jump",
            Axis::Fire3 => "Fire3",
        }
    }
}

/// Keyboard binding and response curve for one virtual axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisBinding {
    /// Keys driving the axis toward +1.
    pub positive: Vec<KeyCode>,
    /// Keys driving the axis toward -1.
    pub negative: Vec<KeyCode>,
    /// Units per second the value falls back to 0 with no key held.
    pub gravity: f32,
    /// Units per second the value moves toward a held direction.
    pub sensitivity: f32,
    /// Jump to 0 before reversing direction.
    pub snap: bool,
    /// Magnitudes below this read as 0.
    pub dead_zone: f32,
}

impl Default for AxisBinding {
    fn default() -> Self {
        Self {
            positive: Vec::new(),
            negative: Vec::new(),
            gravity: 3.0,
            sensitivity: 3.0,
            snap: true,
            dead_zone: 0.001,
        }
    }
}

impl AxisBinding {
    /// Two-sided movement axis with gentle ramp up and fall off.
    pub fn movement(positive: Vec<KeyCode>, negative: Vec<KeyCode>) -> Self {
        Self {
            positive,
            negative,
            ..Self::default()
        }
    }

    /// One-sided button axis that saturates on the first frame.
    pub fn button(positive: Vec<KeyCode>) -> Self {
        Self {
            positive,
            negative: Vec::new(),
            gravity: 1000.0,
            sensitivity: 1000.0,
            snap: false,
            dead_zone: 0.001,
        }
    }

    pub fn is_unbound(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Bindings for every [`Axis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisBindings {
    pub horizontal: AxisBinding,
    pub vertical: AxisBinding,
    pub jump: AxisBinding,
    pub fire3: AxisBinding,
}

impl Default for AxisBindings {
    fn default() -> Self {
        Self {
            horizontal: AxisBinding::movement(
                vec![KeyCode::D, KeyCode::ArrowRight],
                vec![KeyCode::A, KeyCode::ArrowLeft],
            ),
            vertical: AxisBinding::movement(
                vec![KeyCode::W, KeyCode::ArrowUp],
                vec![KeyCode::S, KeyCode::ArrowDown],
            ),
            jump: AxisBinding::button(vec![KeyCode::Space, KeyCode::JoystickButton0]),
            fire3: AxisBinding::button(vec![KeyCode::LeftShift, KeyCode::JoystickButton2]),
        }
    }
}

impl AxisBindings {
    pub fn get(&self, axis: Axis) -> &AxisBinding {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
            Axis::Jump => &self.jump,
            Axis::Fire3 => &self.fire3,
        }
    }
}

/// Smoothed value of one axis driven by digital keys, with an optional
/// per-frame analog override.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualAxis {
    value: f32,
    analog: Option<f32>,
}

impl VirtualAxis {
    /// Advance the keyboard-driven value by `dt` seconds.
    pub fn update(&mut self, binding: &AxisBinding, buttons: &ButtonInput, dt: f32) {
        let positive = buttons.any_pressed(&binding.positive);
        let negative = buttons.any_pressed(&binding.negative);
        let target = match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };

        if target == 0.0 {
            self.value = move_towards(self.value, 0.0, binding.gravity * dt);
        } else {
            if binding.snap && self.value != 0.0 && self.value.signum() != target {
                self.value = 0.0;
            }
            self.value = move_towards(self.value, target, binding.sensitivity * dt);
        }
    }

    /// Override the value for the current frame (gamepad stick, replay).
    pub fn set_analog(&mut self, value: f32) {
        self.analog = Some(value.clamp(-1.0, 1.0));
    }

    pub fn clear_analog(&mut self) {
        self.analog = None;
    }

    /// Current value after dead zone, analog override taking precedence.
    pub fn value(&self, binding: &AxisBinding) -> f32 {
        let raw = self.analog.unwrap_or(self.value);
        if raw.abs() < binding.dead_zone { 0.0 } else { raw }
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> AxisBinding {
        AxisBindings::default().horizontal
    }

    #[test]
    fn axis_ramps_toward_held_direction() {
        let binding = horizontal();
        let mut buttons = ButtonInput::new();
        buttons.press(KeyCode::D);
        let mut axis = VirtualAxis::default();

        axis.update(&binding, &buttons, 0.1);
        assert!((axis.value(&binding) - 0.3).abs() < 1e-5);

        for _ in 0..10 {
            axis.update(&binding, &buttons, 0.1);
        }
        assert_eq!(axis.value(&binding), 1.0);
    }

    #[test]
    fn axis_falls_back_with_gravity() {
        let binding = horizontal();
        let mut buttons = ButtonInput::new();
        buttons.press(KeyCode::A);
        let mut axis = VirtualAxis::default();
        axis.update(&binding, &buttons, 1.0);
        assert_eq!(axis.value(&binding), -1.0);

        buttons.release(KeyCode::A);
        axis.update(&binding, &buttons, 0.1);
        assert!((axis.value(&binding) + 0.7).abs() < 1e-5);
        axis.update(&binding, &buttons, 1.0);
        assert_eq!(axis.value(&binding), 0.0);
    }

    #[test]
    fn snap_resets_before_reversing() {
        let binding = horizontal();
        let mut buttons = ButtonInput::new();
        buttons.press(KeyCode::D);
        let mut axis = VirtualAxis::default();
        axis.update(&binding, &buttons, 1.0);

        buttons.release(KeyCode::D);
        buttons.press(KeyCode::A);
        axis.update(&binding, &buttons, 0.1);
        assert!((axis.value(&binding) + 0.3).abs() < 1e-5);
    }

    #[test]
    fn opposing_keys_cancel() {
        let binding = horizontal();
        let mut buttons = ButtonInput::new();
        buttons.press(KeyCode::A);
        buttons.press(KeyCode::D);
        let mut axis = VirtualAxis::default();
        axis.update(&binding, &buttons, 1.0);
        assert_eq!(axis.value(&binding), 0.0);
    }

    #[test]
    fn button_axis_saturates_in_one_frame() {
        let binding = AxisBindings::default().jump;
        let mut buttons = ButtonInput::new();
        buttons.press(KeyCode::Space);
        let mut axis = VirtualAxis::default();
        axis.update(&binding, &buttons, 1.0 / 60.0);
        assert_eq!(axis.value(&binding), 1.0);
    }

    #[test]
    fn analog_override_is_clamped_and_wins() {
        let binding = horizontal();
        let mut axis = VirtualAxis::default();
        axis.set_analog(3.0);
        assert_eq!(axis.value(&binding), 1.0);
        axis.clear_analog();
        assert_eq!(axis.value(&binding), 0.0);
    }

    #[test]
    fn dead_zone_reads_as_zero() {
        let binding = AxisBinding {
            dead_zone: 0.2,
            ..horizontal()
        };
        let mut axis = VirtualAxis::default();
        axis.set_analog(0.15);
        assert_eq!(axis.value(&binding), 0.0);
        axis.set_analog(-0.25);
        assert_eq!(axis.value(&binding), -0.25);
    }

    #[test]
    fn axis_indices_are_distinct() {
        let mut seen = [false; 4];
        for axis in Axis::ALL {
            assert!(!seen[axis.index()], "{} reuses an index", axis.name());
            seen[axis.index()] = true;
        }
    }
}
