use serde::{Deserialize, Serialize};
use std::path::Path;
use techart_input::{Axis, InputMap, KeyCode};

use crate::config::SceneError;

/// An analog axis value held from its step until replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalogInput {
    pub axis: Axis,
    pub value: f32,
}

/// Input changes applied at the start of one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frame: u64,
    #[serde(default)]
    pub press: Vec<KeyCode>,
    #[serde(default)]
    pub release: Vec<KeyCode>,
    #[serde(default)]
    pub analog: Vec<AnalogInput>,
}

impl ScriptStep {
    pub fn at(frame: u64) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn press(mut self, key: KeyCode) -> Self {
        self.press.push(key);
        self
    }

    pub fn release(mut self, key: KeyCode) -> Self {
        self.release.push(key);
        self
    }

    pub fn analog(mut self, axis: Axis, value: f32) -> Self {
        self.analog.push(AnalogInput { axis, value });
        self
    }
}

/// A replayable timeline of key and stick input, ordered by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|s| s.frame);
        Self { steps }
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let steps: Vec<ScriptStep> = serde_json::from_str(json)?;
        Ok(Self::new(steps))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Frame of the last step, or 0 for an empty script.
    pub fn last_frame(&self) -> u64 {
        self.steps.last().map_or(0, |s| s.frame)
    }

    /// Feed this frame's key events and the analog values in force.
    pub fn apply(&self, frame: u64, input: &mut InputMap) {
        for step in self.steps.iter().filter(|s| s.frame == frame) {
            for key in &step.release {
                input.release(*key);
            }
            for key in &step.press {
                input.press(*key);
            }
        }
        for axis in Axis::ALL {
            let held = self
                .steps
                .iter()
                .take_while(|s| s.frame <= frame)
                .flat_map(|s| s.analog.iter())
                .filter(|a| a.axis == axis)
                .last();
            if let Some(a) = held {
                input.set_analog(axis, a.value);
            }
        }
    }
}
