use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use techart_input::{InputConfig, InputConfigError};
use techart_locomotion::{Capsule, ConfigError, MotionConfig, SetupError};

use crate::camera::CameraConfig;
use crate::level::Level;

/// Errors from loading or assembling a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("motion config: {0}")]
    Motion(#[from] ConfigError),
    #[error("input config: {0}")]
    Input(#[from] InputConfigError),
    #[error("controller setup: {0}")]
    Setup(#[from] SetupError),
    #[error("fixed_timestep must be positive and finite, got {0}")]
    BadTimestep(f32),
    #[error("capsule {field} out of range, got {value}")]
    BadCapsule { field: &'static str, value: f32 },
    #[error("ceiling {index} needs finite corners with min <= max, got {min} / {max}")]
    BadCeiling { index: usize, min: Vec3, max: Vec3 },
}

/// Everything needed to assemble a [`crate::Scene`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub motion: MotionConfig,
    pub input: InputConfig,
    pub level: Level,
    /// Physics tick length in seconds.
    pub fixed_timestep: f32,
    pub spawn: Vec3,
    pub capsule: Capsule,
    pub camera: CameraConfig,
    /// Whether the light starts switched on.
    pub light_on: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            input: InputConfig::default(),
            level: Level::default(),
            fixed_timestep: 0.02,
            spawn: Vec3::ZERO,
            capsule: Capsule::default(),
            camera: CameraConfig::default(),
            light_on: false,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        self.motion.validate()?;
        self.input.validate()?;
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(SceneError::BadTimestep(self.fixed_timestep));
        }
        let capsule = self.capsule;
        if !capsule.height.is_finite() || capsule.height <= 0.0 {
            return Err(SceneError::BadCapsule {
                field: "height",
                value: capsule.height,
            });
        }
        if !capsule.radius.is_finite() || capsule.radius < 0.0 {
            return Err(SceneError::BadCapsule {
                field: "radius",
                value: capsule.radius,
            });
        }
        if let Some((index, c)) = self
            .level
            .ceilings
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_well_formed())
        {
            return Err(SceneError::BadCeiling {
                index,
                min: c.min,
                max: c.max,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&data)?;
        tracing::debug!(path = %path.as_ref().display(), "scene config loaded");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}
