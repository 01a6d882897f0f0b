use glam::Vec3;
use serde::{Deserialize, Serialize};
use techart_locomotion::ViewBasis;

/// Initial camera orientation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yaw_degrees: -90.0,
            pitch_degrees: -20.0,
            distance: 5.0,
        }
    }
}

/// Third-person orbit camera. Only its orientation matters to movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub sensitivity: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl FollowCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            yaw: config.yaw_degrees.to_radians(),
            pitch: config.pitch_degrees.to_radians(),
            distance: config.distance,
            sensitivity: 0.003,
        }
    }

    /// Apply a mouse delta in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Camera position orbiting `target`.
    pub fn eye(&self, target: Vec3) -> Vec3 {
        target - ViewBasis::forward(self) * self.distance
    }
}

impl ViewBasis for FollowCamera {
    fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    fn right(&self) -> Vec3 {
        ViewBasis::forward(self).cross(Vec3::Y).normalize()
    }
}
