use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Planar speed above which the body counts as running.
pub const RUN_SPEED_THRESHOLD: f32 = 0.9;
/// Head probe length as a multiple of half the capsule height.
pub const HEAD_PROBE_FACTOR: f32 = 1.1;
/// Crouching subtracts this fraction of the base speed.
pub const CROUCH_SPEED_FACTOR: f32 = 0.5;
/// The jump lift eases from `jump_force` down to this fraction of it.
pub const JUMP_FORCE_FLOOR: f32 = 0.3;

/// Movement tunables, fixed for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Base walking speed in units per second. Unaffected by gravity or jumping.
    pub speed: f32,
    /// Added to `speed` while sprinting.
    pub sprint_bonus: f32,
    /// Upward speed at the start of a jump.
    pub jump_force: f32,
    /// Seconds the jump lift lasts before gravity takes over alone.
    pub jump_duration: f32,
    /// Downward speed applied every physics tick.
    pub gravity: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            sprint_bonus: 3.5,
            jump_force: 18.0,
            jump_duration: 0.85,
            gravity: 9.8,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("speed", self.speed),
            ("sprint_bonus", self.sprint_bonus),
            ("jump_force", self.jump_force),
            ("jump_duration", self.jump_duration),
            ("gravity", self.gravity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        for (field, value) in [
            ("speed", self.speed),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.jump_duration <= 0.0 {
            return Err(ConfigError::NonPositiveJumpDuration(self.jump_duration));
        }
        Ok(())
    }

    /// Highest horizontal speed reachable (sprinting, not crouching).
    pub fn sprint_speed(&self) -> f32 {
        self.speed + self.sprint_bonus
    }

    pub fn crouch_speed(&self) -> f32 {
        self.speed - self.speed * CROUCH_SPEED_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = MotionConfig::default();
        assert_eq!(c.speed, 5.0);
        assert_eq!(c.sprint_bonus, 3.5);
        assert_eq!(c.jump_force, 18.0);
        assert_eq!(c.jump_duration, 0.85);
        assert_eq!(c.gravity, 9.8);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn derived_speeds() {
        let c = MotionConfig::default();
        assert_eq!(c.sprint_speed(), 8.5);
        assert_eq!(c.crouch_speed(), 2.5);
    }

    #[test]
    fn zero_jump_duration_is_rejected() {
        let c = MotionConfig {
            jump_duration: 0.0,
            ..MotionConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::NonPositiveJumpDuration(0.0)));
    }

    #[test]
    fn negative_gravity_is_rejected() {
        let c = MotionConfig {
            gravity: -1.0,
            ..MotionConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Negative { field: "gravity", .. })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let c = MotionConfig {
            sprint_bonus: f32::NAN,
            ..MotionConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NotFinite { field: "sprint_bonus", .. })
        ));
    }

    #[test]
    fn negative_sprint_bonus_is_allowed() {
        let c = MotionConfig {
            sprint_bonus: -1.0,
            ..MotionConfig::default()
        };
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: MotionConfig = serde_json::from_str(r#"{ "gravity": 20.0 }"#).unwrap();
        assert_eq!(c.gravity, 20.0);
        assert_eq!(c.speed, 5.0);
    }
}
