/// Errors from validating [`crate::MotionConfig`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("jump_duration must be positive, got {0}")]
    NonPositiveJumpDuration(f32),
}

/// Wiring faults surfaced once when building a controller.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SetupError {
    #[error("no character body attached; the controller has nothing to move")]
    MissingBody,
    #[error("invalid motion config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
