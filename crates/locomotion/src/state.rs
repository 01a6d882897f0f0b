use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-character state carried across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub is_jumping: bool,
    /// Seconds since the current jump started.
    pub jump_elapsed: f32,
    pub is_sprinting: bool,
    pub is_crouching: bool,
}

impl MotionState {
    /// End any jump in progress and rewind its clock.
    pub fn reset_jump(&mut self) {
        self.is_jumping = false;
        self.jump_elapsed = 0.0;
    }

    pub fn phase(&self, grounded: bool) -> Phase {
        if self.is_jumping {
            Phase::Jumping
        } else if grounded {
            Phase::Grounded
        } else {
            Phase::Airborne
        }
    }
}

/// Coarse movement phase derived from [`MotionState`] and the grounded flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Grounded,
    Jumping,
    /// Falling without jump lift (walked off a ledge, or the jump ended).
    Airborne,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Grounded => "grounded",
            Phase::Jumping => "jumping",
            Phase::Airborne => "airborne",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_default() {
        let s = MotionState::default();
        assert!(!s.is_jumping && !s.is_sprinting && !s.is_crouching);
        assert_eq!(s.jump_elapsed, 0.0);
    }

    #[test]
    fn reset_jump_clears_clock() {
        let mut s = MotionState {
            is_jumping: true,
            jump_elapsed: 0.4,
            is_crouching: true,
            ..MotionState::default()
        };
        s.reset_jump();
        assert!(!s.is_jumping);
        assert_eq!(s.jump_elapsed, 0.0);
        assert!(s.is_crouching);
    }

    #[test]
    fn phase_mapping() {
        let mut s = MotionState::default();
        assert_eq!(s.phase(true), Phase::Grounded);
        assert_eq!(s.phase(false), Phase::Airborne);
        s.is_jumping = true;
        assert_eq!(s.phase(true), Phase::Jumping);
        assert_eq!(s.phase(false).to_string(), "jumping");
    }
}
