use serde::{Deserialize, Serialize};

use crate::key::KeyCode;

/// A discrete, edge-triggered intent a script can react to.
///
/// Scripts consume actions, never raw keys, so rebinding never touches
/// gameplay code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Switch the held light on or off.
    ToggleLight,
    /// Operate the interactable in reach (a door).
    Use,
    /// Flip between standing and crouching.
    Crouch,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::ToggleLight, Action::Use, Action::Crouch];
}

/// Keys bound to each [`Action`]. Any bound key fires the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionBindings {
    pub toggle_light: Vec<KeyCode>,
    pub use_object: Vec<KeyCode>,
    pub crouch: Vec<KeyCode>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            toggle_light: vec![KeyCode::F],
            use_object: vec![KeyCode::E],
            crouch: vec![KeyCode::LeftControl, KeyCode::JoystickButton1],
        }
    }
}

impl ActionBindings {
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::ToggleLight => &self.toggle_light,
            Action::Use => &self.use_object,
            Action::Crouch => &self.crouch,
        }
    }
}
