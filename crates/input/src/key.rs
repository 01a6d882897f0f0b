use serde::{Deserialize, Serialize};

/// Physical keys and buttons the default bindings refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    E,
    F,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    LeftShift,
    LeftControl,
    JoystickButton0,
    JoystickButton1,
    JoystickButton2,
}
