use std::collections::HashSet;

use crate::key::KeyCode;

/// Level and edge state for every key the host reports.
///
/// The host calls [`ButtonInput::clear_frame`] once at the start of each frame,
/// then feeds press/release events. Edges stay visible until the next clear.
#[derive(Debug, Clone, Default)]
pub struct ButtonInput {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl ButtonInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key going down. Repeats while already held are ignored.
    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    /// Register a key going up.
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Whether the key is currently down.
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether the key went down since the last [`ButtonInput::clear_frame`].
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.pressed(*k))
    }

    pub fn any_just_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.just_pressed(*k))
    }

    /// Forget this frame's edges. Held keys stay held.
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
    }
}
