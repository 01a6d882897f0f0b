//! Interaction script: a toggleable light plus a "use" key for a door.
//!
//! # Invariants
//! - After every tick the light object's active flag equals `light_on`.
//! - At most one trigger is honored per tick; the light toggle wins.

use techart_input::{Action, InputSource};

/// An object whose active/visible flag can be switched.
pub trait Activatable {
    fn set_active(&mut self, active: bool);
}

/// An externally owned object exposing a single use action.
pub trait Usable {
    fn use_object(&mut self);
}

/// Which trigger a tick honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    None,
    ToggleLight,
    Use,
}

/// Pick the trigger to honor from this tick's raw edges.
///
/// The checks form an else-if chain: when both fire in the same tick only
/// the light toggle is honored and `Use` is dropped.
pub fn decide_trigger(toggle_pressed: bool, use_pressed: bool) -> Trigger {
    if toggle_pressed {
        Trigger::ToggleLight
    } else if use_pressed {
        Trigger::Use
    } else {
        Trigger::None
    }
}

/// Owns the light state and drives the two collaborators.
#[derive(Debug, Clone, Default)]
pub struct InteractionToggle {
    light_on: bool,
}

impl InteractionToggle {
    /// Starts with the light off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_light(light_on: bool) -> Self {
        Self { light_on }
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    /// Push the current state to the light object.
    pub fn sync(&self, light: &mut dyn Activatable) {
        light.set_active(self.light_on);
    }

    /// Poll both triggers and apply the honored one.
    pub fn tick(
        &mut self,
        input: &impl InputSource,
        light: &mut dyn Activatable,
        usable: &mut dyn Usable,
    ) -> Trigger {
        let trigger = decide_trigger(
            input.action_pressed(Action::ToggleLight),
            input.action_pressed(Action::Use),
        );
        match trigger {
            Trigger::ToggleLight => {
                self.light_on = !self.light_on;
                light.set_active(self.light_on);
                tracing::info!(on = self.light_on, "light toggled");
            }
            Trigger::Use => {
                usable.use_object();
                tracing::info!("interactable used");
            }
            Trigger::None => {}
        }
        trigger
    }
}
