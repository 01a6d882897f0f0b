use techart_interact::{Activatable, Usable};

/// The light object switched by the interaction script.
#[derive(Debug, Clone)]
pub struct Lamp {
    active: bool,
    switches: u32,
}

impl Lamp {
    pub fn new() -> Self {
        Self {
            active: false,
            switches: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of `set_active` calls received.
    pub fn switches(&self) -> u32 {
        self.switches
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Activatable for Lamp {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.switches += 1;
        tracing::debug!(active, "lamp set active");
    }
}

/// A door that swings open or shut each time it is used.
#[derive(Debug, Clone)]
pub struct Door {
    open: bool,
    uses: u32,
}

impl Door {
    pub fn new() -> Self {
        Self {
            open: false,
            uses: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn uses(&self) -> u32 {
        self.uses
    }
}

impl Default for Door {
    fn default() -> Self {
        Self::new()
    }
}

impl Usable for Door {
    fn use_object(&mut self) {
        self.open = !self.open;
        self.uses += 1;
        tracing::debug!(open = self.open, "door used");
    }
}
