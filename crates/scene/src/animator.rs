use std::collections::BTreeMap;
use techart_locomotion::{AnimParam, AnimationSink};

/// Animation sink that remembers the latest value of each parameter.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    params: BTreeMap<AnimParam, bool>,
    writes: u64,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value, or `None` if never written.
    pub fn get(&self, param: AnimParam) -> Option<bool> {
        self.params.get(&param).copied()
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Parameters currently set to true, by name.
    pub fn active(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|(_, on)| **on)
            .map(|(p, _)| p.name())
            .collect()
    }
}

impl AnimationSink for RecordingAnimator {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        self.params.insert(param, value);
        self.writes += 1;
    }
}
