use std::collections::HashMap;

use bevy::math::DVec2;

/// Last known NDC sample for every touch currently in contact.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    samples: HashMap<u64, DVec2>,
}

impl TouchTracker {
    /// Record `ndc` for `id`, overwriting any previous sample.
    pub fn start(&mut self, id: u64, ndc: DVec2) {
        self.samples.insert(id, ndc);
    }

    pub fn current(&self, id: u64) -> Option<DVec2> {
        self.samples.get(&id).copied()
    }

    pub fn end(&mut self, id: u64) {
        self.samples.remove(&id);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
